//! Event-task interception for native listener registration.
//!
//! Native views and observables expose `addEventListener` / `once` /
//! `removeEventListener` methods. This crate replaces those methods on the
//! shared class tables with wrappers that route every registration through a
//! scheduler-tracked task, so the host zone's execution context is entered
//! whenever a native event fires and torn down when a listener is removed
//! or fires exactly once.
//!
//! The moving parts:
//! - [`InterceptEngine`]: replaces a method on a class chain while
//!   preserving the original for delegation and restoration
//! - [`TaskLedger`]: per-target, per-event-name ordered task lists
//! - [`TrackedTask`]: one logical (target, event, callback, receiver)
//!   registration, with its schedule/unschedule hooks
//! - [`ZoneRuntime`]: the host scheduler seam
//! - [`patch_event_listeners`] / [`patch_connectivity`]: the adapters that
//!   tie the pieces together

pub mod callback;
pub mod connectivity;
pub mod intercept;
pub mod ledger;
pub mod listeners;
pub mod target;
pub mod task;
pub mod zone;

pub use callback::{Callback, EventData};
pub use connectivity::{START_MONITORING, patch_connectivity};
pub use intercept::InterceptEngine;
pub use ledger::TaskLedger;
pub use listeners::{
    ADD_EVENT_LISTENER, ListenerPatchOptions, ONCE, REMOVE_EVENT_LISTENER, patch_event_listeners,
    patch_event_listeners_with,
};
pub use target::{EventTarget, MethodArgs, NativeMethod, TargetClass};
pub use task::TrackedTask;
pub use zone::{SyncZone, ZoneRuntime};
