//! The host scheduling runtime seam.

use crate::callback::Callback;
use crate::task::TrackedTask;
use std::rc::Rc;

/// Scheduling runtime the listener adapters delegate to.
///
/// Implementations decide when a freshly created task is armed and own the
/// cancellation contract; the adapters only promise that native
/// registration happens inside the schedule hook and deregistration inside
/// the unschedule hook. `wrap` produces the context-entering entry point
/// used for every native invocation of a callback.
pub trait ZoneRuntime {
    /// Wrap a callback so it runs inside the current execution context.
    fn wrap(&self, source: &str, callback: Callback) -> Callback;

    /// Take ownership of scheduling a freshly created task. Arms the task
    /// (via [`TrackedTask::arm`]) at the implementation's discretion.
    fn schedule_event_task(&self, task: &Rc<TrackedTask>);

    /// Cancel a task, driving its unschedule hook.
    fn cancel_task(&self, task: &Rc<TrackedTask>);
}

/// Zone runtime that arms and cancels tasks immediately and performs no
/// context tracking. The default when no host zone is present.
#[derive(Debug, Default)]
pub struct SyncZone;

impl ZoneRuntime for SyncZone {
    fn wrap(&self, _source: &str, callback: Callback) -> Callback {
        callback
    }

    fn schedule_event_task(&self, task: &Rc<TrackedTask>) {
        task.arm();
    }

    fn cancel_task(&self, task: &Rc<TrackedTask>) {
        task.unarm();
    }
}
