//! Tracked tasks: the scheduler-recognized unit for one registered listener.

use crate::callback::Callback;
use crate::target::EventTarget;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use viaduct_core::weak::{Context, WeakHandle, same_context};

/// Hook run by the zone runtime when a task is armed (native registration)
/// or cancelled (native deregistration).
pub type TaskHook = Box<dyn Fn(&Rc<TrackedTask>)>;

/// One logical (target, event, callback, receiver-context) registration.
///
/// The task borrows its target and receiver context weakly; the ledger owns
/// the task's place in its per-event list, and the zone runtime owns the
/// invocation/cancellation contract.
pub struct TrackedTask {
    /// Diagnostic name, `Class:event`.
    source: String,
    event: String,
    callback: Callback,
    /// Zone-wrapped entry point; what actually gets registered natively.
    invoke: Callback,
    target: Weak<EventTarget>,
    this_arg: Option<WeakHandle>,
    /// Set by the once adapter: the self-removing wrapper it registered
    /// natively in place of `invoke`.
    custom_callback: RefCell<Option<Callback>>,
    ran_once: Cell<bool>,
    removed: Cell<bool>,
    all_removed: Cell<bool>,
    schedule: TaskHook,
    unschedule: TaskHook,
}

impl TrackedTask {
    #[allow(clippy::too_many_arguments, reason = "constructed from one call site")]
    pub(crate) fn new(
        source: String,
        event: String,
        callback: Callback,
        invoke: Callback,
        this_arg: Option<WeakHandle>,
        target: Weak<EventTarget>,
        schedule: TaskHook,
        unschedule: TaskHook,
    ) -> Rc<Self> {
        Rc::new(Self {
            source,
            event,
            callback,
            invoke,
            target,
            this_arg,
            custom_callback: RefCell::new(None),
            ran_once: Cell::new(false),
            removed: Cell::new(false),
            all_removed: Cell::new(false),
            schedule,
            unschedule,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    /// The original callback as registered by the caller.
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// The context-entering entry point used for native registration.
    pub fn invoke(&self) -> &Callback {
        &self.invoke
    }

    pub fn target(&self) -> Option<Rc<EventTarget>> {
        self.target.upgrade()
    }

    /// The receiver context, if it is still alive.
    pub fn context(&self) -> Option<Context> {
        self.this_arg.as_ref().and_then(WeakHandle::resolve)
    }

    pub fn ran_once(&self) -> bool {
        self.ran_once.get()
    }

    pub fn set_ran_once(&self, ran: bool) {
        self.ran_once.set(ran);
    }

    pub fn is_removed(&self) -> bool {
        self.removed.get()
    }

    pub fn all_removed(&self) -> bool {
        self.all_removed.get()
    }

    pub(crate) fn mark_removed(&self) {
        self.removed.set(true);
    }

    pub(crate) fn mark_all_removed(&self) {
        self.all_removed.set(true);
    }

    pub fn custom_callback(&self) -> Option<Callback> {
        self.custom_callback.borrow().clone()
    }

    pub(crate) fn set_custom_callback(&self, callback: Callback) {
        *self.custom_callback.borrow_mut() = Some(callback);
    }

    /// The (callback, receiver-context) identity rule used for removal.
    pub(crate) fn matches(&self, callback: &Callback, context: Option<&Context>) -> bool {
        if !self.callback.ptr_eq(callback) {
            return false;
        }
        let own = self.context();
        same_context(own.as_ref(), context)
    }

    /// Run the schedule hook: perform the native registration.
    pub fn arm(self: &Rc<Self>) {
        (self.schedule)(self);
    }

    /// Run the unschedule hook: perform the native deregistration.
    pub fn unarm(self: &Rc<Self>) {
        (self.unschedule)(self);
    }
}
