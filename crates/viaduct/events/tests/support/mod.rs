//! Shared mock collaborators: a recording native host and counting zones.
#![allow(dead_code, reason = "helpers are shared across test binaries")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viaduct_core::weak::Context;
use viaduct_events::{
    ADD_EVENT_LISTENER, Callback, EventData, EventTarget, MethodArgs, ONCE,
    REMOVE_EVENT_LISTENER, TargetClass, TrackedTask, ZoneRuntime,
};

/// Pointer identity of a target, usable as a map key.
pub fn key(target: &Rc<EventTarget>) -> usize {
    Rc::as_ptr(target) as usize
}

/// Pointer identity of a receiver context. The host records identities
/// rather than strong references so it never extends a receiver's lifetime.
pub fn context_key(context: &Context) -> usize {
    Rc::as_ptr(context) as *const () as usize
}

pub struct Registration {
    pub target: usize,
    pub event: String,
    pub handler: Callback,
    pub context: Option<usize>,
}

/// Records native listener registrations the way a platform event table
/// would, including removal by handler identity.
#[derive(Default)]
pub struct NativeHost {
    registrations: Rc<RefCell<Vec<Registration>>>,
    remove_calls: Rc<RefCell<usize>>,
}

impl NativeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the plain native listener methods on a class. `once` is an
    /// alias of `addEventListener` here: a platform without dedicated
    /// single-fire support, so auto-removal must come from the adapter.
    pub fn install(&self, class: &TargetClass) {
        let registrations = Rc::clone(&self.registrations);
        class.define_method(
            ADD_EVENT_LISTENER,
            Rc::new(move |target: &Rc<EventTarget>, args: MethodArgs| {
                registrations.borrow_mut().push(Registration {
                    target: key(target),
                    event: args.event.clone(),
                    handler: args.handler.clone(),
                    context: args.context.as_ref().map(context_key),
                });
            }),
        );

        let registrations = Rc::clone(&self.registrations);
        class.define_method(
            ONCE,
            Rc::new(move |target: &Rc<EventTarget>, args: MethodArgs| {
                registrations.borrow_mut().push(Registration {
                    target: key(target),
                    event: args.event.clone(),
                    handler: args.handler.clone(),
                    context: args.context.as_ref().map(context_key),
                });
            }),
        );

        let registrations = Rc::clone(&self.registrations);
        let remove_calls = Rc::clone(&self.remove_calls);
        class.define_method(
            REMOVE_EVENT_LISTENER,
            Rc::new(move |target: &Rc<EventTarget>, args: MethodArgs| {
                *remove_calls.borrow_mut() += 1;
                let mut registrations = registrations.borrow_mut();
                if let Some(index) = registrations.iter().position(|registration| {
                    registration.target == key(target)
                        && registration.event == args.event
                        && registration.handler.ptr_eq(&args.handler)
                }) {
                    registrations.remove(index);
                }
            }),
        );
    }

    /// Dispatch an event the way the native loop would: over a snapshot, so
    /// listeners that remove themselves mid-dispatch stay safe.
    pub fn fire(&self, target: &Rc<EventTarget>, event: &str) {
        let snapshot: Vec<Callback> = self
            .registrations
            .borrow()
            .iter()
            .filter(|registration| {
                registration.target == key(target) && registration.event == event
            })
            .map(|registration| registration.handler.clone())
            .collect();
        let data = EventData::new(event);
        for handler in snapshot {
            handler.call(&data);
        }
    }

    /// Number of live native registrations for (target, event).
    pub fn registered(&self, target: &Rc<EventTarget>, event: &str) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|registration| {
                registration.target == key(target) && registration.event == event
            })
            .count()
    }

    /// How many times native removal was invoked, matched or not.
    pub fn remove_calls(&self) -> usize {
        *self.remove_calls.borrow()
    }
}

/// Zone runtime that arms immediately and counts context entries,
/// schedules, and cancellations.
#[derive(Default)]
pub struct CountingZone {
    pub entered: Rc<Cell<usize>>,
    pub scheduled: Cell<usize>,
    pub cancelled: Cell<usize>,
}

impl ZoneRuntime for CountingZone {
    fn wrap(&self, _source: &str, callback: Callback) -> Callback {
        let entered = Rc::clone(&self.entered);
        Callback::new(move |data| {
            entered.set(entered.get() + 1);
            callback.call(data);
        })
    }

    fn schedule_event_task(&self, task: &Rc<TrackedTask>) {
        self.scheduled.set(self.scheduled.get() + 1);
        task.arm();
    }

    fn cancel_task(&self, task: &Rc<TrackedTask>) {
        self.cancelled.set(self.cancelled.get() + 1);
        task.unarm();
    }
}

/// Zone runtime that defers arming: tasks are parked until [`Self::flush`].
#[derive(Default)]
pub struct DeferredZone {
    parked: RefCell<Vec<Rc<TrackedTask>>>,
}

impl DeferredZone {
    pub fn flush(&self) {
        for task in self.parked.borrow_mut().drain(..) {
            task.arm();
        }
    }
}

impl ZoneRuntime for DeferredZone {
    fn wrap(&self, _source: &str, callback: Callback) -> Callback {
        callback
    }

    fn schedule_event_task(&self, task: &Rc<TrackedTask>) {
        self.parked.borrow_mut().push(Rc::clone(task));
    }

    fn cancel_task(&self, task: &Rc<TrackedTask>) {
        self.parked
            .borrow_mut()
            .retain(|parked| !Rc::ptr_eq(parked, task));
        task.unarm();
    }
}
