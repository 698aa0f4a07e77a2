//! Listener task adapters: the patched `addEventListener` / `once` /
//! `removeEventListener` methods.
//!
//! Each patched method splits its (possibly comma-joined) event-name
//! argument and handles every name independently: one tracked task per
//! name, each individually removable. The native registration is never
//! performed directly — only inside a task's schedule hook, at the zone
//! runtime's discretion.

use crate::callback::Callback;
use crate::intercept::InterceptEngine;
use crate::target::{EventTarget, MethodArgs, NativeMethod, TargetClass};
use crate::task::{TaskHook, TrackedTask};
use crate::zone::ZoneRuntime;
use std::cell::RefCell;
use std::rc::Rc;
use viaduct_core::event_names::split_event_names;
use viaduct_core::weak::WeakHandle;

pub const ADD_EVENT_LISTENER: &str = "addEventListener";
pub const ONCE: &str = "once";
pub const REMOVE_EVENT_LISTENER: &str = "removeEventListener";

/// Knobs for [`patch_event_listeners_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenerPatchOptions {
    /// When set, registering the same (callback, receiver-context, event,
    /// target) twice is ignored instead of creating a second task. Off by
    /// default: the native layer tolerates duplicate registrations.
    pub check_duplicate: bool,
}

/// Shared slot for the pre-patch `removeEventListener`, needed by the
/// unschedule hooks of the other two adapters.
type RemovalSlot = Rc<RefCell<Option<NativeMethod>>>;

/// Intercept the listener lifecycle methods on `class` with default
/// options, routing every registration through `zone`-tracked tasks.
pub fn patch_event_listeners(class: &Rc<TargetClass>, zone: &Rc<dyn ZoneRuntime>) {
    patch_event_listeners_with(class, zone, ListenerPatchOptions::default());
}

/// Intercept the listener lifecycle methods on `class`.
pub fn patch_event_listeners_with(
    class: &Rc<TargetClass>,
    zone: &Rc<dyn ZoneRuntime>,
    options: ListenerPatchOptions,
) {
    // Removal is patched first: its original is shared with the add/once
    // unschedule hooks.
    let native_remove: RemovalSlot = Rc::new(RefCell::new(None));

    let removal = InterceptEngine::patch_method(class, REMOVE_EVENT_LISTENER, |original| {
        let zone = Rc::clone(zone);
        Rc::new(move |target: &Rc<EventTarget>, args: MethodArgs| {
            for event in split_event_names(&args.event) {
                remove_single_event(target, &event, &args, &original, &zone);
            }
        })
    });
    *native_remove.borrow_mut() = removal;

    let _ = InterceptEngine::patch_method(class, ADD_EVENT_LISTENER, |original| {
        let zone = Rc::clone(zone);
        let native_remove = Rc::clone(&native_remove);
        Rc::new(move |target: &Rc<EventTarget>, args: MethodArgs| {
            for event in split_event_names(&args.event) {
                add_single_event(target, &event, &args, &original, &native_remove, &zone, options);
            }
        })
    });

    let _ = InterceptEngine::patch_method(class, ONCE, |original| {
        let zone = Rc::clone(zone);
        let native_remove = Rc::clone(&native_remove);
        Rc::new(move |target: &Rc<EventTarget>, args: MethodArgs| {
            for event in split_event_names(&args.event) {
                once_single_event(target, &event, &args, &original, &native_remove, &zone, options);
            }
        })
    });
}

fn add_single_event(
    target: &Rc<EventTarget>,
    event: &str,
    args: &MethodArgs,
    original_add: &NativeMethod,
    native_remove: &RemovalSlot,
    zone: &Rc<dyn ZoneRuntime>,
    options: ListenerPatchOptions,
) {
    if options.check_duplicate
        && target
            .ledger()
            .contains_matching(event, &args.handler, args.context.as_ref())
    {
        // Same callback, same receiver, same event name: nothing to do.
        return;
    }

    let source = format!("{}:{event}", target.class().name());
    let invoke = zone.wrap(&source, args.handler.clone());
    let this_arg = args.context.as_ref().map(WeakHandle::hold);

    let schedule: TaskHook = {
        let target = Rc::downgrade(target);
        let original_add = Rc::clone(original_add);
        let event = event.to_string();
        Box::new(move |task: &Rc<TrackedTask>| {
            let Some(target) = target.upgrade() else {
                return;
            };
            original_add(
                &target,
                MethodArgs {
                    event: event.clone(),
                    handler: task.invoke().clone(),
                    context: task.context(),
                },
            );
        })
    };

    let unschedule: TaskHook = {
        let target = Rc::downgrade(target);
        let native_remove = Rc::clone(native_remove);
        Box::new(move |task: &Rc<TrackedTask>| {
            let Some(target) = target.upgrade() else {
                return;
            };
            let Some(remove) = native_remove.borrow().clone() else {
                return;
            };
            remove(
                &target,
                MethodArgs {
                    event: task.event().to_string(),
                    handler: task.invoke().clone(),
                    context: task.context(),
                },
            );
        })
    };

    let task = TrackedTask::new(
        source,
        event.to_string(),
        args.handler.clone(),
        invoke,
        this_arg,
        Rc::downgrade(target),
        schedule,
        unschedule,
    );
    zone.schedule_event_task(&task);
    target.ledger().push(event, task);
}

fn once_single_event(
    target: &Rc<EventTarget>,
    event: &str,
    args: &MethodArgs,
    original_once: &NativeMethod,
    native_remove: &RemovalSlot,
    zone: &Rc<dyn ZoneRuntime>,
    options: ListenerPatchOptions,
) {
    if options.check_duplicate
        && target
            .ledger()
            .contains_matching(event, &args.handler, args.context.as_ref())
    {
        return;
    }

    let source = format!("{}:{event}", target.class().name());
    let invoke = zone.wrap(&source, args.handler.clone());
    let this_arg = args.context.as_ref().map(WeakHandle::hold);

    let schedule: TaskHook = {
        let target = Rc::downgrade(target);
        let original_once = Rc::clone(original_once);
        let native_remove = Rc::clone(native_remove);
        let event = event.to_string();
        Box::new(move |task: &Rc<TrackedTask>| {
            let Some(strong_target) = target.upgrade() else {
                return;
            };
            task.set_ran_once(false);
            let custom = once_callback(task, &strong_target, Rc::clone(&native_remove));
            task.set_custom_callback(custom.clone());
            original_once(
                &strong_target,
                MethodArgs {
                    event: event.clone(),
                    handler: custom,
                    context: task.context(),
                },
            );
        })
    };

    let unschedule: TaskHook = {
        let target = Rc::downgrade(target);
        let native_remove = Rc::clone(native_remove);
        Box::new(move |task: &Rc<TrackedTask>| {
            if task.ran_once() {
                // The native listener already detached itself on its single
                // firing; a second deregistration would be erroneous.
                return;
            }
            let Some(target) = target.upgrade() else {
                return;
            };
            let Some(remove) = native_remove.borrow().clone() else {
                return;
            };
            let handler = task
                .custom_callback()
                .unwrap_or_else(|| task.invoke().clone());
            remove(
                &target,
                MethodArgs {
                    event: task.event().to_string(),
                    handler,
                    context: task.context(),
                },
            );
        })
    };

    let task = TrackedTask::new(
        source,
        event.to_string(),
        args.handler.clone(),
        invoke,
        this_arg,
        Rc::downgrade(target),
        schedule,
        unschedule,
    );
    zone.schedule_event_task(&task);
    target.ledger().push(event, task);
}

/// Build the self-removing wrapper a once task registers natively: run the
/// task's invoke, mark it ran-once, drop its ledger entry through the
/// patched removal path (whose unschedule hook then stays away from the
/// native deregistration), and finally detach the native listener directly
/// in case the platform's own `once` support did not.
fn once_callback(
    task: &Rc<TrackedTask>,
    target: &Rc<EventTarget>,
    native_remove: RemovalSlot,
) -> Callback {
    let task = Rc::downgrade(task);
    let target = Rc::downgrade(target);
    Callback::new(move |data| {
        let Some(task) = task.upgrade() else {
            return;
        };
        task.invoke().call(data);
        task.set_ran_once(true);
        let Some(target) = target.upgrade() else {
            return;
        };
        target.invoke(
            REMOVE_EVENT_LISTENER,
            MethodArgs {
                event: task.event().to_string(),
                handler: task.callback().clone(),
                context: task.context(),
            },
        );
        if let (Some(remove), Some(registered)) =
            (native_remove.borrow().clone(), task.custom_callback())
        {
            remove(
                &target,
                MethodArgs {
                    event: task.event().to_string(),
                    handler: registered,
                    context: task.context(),
                },
            );
        }
    })
}

fn remove_single_event(
    target: &Rc<EventTarget>,
    event: &str,
    args: &MethodArgs,
    original_remove: &NativeMethod,
    zone: &Rc<dyn ZoneRuntime>,
) {
    if let Some(task) = target
        .ledger()
        .remove_matching(event, &args.handler, args.context.as_ref())
    {
        zone.cancel_task(&task);
        return;
    }
    // No tracked task: the listener was registered around this layer, so
    // hand the removal straight to the native implementation.
    original_remove(
        target,
        MethodArgs {
            event: event.to_string(),
            handler: args.handler.clone(),
            context: args.context.clone(),
        },
    );
}
