//! Native target objects and their shared method tables.
//!
//! Rather than introspecting an object graph at runtime, collaborators
//! declare their interceptable methods on a [`TargetClass`]. Classes chain
//! through a parent link the way native view hierarchies inherit their
//! listener methods from a common observable base, and method lookup walks
//! that chain.

use crate::callback::Callback;
use crate::ledger::TaskLedger;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use viaduct_core::weak::Context;

/// Arguments accepted by the listener-shaped methods this crate intercepts:
/// an event name (possibly comma-joined), the callback, and an optional
/// receiver context. Methods that take no event name (connectivity
/// monitoring) leave `event` empty.
#[derive(Clone)]
pub struct MethodArgs {
    pub event: String,
    pub handler: Callback,
    pub context: Option<Context>,
}

impl MethodArgs {
    pub fn new(event: &str, handler: Callback, context: Option<Context>) -> Self {
        Self {
            event: event.to_string(),
            handler,
            context,
        }
    }
}

/// A method installed on a [`TargetClass`].
pub type NativeMethod = Rc<dyn Fn(&Rc<EventTarget>, MethodArgs)>;

struct MethodSlot {
    func: NativeMethod,
    writable: bool,
}

/// Shared method table for a family of native targets.
pub struct TargetClass {
    name: String,
    parent: Option<Rc<TargetClass>>,
    methods: RefCell<HashMap<String, MethodSlot>>,
    /// Reserved storage for pre-patch originals, populated at most once per
    /// method name.
    originals: RefCell<HashMap<String, NativeMethod>>,
}

impl TargetClass {
    pub fn new(name: &str, parent: Option<Rc<TargetClass>>) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            parent,
            methods: RefCell::new(HashMap::new()),
            originals: RefCell::new(HashMap::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<Rc<TargetClass>> {
        self.parent.clone()
    }

    /// Declare a writable method on this class.
    pub fn define_method(&self, name: &str, func: NativeMethod) {
        self.methods.borrow_mut().insert(
            name.to_string(),
            MethodSlot {
                func,
                writable: true,
            },
        );
    }

    /// Declare a method that the platform exposes as read-only. It can be
    /// resolved and delegated to, but never replaced.
    pub fn define_readonly_method(&self, name: &str, func: NativeMethod) {
        self.methods.borrow_mut().insert(
            name.to_string(),
            MethodSlot {
                func,
                writable: false,
            },
        );
    }

    /// Whether this class directly owns a method, ignoring the chain.
    pub fn owns(&self, name: &str) -> bool {
        self.methods.borrow().contains_key(name)
    }

    /// The method this class directly owns, ignoring the chain.
    pub fn owned_method(&self, name: &str) -> Option<NativeMethod> {
        self.methods
            .borrow()
            .get(name)
            .map(|slot| Rc::clone(&slot.func))
    }

    /// Resolve a method by walking the class chain.
    pub fn resolve(&self, name: &str) -> Option<NativeMethod> {
        if let Some(func) = self.owned_method(name) {
            return Some(func);
        }
        self.parent.as_ref().and_then(|parent| parent.resolve(name))
    }

    /// Whether the slot may be replaced. A missing slot counts as writable.
    pub(crate) fn is_writable(&self, name: &str) -> bool {
        self.methods
            .borrow()
            .get(name)
            .is_none_or(|slot| slot.writable)
    }

    /// Replace the method in place, keeping the slot writable.
    pub(crate) fn install(&self, name: &str, func: NativeMethod) {
        self.define_method(name, func);
    }

    /// The preserved pre-patch original, if one was captured.
    pub fn original(&self, name: &str) -> Option<NativeMethod> {
        self.originals.borrow().get(name).map(Rc::clone)
    }

    pub(crate) fn remember_original(&self, name: &str, func: NativeMethod) {
        self.originals.borrow_mut().insert(name.to_string(), func);
    }
}

/// A native object whose listener methods can be intercepted.
///
/// The task ledger lives on the target itself so its lifetime is tied to
/// the target's; no global table outlives the objects it describes.
pub struct EventTarget {
    class: Rc<TargetClass>,
    ledger: TaskLedger,
}

impl EventTarget {
    pub fn new(class: Rc<TargetClass>) -> Rc<Self> {
        Rc::new(Self {
            class,
            ledger: TaskLedger::default(),
        })
    }

    pub fn class(&self) -> &Rc<TargetClass> {
        &self.class
    }

    pub fn ledger(&self) -> &TaskLedger {
        &self.ledger
    }

    /// Invoke a method by name, dispatching through the class chain. An
    /// unresolved method degrades to a logged no-op.
    pub fn invoke(self: &Rc<Self>, method: &str, args: MethodArgs) {
        match self.class.resolve(method) {
            Some(func) => func(self, args),
            None => log::warn!(
                target: "viaduct_events",
                "no method `{method}` on class `{}`",
                self.class.name()
            ),
        }
    }
}
