//! Weak, non-owning association to a listener's receiver context.
//!
//! The task ledger must remember "this was the receiver for that callback"
//! across the gap between registration and firing or removal, without
//! keeping a UI object alive solely for that memory.

use std::any::Any;
use std::rc::{Rc, Weak};

/// Receiver context for a listener callback.
pub type Context = Rc<dyn Any>;

/// Non-owning handle to a receiver context. Holding one never extends the
/// context's lifetime.
#[derive(Debug, Clone)]
pub struct WeakHandle(Weak<dyn Any>);

impl WeakHandle {
    pub fn hold(context: &Context) -> Self {
        Self(Rc::downgrade(context))
    }

    /// The context, if it is still alive.
    pub fn resolve(&self) -> Option<Context> {
        self.0.upgrade()
    }
}

/// Identity comparison for optional receiver contexts.
///
/// Two absent contexts are the same canonical "no context" value; an absent
/// context never matches a live one; live contexts compare by pointer
/// identity.
pub fn same_context(a: Option<&Context>, b: Option<&Context>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}
