//! Identity-comparable event callbacks.

use std::fmt;
use std::rc::Rc;
use viaduct_core::Value;

/// Payload delivered to a callback when a native event fires.
#[derive(Debug, Clone)]
pub struct EventData {
    /// Name of the event that fired.
    pub event: String,
    /// Optional payload supplied by the native dispatcher.
    pub value: Option<Value>,
}

impl EventData {
    pub fn new(event: &str) -> Self {
        Self {
            event: event.to_string(),
            value: None,
        }
    }
}

/// Shared event callback.
///
/// Listener bookkeeping compares callbacks by pointer identity, never by
/// behavior: cloning a `Callback` yields the same identity, constructing a
/// new one from the same closure source does not.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&EventData)>);

impl Callback {
    pub fn new(callback: impl Fn(&EventData) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self, data: &EventData) {
        (self.0)(data);
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Callback({:p})", Rc::as_ptr(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{Callback, EventData};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn clones_share_identity() {
        let callback = Callback::new(|_| {});
        let clone = callback.clone();
        assert!(callback.ptr_eq(&clone));
    }

    #[test]
    fn distinct_callbacks_differ() {
        let a = Callback::new(|_| {});
        let b = Callback::new(|_| {});
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn call_forwards_payload() {
        let seen = Rc::new(Cell::new(false));
        let observed = Rc::clone(&seen);
        let callback = Callback::new(move |data| {
            assert_eq!(data.event, "tap");
            observed.set(true);
        });
        callback.call(&EventData::new("tap"));
        assert!(seen.get());
    }
}
