//! Normalization of batched event-name arguments.
//!
//! The native registration API accepts comma-joined names in a single call,
//! but listener bookkeeping tracks one task per individual name, so the add,
//! once, and remove paths all decompose their name argument through here.

use smallvec::SmallVec;

/// Split a possibly comma-separated event-name argument into individual
/// trimmed names, preserving order. A comma-free input yields a single
/// element containing the trimmed input.
pub fn split_event_names(raw: &str) -> SmallVec<[String; 2]> {
    raw.split(',').map(|name| name.trim().to_string()).collect()
}
