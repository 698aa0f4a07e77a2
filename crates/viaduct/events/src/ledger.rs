//! Per-target, per-event-name task bookkeeping.

use crate::callback::Callback;
use crate::task::TrackedTask;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use viaduct_core::weak::Context;

/// Ordered lists of tracked tasks, keyed by event name.
///
/// Lives on the target it describes, so the ledger can never outlive the
/// target. An entry whose list drains is removed outright; repeated
/// add/remove cycles must not accumulate empty lists.
#[derive(Default)]
pub struct TaskLedger {
    entries: RefCell<HashMap<String, Vec<Rc<TrackedTask>>>>,
}

impl TaskLedger {
    /// Append a task to the event's list, preserving registration order.
    pub fn push(&self, event: &str, task: Rc<TrackedTask>) {
        self.entries
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(task);
    }

    /// Number of tracked tasks for an event name.
    pub fn task_count(&self, event: &str) -> usize {
        self.entries.borrow().get(event).map_or(0, Vec::len)
    }

    /// Whether any entry, even an empty one, exists for the event name.
    pub fn has_entry(&self, event: &str) -> bool {
        self.entries.borrow().contains_key(event)
    }

    /// Whether a task with the given (callback, receiver-context) identity
    /// is already tracked for the event.
    pub fn contains_matching(
        &self,
        event: &str,
        callback: &Callback,
        context: Option<&Context>,
    ) -> bool {
        self.entries.borrow().get(event).is_some_and(|tasks| {
            tasks.iter().any(|task| task.matches(callback, context))
        })
    }

    /// Remove the first task matching the (callback, receiver-context)
    /// identity, in registration order.
    ///
    /// The task is marked removed; when its list drains it is also marked
    /// all-removed and the entry is deleted. Identity is unique per
    /// (callback, context, event, target), so the scan stops at the first
    /// match.
    pub fn remove_matching(
        &self,
        event: &str,
        callback: &Callback,
        context: Option<&Context>,
    ) -> Option<Rc<TrackedTask>> {
        let mut entries = self.entries.borrow_mut();
        let tasks = entries.get_mut(event)?;
        let index = tasks.iter().position(|task| task.matches(callback, context))?;
        let task = tasks.remove(index);
        task.mark_removed();
        if tasks.is_empty() {
            task.mark_all_removed();
            entries.remove(event);
        }
        Some(task)
    }
}
