//! Method interception on shared class tables.

use crate::target::{NativeMethod, TargetClass};
use std::rc::Rc;

/// Replaces methods on class chains while preserving the original for
/// delegation and restoration.
pub struct InterceptEngine;

impl InterceptEngine {
    /// Patch `method` on `class`'s chain with the wrapper produced by
    /// `factory`.
    ///
    /// Walks the chain to the class that directly owns the method — the
    /// usual case being a listener method declared on an observable base
    /// class and inherited by view classes. If no class directly owns it
    /// but the name still resolves, the starting class is treated as the
    /// owner.
    ///
    /// The pre-patch original is captured into the owner's reserved storage
    /// exactly once: a second patch of the same (class, method) pair finds
    /// the storage populated, installs nothing, and returns the true
    /// original rather than re-capturing the installed wrapper.
    ///
    /// A read-only slot is left untouched; the original is still returned
    /// so the caller can delegate, and must treat the patch as unavailable
    /// rather than as an error.
    ///
    /// Returns `None` only when the method never existed on the chain.
    pub fn patch_method(
        class: &Rc<TargetClass>,
        method: &str,
        factory: impl FnOnce(NativeMethod) -> NativeMethod,
    ) -> Option<NativeMethod> {
        let mut owner = None;
        let mut cursor = Some(Rc::clone(class));
        while let Some(current) = cursor {
            if current.owns(method) {
                owner = Some(current);
                break;
            }
            cursor = current.parent();
        }
        // Owned nowhere but still resolvable: treat the starting class as
        // the owner.
        let owner = owner.or_else(|| {
            class
                .resolve(method)
                .is_some()
                .then(|| Rc::clone(class))
        })?;

        if let Some(original) = owner.original(method) {
            // Already patched once; never capture the wrapper as if it
            // were the original.
            return Some(original);
        }

        let original = owner
            .owned_method(method)
            .or_else(|| owner.resolve(method))?;
        owner.remember_original(method, Rc::clone(&original));

        if !owner.is_writable(method) {
            log::debug!(
                target: "viaduct_events",
                "`{method}` on `{}` is read-only, leaving it unpatched",
                owner.name()
            );
            return Some(original);
        }

        owner.install(method, factory(Rc::clone(&original)));
        log::debug!(target: "viaduct_events", "patched `{method}` on `{}`", owner.name());
        Some(original)
    }
}
