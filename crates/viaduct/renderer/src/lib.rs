//! Renderer adapter: maps a component framework's tree-mutation protocol
//! onto native view-tree primitives.
//!
//! The adapter performs direct, unbatched mutation per call — there is no
//! reconciliation. The native primitives themselves are collaborators
//! behind the [`ViewTree`], [`ElementRegistry`], and [`StyleRegistry`]
//! traits; this crate owns only the protocol mapping, the emulated
//! style-scoping rules, and the per-component renderer cache.

pub mod emulated;
pub mod factory;
pub mod renderer;
pub mod view_tree;

pub use emulated::EmulatedRenderer;
pub use factory::{ComponentType, Encapsulation, RendererFactory};
pub use renderer::{FALLBACK_CONTAINER, Renderer, RootTarget, Unsubscribe, ViewRenderer};
pub use view_tree::{
    ElementRegistry, SharedElementRegistry, SharedStyleRegistry, SharedViewTree, StyleRegistry,
    ViewTree,
};
