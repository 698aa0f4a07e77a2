//! Collaborator seams for the renderer adapter.

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use viaduct_core::{NamespaceFilter, Value, ViewId};

/// Native view-tree manipulation primitives.
///
/// Mutations return a `Result`; the renderer treats failures as
/// degradations to log and continue from, never as fatal errors.
pub trait ViewTree {
    /// Receive the injected namespace filters, unmodified. The bridge never
    /// inspects them.
    fn set_namespace_filters(&mut self, filters: Vec<NamespaceFilter>);

    fn create_view(&mut self, tag: &str) -> ViewId;
    fn create_comment(&mut self, text: &str) -> ViewId;
    fn create_text(&mut self, text: &str) -> ViewId;

    /// Remember the originally requested tag for a substituted container.
    /// Display-only: used for diagnostics and style targeting.
    fn set_display_alias(&mut self, view: ViewId, alias: &str);

    fn append_child(&mut self, parent: ViewId, child: ViewId) -> Result<()>;
    fn insert_before(&mut self, parent: ViewId, child: ViewId, reference: Option<ViewId>)
    -> Result<()>;
    fn remove_child(&mut self, parent: ViewId, child: ViewId) -> Result<()>;

    fn parent(&self, view: ViewId) -> Option<ViewId>;
    fn next_sibling(&self, view: ViewId) -> Option<ViewId>;

    fn set_property(
        &mut self,
        view: ViewId,
        name: &str,
        value: Value,
        namespace: Option<&str>,
    ) -> Result<()>;
    fn set_style(&mut self, view: ViewId, name: &str, value: Value) -> Result<()>;
    fn remove_style(&mut self, view: ViewId, name: &str) -> Result<()>;
    fn add_class(&mut self, view: ViewId, name: &str) -> Result<()>;
    fn remove_class(&mut self, view: ViewId, name: &str) -> Result<()>;

    /// Resolve an id lookup beneath `root`.
    fn view_by_id(&self, root: ViewId, id: &str) -> Option<ViewId>;
}

/// Element-name resolution: is this tag a known native element?
pub trait ElementRegistry {
    fn is_known_element(&self, tag: &str) -> bool;
}

/// Global stylesheet registration. `scoped` styles only apply to elements
/// bearing the matching marker attribute.
pub trait StyleRegistry {
    fn add_css(&mut self, css: &str, scoped: bool);
}

pub type SharedViewTree = Rc<RefCell<dyn ViewTree>>;
pub type SharedElementRegistry = Rc<dyn ElementRegistry>;
pub type SharedStyleRegistry = Rc<RefCell<dyn StyleRegistry>>;
