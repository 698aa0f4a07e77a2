//! The base renderer: direct protocol-to-primitive mapping.

use crate::view_tree::{SharedElementRegistry, SharedViewTree};
use viaduct_core::{Value, ViewId};

/// Tag substituted when an unrecognized element name is requested. The
/// native layer renders it as a pass-through container.
pub const FALLBACK_CONTAINER: &str = "ProxyViewContainer";

/// Argument to [`Renderer::select_root_element`]: an already-constructed
/// view passes through unchanged, a string is resolved as a selector.
#[derive(Debug, Clone)]
pub enum RootTarget {
    View(ViewId),
    Selector(String),
}

/// Returned by [`Renderer::listen`]; dropping it is not enough, it must be
/// called to unsubscribe.
pub type Unsubscribe = Box<dyn FnOnce()>;

/// The tree-mutation protocol consumed by the component framework.
pub trait Renderer {
    fn create_element(&self, name: &str) -> ViewId;
    fn create_comment(&self, value: &str) -> ViewId;
    fn create_text(&self, value: &str) -> ViewId;

    fn append_child(&self, parent: ViewId, child: ViewId);
    fn insert_before(&self, parent: ViewId, child: ViewId, reference: Option<ViewId>);
    fn remove_child(&self, parent: ViewId, child: ViewId);

    fn select_root_element(&self, target: RootTarget) -> ViewId;
    fn parent_node(&self, view: ViewId) -> Option<ViewId>;
    fn next_sibling(&self, view: ViewId) -> Option<ViewId>;

    fn set_attribute(&self, view: ViewId, name: &str, value: Value, namespace: Option<&str>);
    fn remove_attribute(&self, view: ViewId, name: &str, namespace: Option<&str>);
    fn add_class(&self, view: ViewId, name: &str);
    fn remove_class(&self, view: ViewId, name: &str);
    fn set_style(&self, view: ViewId, name: &str, value: Value);
    fn remove_style(&self, view: ViewId, name: &str);
    fn set_property(&self, view: ViewId, name: &str, value: Value);
    fn set_value(&self, node: ViewId, value: &str);

    fn listen(&self, view: ViewId, event: &str) -> Unsubscribe;

    fn destroy(&self);
    fn destroy_node(&self, node: ViewId);
}

/// Base renderer backed by the view-tree collaborator.
pub struct ViewRenderer {
    root_view: ViewId,
    tree: SharedViewTree,
    registry: SharedElementRegistry,
}

impl ViewRenderer {
    pub fn new(root_view: ViewId, tree: SharedViewTree, registry: SharedElementRegistry) -> Self {
        Self {
            root_view,
            tree,
            registry,
        }
    }

    pub fn root_view(&self) -> ViewId {
        self.root_view
    }
}

impl Renderer for ViewRenderer {
    fn create_element(&self, name: &str) -> ViewId {
        log::trace!(target: "viaduct_renderer", "create_element: {name}");
        let known = self.registry.is_known_element(name);
        let tag = if known { name } else { FALLBACK_CONTAINER };
        let mut tree = self.tree.borrow_mut();
        let view = tree.create_view(tag);
        if !known {
            tree.set_display_alias(view, name);
        }
        view
    }

    fn create_comment(&self, value: &str) -> ViewId {
        log::trace!(target: "viaduct_renderer", "create_comment: {value}");
        self.tree.borrow_mut().create_comment(value)
    }

    fn create_text(&self, value: &str) -> ViewId {
        log::trace!(target: "viaduct_renderer", "create_text: {value}");
        self.tree.borrow_mut().create_text(value)
    }

    fn append_child(&self, parent: ViewId, child: ViewId) {
        log::trace!(target: "viaduct_renderer", "append_child: {child:?} -> {parent:?}");
        if let Err(error) = self.tree.borrow_mut().append_child(parent, child) {
            log::warn!(target: "viaduct_renderer", "append_child failed: {error}");
        }
    }

    fn insert_before(&self, parent: ViewId, child: ViewId, reference: Option<ViewId>) {
        log::trace!(
            target: "viaduct_renderer",
            "insert_before: {child:?} -> {parent:?} before {reference:?}"
        );
        if let Err(error) = self.tree.borrow_mut().insert_before(parent, child, reference) {
            log::warn!(target: "viaduct_renderer", "insert_before failed: {error}");
        }
    }

    fn remove_child(&self, parent: ViewId, child: ViewId) {
        log::trace!(target: "viaduct_renderer", "remove_child: {child:?} from {parent:?}");
        if let Err(error) = self.tree.borrow_mut().remove_child(parent, child) {
            log::warn!(target: "viaduct_renderer", "remove_child failed: {error}");
        }
    }

    fn select_root_element(&self, target: RootTarget) -> ViewId {
        log::trace!(target: "viaduct_renderer", "select_root_element: {target:?}");
        match target {
            RootTarget::View(view) => view,
            RootTarget::Selector(selector) => match selector.strip_prefix('#') {
                // Unresolved ids degrade to the configured root view.
                Some(id) => self
                    .tree
                    .borrow()
                    .view_by_id(self.root_view, id)
                    .unwrap_or(self.root_view),
                None => self.root_view,
            },
        }
    }

    fn parent_node(&self, view: ViewId) -> Option<ViewId> {
        self.tree.borrow().parent(view)
    }

    fn next_sibling(&self, view: ViewId) -> Option<ViewId> {
        self.tree.borrow().next_sibling(view)
    }

    fn set_attribute(&self, view: ViewId, name: &str, value: Value, namespace: Option<&str>) {
        log::trace!(target: "viaduct_renderer", "set_attribute: {view:?}.{name}");
        if let Err(error) = self
            .tree
            .borrow_mut()
            .set_property(view, name, value, namespace)
        {
            log::warn!(target: "viaduct_renderer", "set_attribute failed: {error}");
        }
    }

    fn remove_attribute(&self, view: ViewId, name: &str, namespace: Option<&str>) {
        // Native views have no detachable attributes; nothing to undo.
        log::trace!(
            target: "viaduct_renderer",
            "remove_attribute: {view:?}.{name} (namespace {namespace:?})"
        );
    }

    fn add_class(&self, view: ViewId, name: &str) {
        log::trace!(target: "viaduct_renderer", "add_class: {view:?} {name}");
        if let Err(error) = self.tree.borrow_mut().add_class(view, name) {
            log::warn!(target: "viaduct_renderer", "add_class failed: {error}");
        }
    }

    fn remove_class(&self, view: ViewId, name: &str) {
        log::trace!(target: "viaduct_renderer", "remove_class: {view:?} {name}");
        if let Err(error) = self.tree.borrow_mut().remove_class(view, name) {
            log::warn!(target: "viaduct_renderer", "remove_class failed: {error}");
        }
    }

    fn set_style(&self, view: ViewId, name: &str, value: Value) {
        log::trace!(target: "viaduct_renderer", "set_style: {view:?} {name}");
        if let Err(error) = self.tree.borrow_mut().set_style(view, name, value) {
            log::warn!(target: "viaduct_renderer", "set_style failed: {error}");
        }
    }

    fn remove_style(&self, view: ViewId, name: &str) {
        log::trace!(target: "viaduct_renderer", "remove_style: {view:?} {name}");
        if let Err(error) = self.tree.borrow_mut().remove_style(view, name) {
            log::warn!(target: "viaduct_renderer", "remove_style failed: {error}");
        }
    }

    fn set_property(&self, view: ViewId, name: &str, value: Value) {
        log::trace!(target: "viaduct_renderer", "set_property: {view:?}.{name}");
        if let Err(error) = self.tree.borrow_mut().set_property(view, name, value, None) {
            log::warn!(target: "viaduct_renderer", "set_property failed: {error}");
        }
    }

    fn set_value(&self, node: ViewId, value: &str) {
        // Text mutation on raw nodes is not supported by the native layer.
        log::trace!(target: "viaduct_renderer", "set_value: {node:?} = {value}");
    }

    fn listen(&self, view: ViewId, event: &str) -> Unsubscribe {
        // Renderer-level subscription is not wired up; event registration
        // flows through the listener interception layer on the observable
        // targets themselves.
        log::trace!(target: "viaduct_renderer", "listen: {view:?} {event}");
        Box::new(|| {})
    }

    fn destroy(&self) {
        log::trace!(target: "viaduct_renderer", "destroy");
    }

    fn destroy_node(&self, node: ViewId) {
        // Native resource release happens when the view leaves the tree.
        log::trace!(target: "viaduct_renderer", "destroy_node: {node:?}");
    }
}
