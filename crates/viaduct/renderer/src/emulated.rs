//! Emulated style encapsulation: marker attributes plus rewritten
//! component styles, no shadow trees involved.

use crate::renderer::{Renderer, RootTarget, Unsubscribe, ViewRenderer};
use crate::view_tree::SharedStyleRegistry;
use viaduct_core::{Value, ViewId};

/// Placeholder token substituted with the sanitized component id.
const COMPONENT_TOKEN: &str = "%COMP%";
const HOST_TEMPLATE: &str = "_vhost-%COMP%";
const CONTENT_TEMPLATE: &str = "_vcontent-%COMP%";

/// Component ids may carry characters that are not valid in attribute
/// names; normalize before templating.
fn sanitize_component_id(id: &str) -> String {
    id.replace('-', "_")
}

/// A renderer that scopes component styles by stamping marker attributes:
/// the host marker on the component's host view, the content marker on
/// every view it creates. Scoped stylesheets only match views bearing the
/// corresponding marker.
pub struct EmulatedRenderer {
    base: ViewRenderer,
    host_attr: String,
    content_attr: String,
}

impl EmulatedRenderer {
    /// Build the scoped renderer and register the component's styles,
    /// rewriting the component token into each style text. Callers must
    /// construct at most one of these per component identity; style
    /// registration happens here, unconditionally.
    pub fn new(
        base: ViewRenderer,
        component_id: &str,
        styles: &[String],
        stylesheet: &SharedStyleRegistry,
    ) -> Self {
        let id = sanitize_component_id(component_id);
        let host_attr = HOST_TEMPLATE.replace(COMPONENT_TOKEN, &id);
        let content_attr = CONTENT_TEMPLATE.replace(COMPONENT_TOKEN, &id);

        log::debug!(target: "viaduct_renderer", "scoping component {id}: {} styles", styles.len());
        let mut sheet = stylesheet.borrow_mut();
        for style in styles {
            sheet.add_css(&style.replace(COMPONENT_TOKEN, &id), true);
        }

        Self {
            base,
            host_attr,
            content_attr,
        }
    }

    /// Stamp the host marker onto a component host view. Safe to repeat;
    /// a cached renderer re-stamps each new host it is attached to.
    pub fn apply_to_host(&self, host: ViewId) {
        self.base
            .set_attribute(host, &self.host_attr, Value::from(""), None);
    }

    pub fn host_attribute(&self) -> &str {
        &self.host_attr
    }

    pub fn content_attribute(&self) -> &str {
        &self.content_attr
    }
}

impl Renderer for EmulatedRenderer {
    fn create_element(&self, name: &str) -> ViewId {
        let view = self.base.create_element(name);
        self.base
            .set_attribute(view, &self.content_attr, Value::from(""), None);
        view
    }

    fn create_comment(&self, value: &str) -> ViewId {
        self.base.create_comment(value)
    }

    fn create_text(&self, value: &str) -> ViewId {
        self.base.create_text(value)
    }

    fn append_child(&self, parent: ViewId, child: ViewId) {
        self.base.append_child(parent, child);
    }

    fn insert_before(&self, parent: ViewId, child: ViewId, reference: Option<ViewId>) {
        self.base.insert_before(parent, child, reference);
    }

    fn remove_child(&self, parent: ViewId, child: ViewId) {
        self.base.remove_child(parent, child);
    }

    fn select_root_element(&self, target: RootTarget) -> ViewId {
        self.base.select_root_element(target)
    }

    fn parent_node(&self, view: ViewId) -> Option<ViewId> {
        self.base.parent_node(view)
    }

    fn next_sibling(&self, view: ViewId) -> Option<ViewId> {
        self.base.next_sibling(view)
    }

    fn set_attribute(&self, view: ViewId, name: &str, value: Value, namespace: Option<&str>) {
        self.base.set_attribute(view, name, value, namespace);
    }

    fn remove_attribute(&self, view: ViewId, name: &str, namespace: Option<&str>) {
        self.base.remove_attribute(view, name, namespace);
    }

    fn add_class(&self, view: ViewId, name: &str) {
        self.base.add_class(view, name);
    }

    fn remove_class(&self, view: ViewId, name: &str) {
        self.base.remove_class(view, name);
    }

    fn set_style(&self, view: ViewId, name: &str, value: Value) {
        self.base.set_style(view, name, value);
    }

    fn remove_style(&self, view: ViewId, name: &str) {
        self.base.remove_style(view, name);
    }

    fn set_property(&self, view: ViewId, name: &str, value: Value) {
        self.base.set_property(view, name, value);
    }

    fn set_value(&self, node: ViewId, value: &str) {
        self.base.set_value(node, value);
    }

    fn listen(&self, view: ViewId, event: &str) -> Unsubscribe {
        self.base.listen(view, event)
    }

    fn destroy(&self) {
        self.base.destroy();
    }

    fn destroy_node(&self, node: ViewId) {
        self.base.destroy_node(node);
    }
}
