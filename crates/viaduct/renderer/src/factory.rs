//! Renderer construction and the per-component cache.

use crate::emulated::EmulatedRenderer;
use crate::renderer::{Renderer, ViewRenderer};
use crate::view_tree::{SharedElementRegistry, SharedStyleRegistry, SharedViewTree};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use viaduct_core::{NamespaceFilter, ViewId};

/// How a component's styles are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encapsulation {
    /// Marker-attribute scoping via [`EmulatedRenderer`].
    Emulated,
    /// No scoping: styles land in the global stylesheet as-is.
    None,
}

/// Component metadata the factory keys its cache on.
#[derive(Debug, Clone)]
pub struct ComponentType {
    pub id: String,
    pub encapsulation: Encapsulation,
    pub styles: Vec<String>,
}

enum CachedRenderer {
    Default,
    Emulated(Rc<EmulatedRenderer>),
}

/// Hands out renderers, one per component identity. Components without
/// metadata share a single default renderer.
pub struct RendererFactory {
    root_view: ViewId,
    tree: SharedViewTree,
    registry: SharedElementRegistry,
    styles: SharedStyleRegistry,
    default_renderer: Rc<ViewRenderer>,
    cache: RefCell<HashMap<String, CachedRenderer>>,
}

impl RendererFactory {
    pub fn new(
        root_view: ViewId,
        namespace_filters: Vec<NamespaceFilter>,
        tree: SharedViewTree,
        registry: SharedElementRegistry,
        styles: SharedStyleRegistry,
    ) -> Self {
        tree.borrow_mut().set_namespace_filters(namespace_filters);
        let default_renderer = Rc::new(ViewRenderer::new(
            root_view,
            Rc::clone(&tree),
            Rc::clone(&registry),
        ));
        Self {
            root_view,
            tree,
            registry,
            styles,
            default_renderer,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn default_renderer(&self) -> Rc<ViewRenderer> {
        Rc::clone(&self.default_renderer)
    }

    /// Resolve the renderer for a component instance. The same component
    /// identity always yields the same instance; an emulated cache hit
    /// re-stamps the new host before returning.
    pub fn create_renderer(
        &self,
        host: Option<ViewId>,
        component: Option<&ComponentType>,
    ) -> Rc<dyn Renderer> {
        let (Some(host), Some(component)) = (host, component) else {
            return self.default_renderer();
        };

        if let Some(cached) = self.cache.borrow().get(&component.id) {
            return match cached {
                CachedRenderer::Default => self.default_renderer(),
                CachedRenderer::Emulated(renderer) => {
                    renderer.apply_to_host(host);
                    Rc::clone(renderer) as Rc<dyn Renderer>
                }
            };
        }

        log::debug!(
            target: "viaduct_renderer",
            "new renderer for component {} ({:?})",
            component.id,
            component.encapsulation
        );
        match component.encapsulation {
            Encapsulation::None => {
                let mut sheet = self.styles.borrow_mut();
                for style in &component.styles {
                    sheet.add_css(style, false);
                }
                drop(sheet);
                self.cache
                    .borrow_mut()
                    .insert(component.id.clone(), CachedRenderer::Default);
                self.default_renderer()
            }
            Encapsulation::Emulated => {
                let base = ViewRenderer::new(
                    self.root_view,
                    Rc::clone(&self.tree),
                    Rc::clone(&self.registry),
                );
                let renderer = Rc::new(EmulatedRenderer::new(
                    base,
                    &component.id,
                    &component.styles,
                    &self.styles,
                ));
                renderer.apply_to_host(host);
                self.cache.borrow_mut().insert(
                    component.id.clone(),
                    CachedRenderer::Emulated(Rc::clone(&renderer)),
                );
                renderer
            }
        }
    }
}
