/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The render engine.
//!
//! Rendering parses a template, walks it depth-first and rewrites it in
//! place: conditional chains are resolved, and elements whose tag matches a
//! registered component key are replaced by the rendered component body.

use crate::conditional::resolve_chain;
use crate::error::{RenderError, RenderResult};
use crate::options::RenderOptions;
use crate::placeholder::{Placeholder, interpolate};
use crate::registry::{ComponentDefinition, Registry};
use crate::sanitize::sanitize;
use crate::source::ComponentSource;
use creamy_markup::{Document, NodeId, parse};
use tracing::debug;

/// A component registry plus the options used to render against it.
///
/// Register components first, then render any number of templates.
/// Rendering takes `&self` and never touches the registry, so one engine can
/// serve concurrent renders.
///
/// # Example
///
/// ```rust
/// use creamy::Creamy;
///
/// let mut creamy = Creamy::new();
/// creamy.register_component(r#"<button @name="button">{children}</button>"#)?;
///
/// let html = creamy.render("<Button>Save</Button>")?;
/// assert_eq!(html, "<button>Save</button>");
/// # Ok::<(), creamy::RenderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Creamy {
    registry: Registry,
    options: RenderOptions,
}

impl Creamy {
    /// Create an engine with default options and no components.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            registry: Registry::new(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register every `@name` element declared in `source`.
    ///
    /// Returns how many components were registered.
    pub fn register_component(&mut self, source: &str) -> RenderResult<usize> {
        self.registry.register(source)
    }

    /// Load each named entry from `source` and register its components.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SourceNotFound`] for the first name the source
    /// cannot load; entries before it stay registered.
    pub fn register_from<S, I>(&mut self, source: &S, names: I) -> RenderResult<usize>
    where
        S: ComponentSource + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut count = 0;
        for name in names {
            let name = name.as_ref();
            let markup = source
                .load(name)
                .ok_or_else(|| RenderError::SourceNotFound {
                    name: name.to_string(),
                })?;
            count += self.registry.register(&markup)?;
        }
        Ok(count)
    }

    /// Render a template to markup.
    ///
    /// # Errors
    ///
    /// Fails on malformed markup, on `@else` / `@else-if` elements without a
    /// preceding `@if`, and when component expansion nests deeper than
    /// [`RenderOptions::max_depth`].
    pub fn render(&self, template: &str) -> RenderResult<String> {
        let document = self.render_document(template, 0)?;
        Ok(document.to_html_with(&self.options.serialize_options()))
    }

    fn render_document(&self, source: &str, depth: usize) -> RenderResult<Document> {
        let mut document = parse(source)?;
        let root = document.root();
        self.render_children(&mut document, root, depth)?;
        Ok(document)
    }

    fn render_children(&self, doc: &mut Document, parent: NodeId, depth: usize) -> RenderResult<()> {
        let mut index = 0;
        while let Some(&child) = doc.children(parent).get(index) {
            index += self.render_node(doc, child, depth)?;
        }
        Ok(())
    }

    /// Render one node in place.
    ///
    /// Returns how many nodes now occupy the node's slot in its parent: 0 if
    /// it was removed, the size of the expansion if it was a component usage.
    fn render_node(&self, doc: &mut Document, id: NodeId, depth: usize) -> RenderResult<usize> {
        let Some(element) = doc.element_mut(id) else {
            return Ok(1);
        };
        element.directives.name = None;
        let tag = element.name.clone();

        resolve_chain(doc, id)?;
        if doc.parent(id).is_none() {
            return Ok(0);
        }

        if let Some(component) = self.registry.lookup(&tag) {
            let expansion = self.expand(doc, id, component, depth)?;
            return Ok(doc.replace_with_fragment(id, &expansion));
        }

        self.render_children(doc, id, depth)?;
        Ok(1)
    }

    /// Render `component` for the usage element `usage`.
    ///
    /// The usage element's children are inserted verbatim for `{children}`
    /// and rendered as part of the component body.
    fn expand(
        &self,
        doc: &Document,
        usage: NodeId,
        component: &ComponentDefinition,
        depth: usize,
    ) -> RenderResult<Document> {
        if depth >= self.options.max_depth {
            return Err(RenderError::ComponentCycle {
                name: component.key().to_string(),
                max_depth: self.options.max_depth,
            });
        }

        let body = component.to_markup();
        let children = doc.inner_html(usage);
        let element = doc.element(usage);

        let markup = interpolate(&body, |placeholder| match placeholder {
            Placeholder::Children => children.clone(),
            Placeholder::Attribute { name, raw } => {
                match element.and_then(|e| e.get_attribute(name)) {
                    Some(value) if raw => value.into_owned(),
                    Some(value) => sanitize(&value),
                    None => String::new(),
                }
            }
        });

        debug!(component = component.key(), depth, "Expanding component");
        self.render_document(&markup, depth + 1)
    }
}
