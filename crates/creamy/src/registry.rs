/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Component registry.
//!
//! Maps canonical keys (see [`component_key`]) to component definitions. A
//! definition is the subtree of an element that carries `@name`, copied out
//! of the source it was declared in. Definitions are never modified after
//! registration; rendering works on fresh copies.

use crate::error::RenderResult;
use crate::key::component_key;
use creamy_markup::{Document, parse};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A registered component.
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    key: String,
    declared_name: String,
    document: Document,
}

impl ComponentDefinition {
    /// The canonical key the component is registered under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The `@name` value as written in the source.
    pub fn declared_name(&self) -> &str {
        &self.declared_name
    }

    /// The stored definition. Its single top-level node is the named element.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// A fresh copy of the definition with the root `@name` stripped.
    pub fn instantiate(&self) -> Document {
        let mut document = self.document.clone();
        let top: Vec<_> = document.children(document.root()).to_vec();
        for id in top {
            if let Some(element) = document.element_mut(id) {
                element.directives.name = None;
            }
        }
        document
    }

    /// Markup of [`instantiate`](Self::instantiate), ready for placeholder
    /// substitution.
    pub fn to_markup(&self) -> String {
        self.instantiate().to_html()
    }
}

/// Component definitions by canonical key.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    components: HashMap<String, ComponentDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every element in `source` that carries `@name`.
    ///
    /// Nested declarations are registered too. A key that is already taken is
    /// overwritten. Names that normalize to an empty key (`@name="--"`) are
    /// skipped.
    ///
    /// Returns how many definitions were registered.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not well-formed markup.
    pub fn register(&mut self, source: &str) -> RenderResult<usize> {
        let document = parse(source)?;
        let mut count = 0;

        for id in document.descendants(document.root()) {
            let Some(element) = document.element(id) else {
                continue;
            };
            let Some(name) = &element.directives.name else {
                continue;
            };

            let key = component_key(name);
            if key.is_empty() {
                warn!(name = %name, tag = %element.name, "Skipping component whose name has no letters or digits");
                continue;
            }

            let definition = ComponentDefinition {
                key: key.clone(),
                declared_name: name.clone(),
                document: document.extract(id),
            };
            if self.components.insert(key.clone(), definition).is_some() {
                debug!(key = %key, "Replaced existing component");
            } else {
                debug!(key = %key, tag = %element.name, "Registered component");
            }
            count += 1;
        }

        Ok(count)
    }

    /// Exact lookup by canonical key.
    pub fn lookup(&self, key: &str) -> Option<&ComponentDefinition> {
        self.components.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.components.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
