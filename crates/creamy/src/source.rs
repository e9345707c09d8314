/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Component sources.
//!
//! A [`ComponentSource`] resolves a name (a file path, a bundle entry, ...) to
//! markup that declares components. The engine only needs the markup; where it
//! comes from is up to the implementation.

use std::collections::HashMap;

/// Trait for loading component markup by name.
pub trait ComponentSource {
    /// Load the markup registered under `name`.
    ///
    /// # Returns
    /// The markup text, or `None` if the source has no such entry.
    fn load(&self, name: &str) -> Option<String>;
}

/// Source that has nothing (for engines without external components).
#[derive(Debug, Clone, Default)]
pub struct NullSource;

impl ComponentSource for NullSource {
    fn load(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Source backed by an in-memory map.
///
/// Useful for tests and for component libraries bundled into the binary.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the source.
    pub fn add(&mut self, name: impl Into<String>, markup: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), markup.into());
        self
    }

    /// Create a source with the given entries.
    pub fn with_components(
        entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        let mut source = Self::new();
        for (name, markup) in entries {
            source.add(name, markup);
        }
        source
    }
}

impl ComponentSource for MemorySource {
    fn load(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }
}
