/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Render configuration.

use creamy_markup::SerializeOptions;
use serde::{Deserialize, Serialize};

/// Options controlling a [`Creamy`](crate::Creamy) engine.
///
/// Missing fields take their defaults when deserialized, so a partial
/// configuration such as `{"max_depth": 8}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// How deeply component expansions may nest before rendering fails with
    /// [`RenderError::ComponentCycle`](crate::RenderError::ComponentCycle).
    pub max_depth: usize,

    /// Drop whitespace-only text and trim text nodes in the output.
    pub compact_whitespace: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 32,
            compact_whitespace: true,
        }
    }
}

impl RenderOptions {
    pub(crate) fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            compact_whitespace: self.compact_whitespace,
        }
    }
}
