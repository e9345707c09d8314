/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for registration and rendering.

use thiserror::Error;

/// Errors that can occur while registering components or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template or component source is not well-formed markup.
    #[error("Markup error: {0}")]
    Markup(#[from] creamy_markup::Error),

    /// An `@else` element with no `@if` chain before it.
    #[error("Dangling @else on <{element}>: no preceding @if or @else-if sibling")]
    DanglingElse { element: String },

    /// An `@else-if` element with no `@if` chain before it.
    #[error("Dangling @else-if=\"{condition}\" on <{element}>: no preceding @if or @else-if sibling")]
    DanglingElseIf { element: String, condition: String },

    /// Component expansion nested deeper than the configured limit.
    #[error("Component cycle detected (depth > {max_depth}): {name}")]
    ComponentCycle { name: String, max_depth: usize },

    /// A component source could not provide the requested entry.
    #[error("Component source not found: {name}")]
    SourceNotFound { name: String },
}

/// Result type for creamy operations.
pub type RenderResult<T> = Result<T, RenderError>;
