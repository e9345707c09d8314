/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Component templating for HTML-ish markup.
//!
//! Components are ordinary elements marked with `@name`. Once registered, a
//! template can use them by their PascalCase key (`@name="nav-bar"` becomes
//! `<NavBar>`), and each usage is replaced by the component body with its
//! placeholders filled in:
//!
//! - `{attr}`: the usage's `attr` attribute, HTML-escaped
//! - `{attr!}`: the same attribute inserted verbatim
//! - `{children}`: the usage's inner markup, inserted verbatim
//!
//! Any element can also carry a conditional chain:
//! `@if="cond"`, then `@else-if="cond"` / `@else` on the element siblings
//! that directly follow it. Conditions are evaluated by [`evaluate`] after
//! placeholder substitution, so `@if="{count} > 3"` works inside components.
//!
//! # Architecture
//!
//! Parsing and serialization live in the `creamy-markup` crate, which
//! produces an arena-backed [`Document`](creamy_markup::Document). This crate
//! owns everything above the tree: the [`Registry`], placeholder substitution,
//! condition evaluation and the recursive render loop in [`Creamy`].
//!
//! # Example
//!
//! ```rust
//! use creamy::Creamy;
//!
//! let mut creamy = Creamy::new();
//! creamy.register_component(
//!     r#"
//!     <div @name="message" class="message">
//!       <h2 @if="{title}">{title}</h2>
//!       <p>{children}</p>
//!     </div>
//!     "#,
//! )?;
//!
//! let html = creamy.render(r#"<Message title="Hi &amp; bye">Body</Message>"#)?;
//! assert_eq!(
//!     html,
//!     r#"<div class="message"><h2>Hi &amp; bye</h2><p>Body</p></div>"#
//! );
//! # Ok::<(), creamy::RenderError>(())
//! ```

mod conditional;
pub mod error;
pub mod expression;
pub mod key;
pub mod options;
pub mod placeholder;
pub mod registry;
pub mod render;
pub mod sanitize;
pub mod source;

// Re-export main types at crate root
pub use error::{RenderError, RenderResult};
pub use expression::evaluate;
pub use key::component_key;
pub use options::RenderOptions;
pub use placeholder::{Placeholder, interpolate};
pub use registry::{ComponentDefinition, Registry};
pub use render::Creamy;
pub use sanitize::sanitize;
pub use source::{ComponentSource, MemorySource, NullSource};
