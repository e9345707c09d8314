//! Arena-backed HTML fragment trees for the creamy renderer.
//!
//! This crate wraps [`quick-xml`] to turn HTML-ish template text into a
//! [`Document`]: an arena of nodes addressed by [`NodeId`], where each node
//! records its parent for sibling navigation and owns its children top-down.
//!
//! # Overview
//!
//! The main types are:
//! - [`Document`]: the parsed fragment (any number of top-level nodes)
//! - [`NodeKind`]: fragment root, element, raw text, or doctype
//! - [`Element`]: tag name, ordered [`Attribute`]s and typed [`Directives`]
//! - [`Branch`]: the `@if` / `@else-if` / `@else` directive of an element
//!
//! Directive attributes (`@name`, `@if`, `@else-if`, `@else`) are lifted out of
//! the attribute list while parsing, so consumers match on [`Branch`] instead of
//! probing attribute strings. They are written back on serialization, which lets
//! a serialized subtree be parsed again without losing them.
//!
//! # Example
//!
//! ```rust
//! use creamy_markup::{parse, Branch};
//!
//! let doc = parse(r#"<div @if="1 < 2" class="box">Hi</div><br>"#).unwrap();
//! let top = doc.children(doc.root());
//! assert_eq!(top.len(), 2);
//!
//! let div = doc.element(top[0]).unwrap();
//! assert_eq!(div.name, "div");
//! assert_eq!(div.directives.branch, Some(Branch::If("1 < 2".to_string())));
//! assert_eq!(div.get_attribute("class").as_deref(), Some("box"));
//!
//! assert_eq!(doc.to_html(), r#"<div @if="1 &lt; 2" class="box">Hi</div><br>"#);
//! ```

pub mod document;
pub mod error;
pub mod parser;
pub mod serialize;
pub mod types;

pub use document::Document;
pub use error::{Error, Result};
pub use parser::parse;
pub use serialize::SerializeOptions;
pub use types::{Attribute, Branch, Directives, Element, Node, NodeId, NodeKind};
