//! Serialization of [`Document`] trees back to markup text.

use crate::Document;
use crate::types::{Branch, Element, NAME_DIRECTIVE, NodeId, NodeKind};
use quick_xml::escape::escape;

/// Options for [`Document::to_html_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Drop whitespace-only text nodes and trim the rest.
    ///
    /// A trimmed edge keeps one space when the whitespace next to the text
    /// ended in a space or tab rather than a line break.
    pub compact_whitespace: bool,
}

impl SerializeOptions {
    pub fn compact() -> Self {
        Self {
            compact_whitespace: true,
        }
    }
}

impl Document {
    /// Serialize the whole document verbatim.
    pub fn to_html(&self) -> String {
        self.to_html_with(&SerializeOptions::default())
    }

    /// Serialize the whole document with the given options.
    pub fn to_html_with(&self, options: &SerializeOptions) -> String {
        let mut out = String::new();
        write_node(self, self.root(), options, &mut out);
        out
    }

    /// Serialize the children of `id` verbatim.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        let options = SerializeOptions::default();
        for &child in self.children(id) {
            write_node(self, child, &options, &mut out);
        }
        out
    }

    /// Serialize `id` and its subtree verbatim.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        write_node(self, id, &SerializeOptions::default(), &mut out);
        out
    }
}

fn write_node(doc: &Document, id: NodeId, options: &SerializeOptions, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Fragment => write_children(doc, id, options, out),
        NodeKind::Text(text) => {
            if options.compact_whitespace {
                if let Some(text) = compact_text(text) {
                    out.push_str(&text);
                }
            } else {
                out.push_str(text);
            }
        }
        NodeKind::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype);
            out.push('>');
        }
        NodeKind::Element(element) => {
            write_start_tag(element, out);

            let children = doc.children(id);
            if children.is_empty() && element.self_closing {
                out.push_str("/>");
                return;
            }
            out.push('>');
            if children.is_empty() && element.is_void() {
                return;
            }

            write_children(doc, id, options, out);
            out.push_str("</");
            out.push_str(&element.name);
            out.push('>');
        }
    }
}

fn write_children(doc: &Document, id: NodeId, options: &SerializeOptions, out: &mut String) {
    for &child in doc.children(id) {
        write_node(doc, child, options, out);
    }
}

/// Write `<name` and every attribute, directives first.
fn write_start_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);

    if let Some(name) = &element.directives.name {
        write_directive(NAME_DIRECTIVE, Some(name), out);
    }
    match &element.directives.branch {
        Some(branch @ (Branch::If(expr) | Branch::ElseIf(expr))) => {
            write_directive(branch.attribute_name(), Some(expr), out);
        }
        Some(branch @ Branch::Else) => write_directive(branch.attribute_name(), None, out),
        None => {}
    }

    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        if attr.value.is_empty() {
            continue;
        }
        // Raw values are written as parsed; pick a quote the value doesn't use.
        let quote = if attr.value.contains('"') && !attr.value.contains('\'') {
            '\''
        } else {
            '"'
        };
        out.push('=');
        out.push(quote);
        out.push_str(&attr.value);
        out.push(quote);
    }
}

/// Directive values are stored decoded, so they are escaped on the way out.
fn write_directive(name: &str, value: Option<&str>, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    if let Some(value) = value {
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}

/// Trim a text node for compact output. `None` if nothing but whitespace.
fn compact_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let start = text.len() - text.trim_start().len();
    let end = start + trimmed.len();
    let keeps_space = |c: Option<char>| c.is_some_and(|c| c.is_whitespace() && c != '\n' && c != '\r');

    let mut result = String::with_capacity(trimmed.len() + 2);
    if keeps_space(text[..start].chars().next_back()) {
        result.push(' ');
    }
    result.push_str(trimmed);
    if keeps_space(text[end..].chars().next()) {
        result.push(' ');
    }
    Some(result)
}
