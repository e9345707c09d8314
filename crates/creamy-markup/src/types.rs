//! Node, element and directive types stored in a [`Document`](crate::Document).

use std::borrow::Cow;

/// Attribute that declares a component definition.
pub const NAME_DIRECTIVE: &str = "@name";
/// Attribute that opens a conditional chain.
pub const IF_DIRECTIVE: &str = "@if";
/// Attribute for an intermediate branch of a conditional chain.
pub const ELSE_IF_DIRECTIVE: &str = "@else-if";
/// Attribute for the terminal branch of a conditional chain.
pub const ELSE_DIRECTIVE: &str = "@else";

/// Index of a node inside a [`Document`](crate::Document) arena.
///
/// Ids are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node holds.
    pub kind: NodeKind,

    /// Parent node, `None` for the fragment root and for detached nodes.
    pub(crate) parent: Option<NodeId>,

    /// Children in document order.
    pub(crate) children: Vec<NodeId>,
}

/// The content of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The root of a parsed fragment. Holds the top-level nodes.
    Fragment,

    /// An element with its attributes and directives.
    Element(Element),

    /// Raw text, entity references kept exactly as written.
    Text(String),

    /// A `<!DOCTYPE ...>` declaration (content after the keyword).
    Doctype(String),
}

/// An element node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, case preserved (`Button` and `button` are different tags).
    pub name: String,

    /// Regular attributes in source order. Directives are not in this list.
    pub attributes: Vec<Attribute>,

    /// Directive attributes lifted out while parsing.
    pub directives: Directives,

    /// Whether the element was written as `<tag/>`.
    pub self_closing: bool,
}

/// An attribute with its raw (undecoded) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Directives carried by an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    /// Value of `@name`: the element is a component definition.
    pub name: Option<String>,

    /// Conditional branch directive, if any.
    pub branch: Option<Branch>,
}

/// One branch of an `@if` / `@else-if` / `@else` chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    If(String),
    ElseIf(String),
    Else,
}

impl Branch {
    /// The attribute spelling of this directive.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Branch::If(_) => IF_DIRECTIVE,
            Branch::ElseIf(_) => ELSE_IF_DIRECTIVE,
            Branch::Else => ELSE_DIRECTIVE,
        }
    }

    /// True for `@else-if` and `@else`, the branches that continue a chain.
    pub fn continues_chain(&self) -> bool {
        matches!(self, Branch::ElseIf(_) | Branch::Else)
    }
}

impl Element {
    /// Create an element with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            directives: Directives::default(),
            self_closing: false,
        }
    }

    /// Get an attribute value by name, with character references decoded.
    pub fn get_attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get_attribute_full(name).map(Attribute::decoded_value)
    }

    /// Get an attribute by name, returning the raw attribute.
    pub fn get_attribute_full(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute_full(name).is_some()
    }

    /// Set an attribute, replacing the value of an existing one in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Remove an attribute, returning it if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index))
    }

    /// Strip and return the branch directive.
    pub fn take_branch(&mut self) -> Option<Branch> {
        self.directives.branch.take()
    }

    /// Whether this is an HTML void element (`<br>`, `<img>`, ...).
    pub fn is_void(&self) -> bool {
        is_void_element(&self.name)
    }
}

impl Attribute {
    /// The value with character and entity references resolved.
    ///
    /// Values containing a bare `&` (not a valid reference) are returned as
    /// written.
    pub fn decoded_value(&self) -> Cow<'_, str> {
        decode(&self.value)
    }
}

/// Resolve character and entity references, keeping the raw text on failure.
pub(crate) fn decode(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::unescape(raw).unwrap_or(Cow::Borrowed(raw))
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `name` is an HTML void element. Case-insensitive.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}
