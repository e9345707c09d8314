//! Markup parser that builds [`Document`] arenas.
//!
//! Text is scanned here so that HTML text survives: a `<` that does not open
//! a tag stays text, and `script` / `style` bodies are read raw up to their
//! end tag. Everything that starts a tag (elements, end tags, comments,
//! doctypes, CDATA) is read one event at a time with quick-xml.

use crate::types::{
    Branch, ELSE_DIRECTIVE, ELSE_IF_DIRECTIVE, Element, IF_DIRECTIVE, NAME_DIRECTIVE, NodeId,
    NodeKind, decode, is_void_element,
};
use crate::{Document, Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesEnd, BytesStart, Event};

/// Elements whose content is raw text, not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Parse markup text into a [`Document`].
///
/// The input is a fragment: it may hold any number of top-level nodes.
/// Attributes may be unquoted or valueless, void elements such as `<br>` need
/// no end tag, a `<` that does not start a tag is text, and comments,
/// processing instructions and XML declarations are dropped.
///
/// # Example
///
/// ```rust
/// use creamy_markup::parse;
///
/// let doc = parse("<One/><Two/>").unwrap();
/// assert_eq!(doc.children(doc.root()).len(), 2);
///
/// let doc = parse("<p>1 < 2</p>").unwrap();
/// assert_eq!(doc.to_html(), "<p>1 < 2</p>");
/// ```
///
/// # Errors
///
/// Returns an error on malformed markup: bad syntax, unclosed or mismatched
/// elements, stray end tags, or two branch directives on one element.
pub fn parse(content: &str) -> Result<Document> {
    MarkupParser::new(content).parse()
}

/// Internal parser state.
struct MarkupParser<'a> {
    /// The full input.
    source: &'a str,

    /// Byte offset of the next unread character.
    position: usize,

    /// The document being built.
    document: Document,

    /// Open elements with the byte offset of their `<`.
    stack: Vec<(NodeId, usize)>,
}

impl<'a> MarkupParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            document: Document::new(),
            stack: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Document> {
        let source = self.source;
        while self.position < source.len() {
            let rest = &source[self.position..];
            if opens_tag(rest) {
                self.read_tag()?;
            } else {
                let len = text_len(rest);
                self.append(NodeKind::Text(rest[..len].to_string()));
                self.position += len;
            }
        }

        if let Some(&(id, position)) = self.stack.last() {
            let name = self
                .document
                .element(id)
                .map(|e| e.name.clone())
                .unwrap_or_default();
            return Err(Error::UnclosedElement { name, position });
        }

        Ok(self.document)
    }

    /// Read the single quick-xml event starting at the current `<`.
    fn read_tag(&mut self) -> Result<()> {
        let source = self.source;
        let start = self.position;

        let mut reader = Reader::from_str(&source[start..]);
        let config = reader.config_mut();
        // End tags are matched here so void elements can stay unclosed.
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        let event = reader.read_event().map_err(|e| Error::Syntax {
            message: e.to_string(),
            position: start + reader.error_position() as usize,
        })?;
        self.position = start + reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                let element = self.build_element(&e, false, start)?;
                let raw_text = is_raw_text_element(&element.name).then(|| element.name.clone());
                let void = element.is_void();
                let id = self.append(NodeKind::Element(element));
                if !void {
                    self.stack.push((id, start));
                }
                if let Some(name) = raw_text {
                    self.read_raw_text(&name, start)?;
                }
            }
            Event::Empty(e) => {
                let element = self.build_element(&e, true, start)?;
                self.append(NodeKind::Element(element));
            }
            Event::End(e) => {
                self.handle_end(&e, start)?;
            }
            Event::Text(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                self.append(NodeKind::Text(text));
            }
            Event::CData(e) => {
                let text = format!("<![CDATA[{}]]>", String::from_utf8_lossy(&e));
                self.append(NodeKind::Text(text));
            }
            Event::DocType(e) => {
                let doctype = String::from_utf8_lossy(&e).trim().to_string();
                self.append(NodeKind::Doctype(doctype));
            }
            Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::Eof => {}
        }

        Ok(())
    }

    /// Take everything up to the end tag of the raw text element `name` as
    /// one text node.
    fn read_raw_text(&mut self, name: &str, start: usize) -> Result<()> {
        let source = self.source;
        let rest = &source[self.position..];
        let Some(len) = find_end_tag(rest, name) else {
            return Err(Error::UnclosedElement {
                name: name.to_string(),
                position: start,
            });
        };

        if len > 0 {
            self.append(NodeKind::Text(rest[..len].to_string()));
        }
        self.position += len;
        Ok(())
    }

    /// Append to the innermost open element, or the root at top level.
    fn append(&mut self, kind: NodeKind) -> NodeId {
        let parent = self
            .stack
            .last()
            .map_or_else(|| self.document.root(), |&(id, _)| id);
        self.document.append(parent, kind)
    }

    fn handle_end(&mut self, e: &BytesEnd<'_>, position: usize) -> Result<()> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        // `</br>` and friends close nothing.
        if is_void_element(&name) {
            return Ok(());
        }

        let Some((open, _)) = self.stack.pop() else {
            return Err(Error::UnexpectedEndTag { name, position });
        };

        let expected = self
            .document
            .element(open)
            .map(|e| e.name.as_str())
            .unwrap_or_default();
        if !expected.eq_ignore_ascii_case(&name) {
            return Err(Error::MismatchedEndTag {
                expected: expected.to_string(),
                found: name,
                position,
            });
        }

        Ok(())
    }

    fn build_element(
        &self,
        e: &BytesStart<'_>,
        self_closing: bool,
        position: usize,
    ) -> Result<Element> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut element = Element::new(name);
        element.self_closing = self_closing;

        let mut attributes = e.html_attributes();
        attributes.with_checks(false);

        for attr in attributes {
            let attr = attr.map_err(|err| Error::Syntax {
                message: format!("invalid attribute: {}", err),
                position,
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = String::from_utf8_lossy(&attr.value).into_owned();
            add_attribute(&mut element, key, value, position)?;
        }

        Ok(element)
    }
}

/// Whether `text` starts with a `<` that opens a tag: `<name`, `</name`,
/// `<!` or `<?`.
fn opens_tag(text: &str) -> bool {
    let mut bytes = text.bytes();
    if bytes.next() != Some(b'<') {
        return false;
    }
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() => true,
        Some(b'!' | b'?') => true,
        Some(b'/') => bytes.next().is_some_and(|b| b.is_ascii_alphabetic()),
        _ => false,
    }
}

/// Length of the text run at the start of `text`: up to the next `<` that
/// opens a tag, or the end of input.
fn text_len(text: &str) -> usize {
    text.match_indices('<')
        .map(|(i, _)| i)
        .find(|&i| opens_tag(&text[i..]))
        .unwrap_or(text.len())
}

fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|raw| raw.eq_ignore_ascii_case(name))
}

/// Offset of the first `</name` (any case) in `text` that ends the name.
fn find_end_tag(text: &str, name: &str) -> Option<usize> {
    text.match_indices("</").map(|(i, _)| i).find(|&i| {
        let after = i + 2;
        let tag_matches = text
            .get(after..after + name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name));
        let terminated = text[after..]
            .as_bytes()
            .get(name.len())
            .is_none_or(|&b| b == b'>' || b == b'/' || b.is_ascii_whitespace());
        tag_matches && terminated
    })
}

/// Store an attribute, lifting directive attributes into [`Element::directives`].
fn add_attribute(element: &mut Element, key: String, value: String, position: usize) -> Result<()> {
    let branch = match key.as_str() {
        NAME_DIRECTIVE => {
            element.directives.name = Some(decode(&value).into_owned());
            return Ok(());
        }
        IF_DIRECTIVE => Branch::If(decode(&value).into_owned()),
        ELSE_IF_DIRECTIVE => Branch::ElseIf(decode(&value).into_owned()),
        ELSE_DIRECTIVE => Branch::Else,
        _ => {
            element.set_attribute(key, value);
            return Ok(());
        }
    };

    if let Some(existing) = &element.directives.branch {
        return Err(Error::ConflictingDirectives {
            element: element.name.clone(),
            first: existing.attribute_name().to_string(),
            second: branch.attribute_name().to_string(),
            position,
        });
    }
    element.directives.branch = Some(branch);
    Ok(())
}
