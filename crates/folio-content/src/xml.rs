//! Attribute-preserving XML parsing into an owned element tree.
//!
//! Content documents are small, so the whole document is materialized rather
//! than streamed; the loaders need random access to `<meta>` blocks and the
//! renderer needs the body nodes in order.

use std::fmt::Write as _;

use quick_xml::escape::{escape, unescape};
use quick_xml::events::Event;
use quick_xml::Reader;

/// A node in a parsed content document: an element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its attributes (in document order) and child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

/// Errors that can occur when parsing a content document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("syntax error at byte {position}: {source}")]
    Syntax {
        position: u64,
        source: quick_xml::Error,
    },

    #[error("invalid character escape: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("closing tag without a matching opening tag")]
    UnexpectedClose,

    #[error("document has no root element")]
    MissingRoot,

    #[error("content after the root element closed")]
    TrailingContent,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.name == name)
    }

    /// All child elements, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Trimmed text content of the first child element with the given name.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|e| e.text())
    }

    /// Concatenated descendant text, trimmed at the edges.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out.trim().to_string()
    }
}

fn collect_text(nodes: &[XmlNode], out: &mut String) {
    for node in nodes {
        match node {
            XmlNode::Text(text) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
            XmlNode::Element(e) => collect_text(&e.children, out),
        }
    }
}

/// Parse a content document, returning its root element.
///
/// The XML declaration, comments, and processing instructions are skipped;
/// whitespace-only text between elements is dropped.
pub fn parse_document(source: &str) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlError::TrailingContent);
                }
                stack.push(element_from(&start)?);
            }
            Ok(Event::Empty(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlError::TrailingContent);
                }
                let element = element_from(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or(XmlError::UnexpectedClose)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(text)) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(text.as_ref()).into_owned();
                    let value = unescape(&raw)?.into_owned();
                    if !value.is_empty() {
                        parent.children.push(XmlNode::Text(value));
                    }
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some(parent) = stack.last_mut() {
                    let value = String::from_utf8_lossy(cdata.as_ref()).into_owned();
                    if !value.is_empty() {
                        parent.children.push(XmlNode::Text(value));
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Declaration, comments, doctype, processing instructions
            Ok(_) => {}
            Err(e) => {
                return Err(XmlError::Syntax {
                    position: reader.error_position(),
                    source: e,
                })
            }
        }
    }

    root.ok_or(XmlError::MissingRoot)
}

fn element_from(start: &quick_xml::events::BytesStart<'_>) -> Result<XmlElement, XmlError> {
    let mut element = XmlElement::new(decode_name(start.name().as_ref()));
    for attr in start.attributes().flatten() {
        let key = decode_name(attr.key.as_ref());
        let raw = String::from_utf8_lossy(attr.value.as_ref()).into_owned();
        let value = unescape(&raw)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None => {
            // First completed top-level element wins; a second one is caught
            // at its opening tag.
            root.get_or_insert(element);
        }
    }
}

fn decode_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Serialize body nodes back to HTML markup, escaping text and attribute
/// values. Childless elements become self-closing tags.
pub fn to_html(nodes: &[XmlNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &XmlNode) {
    match node {
        XmlNode::Text(text) => out.push_str(&escape(text.as_str())),
        XmlNode::Element(element) => {
            out.push('<');
            out.push_str(&element.name);
            for (key, value) in &element.attributes {
                let _ = write!(out, " {}=\"{}\"", key, escape(value.as_str()));
            }
            if element.children.is_empty() {
                out.push_str("/>");
            } else {
                out.push('>');
                for child in &element.children {
                    write_node(out, child);
                }
                let _ = write!(out, "</{}>", element.name);
            }
        }
    }
}
