//! Namespace-agnostic XML tree for DataCite exports.
//!
//! DataCite element shape is dynamic: a tag may appear zero, one or many
//! times under its parent depending on the export. Children are therefore
//! always an ordered list, never a scalar/list hybrid.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{IngestError, Result};

/// One node of the parsed document. Tags and attribute names are matched by
/// local name only, so `datacite:creator` and `creator` are the same element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedElement {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<ParsedElement>,
    pub text: String,
}

impl ParsedElement {
    /// Attribute value by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&ParsedElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ParsedElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First element reached by following `path` child-by-child.
    pub fn descendant(&self, path: &[&str]) -> Option<&ParsedElement> {
        let mut node = self;
        for name in path {
            node = node.child(name)?;
        }
        Some(node)
    }

    /// Text content with surrounding whitespace removed.
    pub fn text_trim(&self) -> &str {
        self.text.trim()
    }
}

/// Parse a DataCite export into an element tree. The returned element is the
/// document root (`resource` in a well-formed export).
pub fn parse_document(bytes: &[u8]) -> Result<ParsedElement> {
    let mut reader = Reader::from_reader(bytes);
    let mut stack: Vec<ParsedElement> = Vec::new();
    let mut root: Option<ParsedElement> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(element_from_tag(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = element_from_tag(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| IngestError::MalformedXml(err.to_string()))?;
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| IngestError::MalformedXml("unexpected closing tag".into()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(IngestError::MalformedXml(err.to_string())),
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(IngestError::MalformedXml(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| IngestError::MalformedXml("no document element".into()))
}

fn element_from_tag(tag: &BytesStart<'_>) -> Result<ParsedElement> {
    let name = String::from_utf8_lossy(tag.local_name().as_ref()).into_owned();
    let mut attributes = HashMap::new();

    for attribute in tag.attributes() {
        let attribute = attribute.map_err(|err| IngestError::MalformedXml(err.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| IngestError::MalformedXml(err.to_string()))?
            .into_owned();
        attributes.insert(key, value);
    }

    Ok(ParsedElement {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn attach(
    stack: &mut [ParsedElement],
    root: &mut Option<ParsedElement>,
    element: ParsedElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(IngestError::MalformedXml(
            "content after document element".into(),
        ));
    }
    Ok(())
}
