//! Well-formedness check and element tree construction.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{PrefixDeclaration, QName, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::trace;

use super::path::FieldPath;
use super::{NamespaceBindings, Result};
use crate::error::DocumentError;

/// Index of an element inside a [`ParsedTree`]. Indices follow document order.
pub type NodeId = usize;

/// Expanded element name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementName {
    /// Namespace URI, `None` for un-namespaced elements.
    pub namespace: Option<String>,
    /// Local part of the tag.
    pub local: String,
}

#[derive(Debug, Clone)]
struct Node {
    name: ElementName,
    /// Character data before the first child element.
    text: String,
    children: Vec<NodeId>,
}

/// In-memory view of one document.
///
/// Elements live in a flat arena in document order; the root is always node 0.
#[derive(Debug, Clone)]
pub struct ParsedTree {
    nodes: Vec<Node>,
    namespaces: NamespaceBindings,
}

impl ParsedTree {
    /// Parse raw bytes, rejecting anything that is not well-formed XML.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(DocumentError::malformed)?;
        Self::parse_str(text.trim_start_matches('\u{feff}'))
    }

    fn parse_str(text: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(text);
        reader.config_mut().expand_empty_elements = true;
        reader.config_mut().check_comments = true;

        let mut nodes: Vec<Node> = Vec::new();
        let mut namespaces = NamespaceBindings::default();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut root_closed = false;
        let mut first_event = true;

        loop {
            let (resolved, event) = reader
                .read_resolved_event()
                .map_err(DocumentError::malformed)?;
            let at_start = std::mem::replace(&mut first_event, false);

            match event {
                Event::Start(start) => {
                    if root_closed {
                        return Err(DocumentError::malformed("multiple root elements"));
                    }

                    let namespace = match resolved {
                        ResolveResult::Bound(ns) => Some(utf8(ns.into_inner())?.to_string()),
                        ResolveResult::Unbound => None,
                        ResolveResult::Unknown(prefix) => {
                            return Err(DocumentError::malformed(format!(
                                "undeclared namespace prefix '{}'",
                                String::from_utf8_lossy(&prefix)
                            )));
                        }
                    };
                    check_qname(start.name())?;
                    let local = utf8(start.local_name().into_inner())?.to_string();

                    let declarations = read_attributes(&reader, &start)?;
                    if stack.is_empty() {
                        namespaces = declarations;
                    }

                    let id = nodes.len();
                    nodes.push(Node {
                        name: ElementName { namespace, local },
                        text: String::new(),
                        children: Vec::new(),
                    });
                    if let Some(&parent) = stack.last() {
                        nodes[parent].children.push(id);
                    }
                    stack.push(id);
                }
                Event::End(_) => {
                    if stack.pop().is_none() {
                        return Err(DocumentError::malformed("unexpected closing tag"));
                    }
                    if stack.is_empty() {
                        root_closed = true;
                    }
                }
                Event::Text(content) => {
                    if content.windows(3).any(|w| w == b"]]>") {
                        return Err(DocumentError::malformed("']]>' in character data"));
                    }
                    let content = content.unescape().map_err(DocumentError::malformed)?;
                    check_chars(&content)?;
                    append_text(&mut nodes, &stack, &content)?;
                }
                Event::CData(cdata) => {
                    let content = utf8(&cdata)?.to_string();
                    check_chars(&content)?;
                    append_text(&mut nodes, &stack, &content)?;
                }
                Event::Decl(_) if !at_start => {
                    return Err(DocumentError::malformed(
                        "XML declaration not at the start of the document",
                    ));
                }
                Event::DocType(_) if !nodes.is_empty() => {
                    return Err(DocumentError::malformed("doctype after the root element"));
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions and doctypes carry no fields.
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(DocumentError::malformed("unexpected end of document, unclosed element"));
        }
        if nodes.is_empty() {
            return Err(DocumentError::malformed("no root element"));
        }

        trace!("Parsed tree with {} elements", nodes.len());

        Ok(Self { nodes, namespaces })
    }

    /// Namespace bindings declared on the root element, in declaration order.
    pub fn namespaces(&self) -> &NamespaceBindings {
        &self.namespaces
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        0
    }

    /// Expanded name of an element.
    pub fn name(&self, id: NodeId) -> &ElementName {
        &self.nodes[id].name
    }

    /// Own leading text of an element, untrimmed.
    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id].text
    }

    /// Direct child elements, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluate a path, returning matching elements in document order.
    pub fn select(&self, path: &FieldPath, bindings: &NamespaceBindings) -> Vec<NodeId> {
        let mut steps = path.steps().iter();
        let Some(first) = steps.next() else {
            return Vec::new();
        };

        // Every element except the root is a descendant of the root.
        let mut current: Vec<NodeId> = (1..self.nodes.len())
            .filter(|&id| first.matches(self.name(id), bindings))
            .collect();

        for step in steps {
            let mut next: Vec<NodeId> = current
                .iter()
                .flat_map(|&id| self.children(id).iter().copied())
                .filter(|&id| step.matches(self.name(id), bindings))
                .collect();
            next.sort_unstable();
            next.dedup();
            current = next;
        }

        current
    }
}

/// Validate every attribute of an element and collect its namespace declarations.
fn read_attributes<R>(reader: &NsReader<R>, start: &BytesStart<'_>) -> Result<NamespaceBindings> {
    let mut declarations = NamespaceBindings::default();

    // The attribute iterator itself rejects unquoted and duplicated attributes.
    for attr in start.attributes() {
        let attr = attr.map_err(DocumentError::malformed)?;
        check_qname(attr.key)?;
        if let (ResolveResult::Unknown(prefix), _) = reader.resolve_attribute(attr.key) {
            return Err(DocumentError::malformed(format!(
                "undeclared namespace prefix '{}'",
                String::from_utf8_lossy(&prefix)
            )));
        }
        if attr.value.contains(&b'<') {
            return Err(DocumentError::malformed("'<' in attribute value"));
        }
        let value = attr.unescape_value().map_err(DocumentError::malformed)?;
        check_chars(&value)?;

        let Some(declaration) = attr.key.as_namespace_binding() else {
            continue;
        };
        let prefix = match declaration {
            PrefixDeclaration::Default => None,
            PrefixDeclaration::Named(prefix) => Some(utf8(prefix)?.to_string()),
        };
        declarations.bind(prefix, value.into_owned());
    }

    Ok(declarations)
}

fn append_text(nodes: &mut [Node], stack: &[NodeId], content: &str) -> Result<()> {
    match stack.last() {
        Some(&id) => {
            let node = &mut nodes[id];
            if node.children.is_empty() {
                node.text.push_str(content);
            }
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(DocumentError::malformed("text content outside the root element")),
    }
}

/// Both halves of a qualified name must match the XML `Name` production.
fn check_qname(name: QName<'_>) -> Result<()> {
    let prefix = name.prefix().map(|p| p.into_inner());
    for part in prefix.into_iter().chain([name.local_name().into_inner()]) {
        if !is_xml_name(utf8(part)?) {
            return Err(DocumentError::malformed(format!(
                "invalid name '{}'",
                String::from_utf8_lossy(name.as_ref())
            )));
        }
    }
    Ok(())
}

fn check_chars(content: &str) -> Result<()> {
    match content.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(DocumentError::malformed(format!(
            "character U+{:04X} is not allowed in XML",
            c as u32
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char)
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(DocumentError::malformed)
}
