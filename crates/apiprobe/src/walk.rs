//! Generic depth-first tree walker
//!
//! One traversal abstraction over both parsed representations. The
//! abstraction point is "a node has zero or more named traversable
//! children": XML elements satisfy it through their element children, JSON
//! objects through their keys. [`NodeRef`] is the tagged union binding the
//! two together, so traversal needs no runtime type inspection beyond a
//! single match.

use crate::document::ParsedDocument;
use crate::types::{DocumentType, Response};
use serde_json::Value;
use xmltree::{Element, XMLNode};

/// Walk a response's parsed tree depth-first.
///
/// Yields every node name exactly once: XML tag names in document order,
/// JSON object keys in the tree's stable order, each key before its subtree.
/// Opaque (html) and unparsed responses produce
/// [`Traversal::Unsupported`], which yields nothing.
pub fn walk(response: &Response) -> Traversal<'_> {
    match response.document() {
        ParsedDocument::Xml(root) => Traversal::Nodes(NodeNames {
            stack: vec![NodeRef::Element(root)],
        }),
        ParsedDocument::Json(value) => Traversal::Nodes(NodeNames {
            stack: vec![NodeRef::Branch(value)],
        }),
        ParsedDocument::Opaque | ParsedDocument::None => {
            tracing::warn!(
                document_type = %response.document_type(),
                "traversal unsupported for this document type"
            );
            Traversal::Unsupported(response.document_type())
        }
    }
}

/// Outcome of requesting a traversal
///
/// Either a live node-name sequence or a reported no-op for document types
/// that carry no traversable tree. The unsupported case iterates empty
/// rather than erroring, so callers can always `for name in response.walk()`.
#[derive(Debug)]
pub enum Traversal<'a> {
    /// Depth-first node names of a parsed tree
    Nodes(NodeNames<'a>),
    /// No traversable tree for this document type (html, unknown)
    Unsupported(DocumentType),
}

impl Traversal<'_> {
    /// False when the response's document type carries no traversable tree
    pub fn is_supported(&self) -> bool {
        matches!(self, Traversal::Nodes(_))
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match self {
            Traversal::Nodes(names) => names.next(),
            Traversal::Unsupported(_) => None,
        }
    }
}

/// Lazy depth-first sequence of node names
///
/// Single-pass: the stack is consumed as the iterator advances, so a
/// traversal cannot be restarted - obtain a fresh one from
/// [`walk`](crate::walk) instead.
#[derive(Debug)]
pub struct NodeNames<'a> {
    stack: Vec<NodeRef<'a>>,
}

/// A pending position in either tree shape
#[derive(Debug)]
enum NodeRef<'a> {
    /// An XML element: emits its tag name, then its element children
    Element(&'a Element),
    /// A JSON object key: emits the key, then descends into its value
    Key { name: &'a str, value: &'a Value },
    /// A nameless JSON value (the root, or an array slot): emits nothing
    /// itself, only exposes the keys nested inside it
    Branch(&'a Value),
}

impl<'a> Iterator for NodeNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(node) = self.stack.pop() {
            match node {
                NodeRef::Element(element) => {
                    self.push_element_children(element);
                    return Some(&element.name);
                }
                NodeRef::Key { name, value } => {
                    self.push_value_children(value);
                    return Some(name);
                }
                NodeRef::Branch(value) => self.push_value_children(value),
            }
        }
        None
    }
}

impl<'a> NodeNames<'a> {
    /// Queue element children in document order; text, comment and CDATA
    /// children are skipped and never counted as visited nodes.
    fn push_element_children(&mut self, element: &'a Element) {
        for child in element.children.iter().rev() {
            if let XMLNode::Element(child) = child {
                self.stack.push(NodeRef::Element(child));
            }
        }
    }

    /// Queue the keys reachable inside a JSON value. Objects contribute
    /// their keys; arrays contribute whatever objects sit in their slots;
    /// scalars contribute nothing.
    fn push_value_children(&mut self, value: &'a Value) {
        match value {
            Value::Object(map) => {
                for (name, value) in map.iter().rev() {
                    self.stack.push(NodeRef::Key { name, value });
                }
            }
            Value::Array(items) => {
                for item in items.iter().rev() {
                    if item.is_object() || item.is_array() {
                        self.stack.push(NodeRef::Branch(item));
                    }
                }
            }
            _ => {}
        }
    }
}
