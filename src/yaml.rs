//! Positioned YAML tree for the hand-rolled decode protocol.
//!
//! The decode functions in [`crate::config`] need to report the exact
//! source position of an offending key or pattern, which a declarative
//! deserializer cannot provide per node. This module drives the
//! `yaml-rust2` event parser through a [`MarkedEventReceiver`] and builds
//! a small tree of [`Node`] values, each annotated with its 1-based line
//! and column.
//!
//! Mappings are kept as ordered key/value pair lists rather than a map so
//! that callers can detect duplicate keys themselves.

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use crate::error::{ConfigError, ConfigResult};

/// The kind-specific payload of a parsed node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// A scalar value. `plain` is true for unquoted scalars, which is what
    /// distinguishes `null` from the string `"null"`.
    Scalar { value: String, plain: bool },
    Sequence(Vec<Node>),
    /// Key/value pairs in document order, duplicates preserved
    Mapping(Vec<(Node, Node)>),
}

/// A parsed YAML node annotated with its source position
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: NodeValue,
    /// 1-based source line
    pub line: usize,
    /// 1-based source column
    pub col: usize,
}

impl Node {
    /// Kind name used in schema error messages
    pub fn kind_name(&self) -> &'static str {
        match self.value {
            NodeValue::Scalar { .. } => "scalar",
            NodeValue::Sequence(_) => "sequence",
            NodeValue::Mapping(_) => "mapping",
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Scalar { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.value {
            NodeValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(Node, Node)]> {
        match &self.value {
            NodeValue::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Whether this node is a YAML null per the core schema. Only plain
    /// scalars can be null; `"null"` quoted is the string.
    pub fn is_null(&self) -> bool {
        match &self.value {
            NodeValue::Scalar { value, plain } => {
                *plain && matches!(value.as_str(), "" | "~" | "null" | "Null" | "NULL")
            }
            _ => false,
        }
    }

    /// Look up the value for a scalar key in a mapping node. Returns the
    /// first occurrence when the key is duplicated.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k.as_scalar() == Some(key))
            .map(|(_, v)| v)
    }
}

enum Container {
    Sequence {
        items: Vec<Node>,
        line: usize,
        col: usize,
    },
    Mapping {
        items: Vec<Node>,
        line: usize,
        col: usize,
    },
}

/// Builds the node tree from parser events. The event stream is balanced
/// by construction, so the stack discipline here cannot underflow on
/// input the scanner accepted.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Container>,
    root: Option<Node>,
    error: Option<String>,
}

impl TreeBuilder {
    fn push_node(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Container::Sequence { items, .. }) | Some(Container::Mapping { items, .. }) => {
                items.push(node);
            }
            None => {
                if self.root.is_some() {
                    self.error =
                        Some("expected a single document in the stream".to_string());
                } else {
                    self.root = Some(node);
                }
            }
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }
        // Scanner columns are 0-based; positions are surfaced 1-based.
        let (line, col) = (mark.line(), mark.col() + 1);
        match ev {
            Event::Scalar(value, style, _, _) => {
                let plain = matches!(style, TScalarStyle::Plain);
                self.push_node(Node {
                    value: NodeValue::Scalar { value, plain },
                    line,
                    col,
                });
            }
            Event::SequenceStart(..) => {
                self.stack.push(Container::Sequence {
                    items: Vec::new(),
                    line,
                    col,
                });
            }
            Event::MappingStart(..) => {
                self.stack.push(Container::Mapping {
                    items: Vec::new(),
                    line,
                    col,
                });
            }
            Event::SequenceEnd => {
                if let Some(Container::Sequence { items, line, col }) = self.stack.pop() {
                    self.push_node(Node {
                        value: NodeValue::Sequence(items),
                        line,
                        col,
                    });
                }
            }
            Event::MappingEnd => {
                if let Some(Container::Mapping { items, line, col }) = self.stack.pop() {
                    let mut pairs = Vec::with_capacity(items.len() / 2);
                    let mut iter = items.into_iter();
                    while let Some(key) = iter.next() {
                        if let Some(value) = iter.next() {
                            pairs.push((key, value));
                        }
                    }
                    self.push_node(Node {
                        value: NodeValue::Mapping(pairs),
                        line,
                        col,
                    });
                }
            }
            Event::Alias(_) => {
                self.error = Some(format!(
                    "anchors and aliases are not supported at line:{line},col:{col}"
                ));
            }
            // Stream and document markers carry no content.
            _ => {}
        }
    }
}

/// Parse a YAML document into a positioned node tree.
///
/// Returns `Ok(None)` for an empty document. Syntax errors, multi-document
/// streams, and aliases surface as [`ConfigError::Syntax`] carrying the
/// underlying parser message.
pub fn parse(source: &str) -> ConfigResult<Option<Node>> {
    let mut parser = Parser::new(source.chars());
    let mut builder = TreeBuilder::default();
    parser
        .load(&mut builder, true)
        .map_err(|e| ConfigError::Syntax {
            message: e.to_string(),
        })?;
    if let Some(message) = builder.error {
        return Err(ConfigError::Syntax { message });
    }
    Ok(builder.root)
}
