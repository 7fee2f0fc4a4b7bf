//! Parameter value types
//!
//! This module defines the values a section parameter can carry: plain
//! text, an ordered list of text values (repeatable fields), or one or more
//! pre-built elements (subtree fields).

use crate::core::node::Element;

/// Value of a single section parameter
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A single text value, emitted as one leaf element
    Text(String),
    /// An ordered list of text values, emitted as sibling leaf elements
    List(Vec<String>),
    /// A pre-built element, attached as-is
    Node(Element),
    /// An ordered list of pre-built elements, attached in order
    Nodes(Vec<Element>),
}

impl ParamValue {
    /// Get the value as a single text string, if it is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Check whether the value is a pre-built subtree.
    pub fn is_subtree(&self) -> bool {
        matches!(self, ParamValue::Node(_) | ParamValue::Nodes(_))
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        ParamValue::Text(text.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        ParamValue::Text(text)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(String::from).collect())
    }
}

impl From<Element> for ParamValue {
    fn from(node: Element) -> Self {
        ParamValue::Node(node)
    }
}

impl From<Vec<Element>> for ParamValue {
    fn from(nodes: Vec<Element>) -> Self {
        ParamValue::Nodes(nodes)
    }
}
