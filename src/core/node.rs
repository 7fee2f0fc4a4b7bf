//! VideoMD element tree
//!
//! This module defines the tree node produced by the section assemblers.
//! Nodes have single ownership: attaching a subtree moves it into the
//! parent, so a built subtree can never end up under two parents.

use crate::core::namespace::QName;

/// A node in a VideoMD document tree
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: QName,
    attributes: Vec<(QName, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element in the VideoMD namespace.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            name: QName::videomd(tag),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create an empty element with a prefixed tag.
    ///
    /// The prefix is merged into the tag the way [`QName::videomd_prefixed`]
    /// does: `Element::with_prefix("objectIdentifier", "linking")` yields a
    /// `linkingObjectIdentifier` element.
    pub fn with_prefix(tag: &str, prefix: &str) -> Self {
        Self {
            name: QName::videomd_prefixed(tag, prefix),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Get the qualified name of this element.
    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Get the local part of this element's name.
    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    /// Get the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Set an attribute, replacing any previous value for the same name.
    ///
    /// Attributes keep the order they were first set in.
    pub fn set_attribute(&mut self, name: QName, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Get an attribute value by its local name.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name.local == local)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over all attributes in set order.
    pub fn attributes(&self) -> impl Iterator<Item = (&QName, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name, value.as_str()))
    }

    /// Append a child element, taking ownership of it.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append a new empty child element and return a reference to it.
    pub fn child(&mut self, tag: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(tag));
        self.children.last_mut().expect("child just appended")
    }

    /// Get the children in append order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Find the first child with the given local name.
    pub fn find(&self, local: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.name.local == local)
    }

    /// Iterate over all children with the given local name.
    pub fn find_all<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter(move |child| child.name.local == local)
    }
}
