//! Namespace handling for VideoMD documents
//!
//! VideoMD elements all live in a single Library of Congress namespace.
//! This module defines the namespace constants and the qualified-name type
//! used to tag every element and attribute in the output tree.

use std::fmt;

/// Built-in namespaces used by VideoMD documents
pub mod ns {
    /// VideoMD namespace
    pub const VIDEOMD: &str = "http://www.loc.gov/videoMD/";
    /// XML Schema instance namespace
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
    /// VideoMD namespace prefix
    pub const VIDEOMD_PREFIX: &str = "vmd";
    /// XML Schema instance prefix
    pub const XSI_PREFIX: &str = "xsi";
}

/// Value of the xsi:schemaLocation attribute on the VIDEOMD root element.
pub const SCHEMA_LOCATION: &str =
    "http://www.loc.gov/VideoMD/ https://www.loc.gov/standards/vmdvmd/VideoMD.xsd";

/// A namespace-qualified element or attribute name
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QName {
    /// Namespace URI the name belongs to; empty for unqualified attributes
    pub namespace: &'static str,
    /// Local part of the name
    pub local: String,
}

impl QName {
    /// Qualify a tag into the VideoMD namespace.
    pub fn videomd(tag: impl Into<String>) -> Self {
        Self {
            namespace: ns::VIDEOMD,
            local: tag.into(),
        }
    }

    /// Qualify a prefixed tag into the VideoMD namespace.
    ///
    /// The first character of the tag is upper-cased and appended to the
    /// prefix:
    ///
    /// ```
    /// use videomd::QName;
    ///
    /// let name = QName::videomd_prefixed("objectIdentifier", "linking");
    /// assert_eq!(name.local, "linkingObjectIdentifier");
    /// ```
    ///
    /// Tag characters are not validated; a malformed tag propagates into the
    /// output tree as-is.
    pub fn videomd_prefixed(tag: &str, prefix: &str) -> Self {
        let mut local = String::with_capacity(prefix.len() + tag.len());
        local.push_str(prefix);
        let mut chars = tag.chars();
        if let Some(first) = chars.next() {
            local.extend(first.to_uppercase());
            local.push_str(chars.as_str());
        }
        Self {
            namespace: ns::VIDEOMD,
            local,
        }
    }

    /// Qualify a name into the XML Schema instance namespace.
    pub fn xsi(name: impl Into<String>) -> Self {
        Self {
            namespace: ns::XSI,
            local: name.into(),
        }
    }

    /// An attribute name with no namespace.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            namespace: "",
            local: name.into(),
        }
    }

    /// Conventional prefix for this name's namespace, if it has one.
    pub fn prefix(&self) -> Option<&'static str> {
        match self.namespace {
            ns::VIDEOMD => Some(ns::VIDEOMD_PREFIX),
            ns::XSI => Some(ns::XSI_PREFIX),
            _ => None,
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix() {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_videomd_name() {
        let name = QName::videomd("duration");
        assert_eq!(name.namespace, ns::VIDEOMD);
        assert_eq!(name.local, "duration");
        assert_eq!(name.to_string(), "vmd:duration");
    }

    #[test]
    fn test_prefixed_name() {
        let name = QName::videomd_prefixed("objectIdentifier", "linking");
        assert_eq!(name.local, "linkingObjectIdentifier");
        assert_eq!(name.namespace, ns::VIDEOMD);
    }

    #[test]
    fn test_prefixed_name_empty_tag() {
        let name = QName::videomd_prefixed("", "linking");
        assert_eq!(name.local, "linking");
    }

    #[test]
    fn test_xsi_name() {
        let name = QName::xsi("schemaLocation");
        assert_eq!(name.to_string(), "xsi:schemaLocation");
    }

    #[test]
    fn test_unqualified_name() {
        let name = QName::unqualified("ANALOGDIGITALFLAG");
        assert_eq!(name.prefix(), None);
        assert_eq!(name.to_string(), "ANALOGDIGITALFLAG");
    }
}
