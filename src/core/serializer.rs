//! XML serializer for VideoMD element trees
//!
//! This crate performs no schema validation; collaborators serialize the
//! assembled tree with this module and hand the text to an external XSD
//! validator.

use crate::core::error::{VmdError, VmdResult};
use crate::core::namespace::{ns, QName};
use crate::core::node::Element;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Serializer for VideoMD element trees
#[derive(Debug, Clone)]
pub struct XmlSerializer {
    indent: usize,
}

impl XmlSerializer {
    /// Create a new serializer with two-space indentation.
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    /// Serialize an element tree to indented XML.
    ///
    /// The vmd and xsi namespaces are declared on the outermost element, so
    /// a standalone section serializes to well-formed XML just like a full
    /// document.
    pub fn serialize(&self, root: &Element) -> VmdResult<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', self.indent);
        self.write_element(&mut writer, root, true)?;

        let result = writer.into_inner().into_inner();
        String::from_utf8(result)
            .map_err(|e| VmdError::SerializationError(format!("UTF-8 encoding error: {}", e)))
    }

    /// Serialize with a leading XML declaration.
    pub fn serialize_with_declaration(&self, root: &Element) -> VmdResult<String> {
        let body = self.serialize(root)?;
        Ok(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
            body
        ))
    }

    fn qualified(&self, name: &QName) -> String {
        match name.prefix() {
            Some(prefix) => format!("{}:{}", prefix, name.local),
            None => name.local.clone(),
        }
    }

    fn write_element(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        element: &Element,
        is_root: bool,
    ) -> VmdResult<()> {
        let tag = self.qualified(element.name());
        let mut start = BytesStart::new(tag.as_str());

        if is_root {
            start.push_attribute((
                format!("xmlns:{}", ns::VIDEOMD_PREFIX).as_str(),
                ns::VIDEOMD,
            ));
            start.push_attribute((format!("xmlns:{}", ns::XSI_PREFIX).as_str(), ns::XSI));
        }

        for (name, value) in element.attributes() {
            start.push_attribute((self.qualified(name).as_str(), value));
        }

        if element.text().is_none() && element.children().is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;

        if let Some(text) = element.text() {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in element.children() {
            self.write_element(writer, child, false)?;
        }

        writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
        Ok(())
    }
}

impl Default for XmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespace::SCHEMA_LOCATION;

    #[test]
    fn test_serialize_empty_element() {
        let serializer = XmlSerializer::new();
        let element = Element::new("fileData");
        let xml = serializer.serialize(&element).unwrap();
        assert!(xml.contains("<vmd:fileData"));
        assert!(xml.contains("xmlns:vmd=\"http://www.loc.gov/videoMD/\""));
        assert!(xml.ends_with("/>"));
    }

    #[test]
    fn test_serialize_nested() {
        let serializer = XmlSerializer::new();
        let mut element = Element::new("fileData");
        element.child("duration").set_text("PT1H30M");

        let xml = serializer.serialize(&element).unwrap();
        assert!(xml.contains("<vmd:duration>PT1H30M</vmd:duration>"));
        assert!(xml.contains("</vmd:fileData>"));
    }

    #[test]
    fn test_serialize_attributes() {
        let serializer = XmlSerializer::new();
        let mut root = Element::new("VIDEOMD");
        root.set_attribute(QName::xsi("schemaLocation"), SCHEMA_LOCATION);
        root.set_attribute(QName::unqualified("ANALOGDIGITALFLAG"), "FileDigital");

        let xml = serializer.serialize(&root).unwrap();
        assert!(xml.contains("xsi:schemaLocation="));
        assert!(xml.contains("ANALOGDIGITALFLAG=\"FileDigital\""));
        assert!(xml.contains(
            "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""
        ));
    }

    #[test]
    fn test_serialize_escapes_text() {
        let serializer = XmlSerializer::new();
        let mut element = Element::new("note");
        element.set_text("a < b & c");

        let xml = serializer.serialize(&element).unwrap();
        assert!(xml.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_serialize_with_declaration() {
        let serializer = XmlSerializer::new();
        let element = Element::new("VIDEOMD");
        let xml = serializer.serialize_with_declaration(&element).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }
}
