//! Parameter whitelists and mappings
//!
//! Each VideoMD section accepts a fixed, ordered set of field names. The
//! lists below preserve the declaration order of the schema; the section
//! assemblers walk them in that order, so output element order never
//! depends on the order keys were inserted into a [`Params`] mapping.

use crate::core::error::{VmdError, VmdResult};
use crate::types::value::ParamValue;

/// Fields shared by the fileData and track sections.
pub const MEDIA_PARAMS: [&str; 9] = [
    "tracking", "duration", "language",
    "security", "size", "dataRate",
    "timecode", "use", "otherUse",
];

/// Fields accepted by the fileData section, media fields first.
pub const FILE_DATA_PARAMS: [&str; 26] = [
    "tracking", "duration", "language",
    "security", "size", "dataRate",
    "timecode", "use", "otherUse",
    "bitsPerSample", "byteOrder", "color",
    "otherColor", "messageDigest", "compression",
    "track", "dataRateUnit", "dataRateMode",
    "frame", "frameRate", "sampleRate",
    "location", "format", "sampling",
    "signalFormat", "sound",
];

/// Fields accepted by the physicalData section.
pub const PHYSICAL_DATA_PARAMS: [&str; 16] = [
    "EBUStorageMediaCodes", "colorBurst", "condition",
    "dimensions", "disposition", "dtv",
    "generation", "material", "numberCarriers",
    "physFormat", "signalFormat", "timecode",
    "tracking", "videodiscType", "videotapeType",
    "note",
];

/// Fields accepted by the track section, media fields first.
pub const TRACK_PARAMS: [&str; 20] = [
    "tracking", "duration", "language",
    "security", "size", "dataRate",
    "timecode", "use", "otherUse",
    "bitsPerSample", "bitsPerPixelStored", "codec",
    "compressionRatio", "quality", "frame",
    "frameRate", "sampleRate", "sampling",
    "sampleCount", "signalFormat",
];

/// Fields accepted by the format section.
pub const FORMAT_PARAMS: [&str; 13] = [
    "annotation", "creatorApp", "creatorLib",
    "creatorLibDate", "creatorLibSettings", "name",
    "encodingDate", "TaggedDate", "commercialName",
    "mimetype", "profile", "settings",
    "version",
];

/// Fields accepted by the codec section, format fields first.
pub const CODEC_PARAMS: [&str; 19] = [
    "annotation", "creatorApp", "creatorLib",
    "creatorLibDate", "creatorLibSettings", "name",
    "encodingDate", "TaggedDate", "commercialName",
    "mimetype", "profile", "settings",
    "version",
    "codecID", "channelCount", "endianness",
    "scanType", "scanOrder", "sign",
];

/// Attribute names accepted by the dimensions element.
pub const DIMENSIONS_PARAMS: [&str; 9] = [
    "DEPTH", "DIAMETER", "GAUGE",
    "HEIGHT", "LENGTH", "NOTE",
    "THICKNESS", "UNITS", "WIDTH",
];

/// Fields accepted by the material section.
pub const MATERIAL_PARAMS: [&str; 9] = [
    "baseMaterial", "binder", "discSurface",
    "oxide", "activeLayer", "reflectiveLayer",
    "stockBrand", "method", "usedSides",
];

/// Attribute names accepted by the variable-rate elements.
pub const VARIABLE_RATE_ATTRS: [&str; 5] = [
    "maximum", "minimum", "mode",
    "nominal", "unit",
];

/// Identifier schemes the location element recognizes in its type attribute.
pub const LOCATION_TYPES: [&str; 5] = ["URN", "URL", "PURL", "HANDLE", "DOI"];

/// Parameter mapping for the dictionary-style section assemblers
///
/// Keys are unique; setting a key again replaces its value. Insertion order
/// is kept so that a validation failure always names the first offending
/// key the caller supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    fields: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.fields.push((key, value));
        }
        self
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Remove a parameter and return its value.
    pub(crate) fn take(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    /// Check whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Number of parameters in the mapping.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Attribute mapping for the variable-rate elements
///
/// Deliberately loose: when the mapping is applied to an element, only the
/// keys named in [`VARIABLE_RATE_ATTRS`] are copied over and anything else
/// is dropped without error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(String, String)>,
}

impl Attrs {
    /// Create an empty attribute mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Get an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Check every key of a parameter mapping against a section whitelist.
///
/// Fails on the first key that is not a whitelist member, before any output
/// node exists.
pub fn check_params(params: &Params, allowed: &[&str]) -> VmdResult<()> {
    for key in params.keys() {
        if !allowed.contains(&key) {
            return Err(VmdError::InvalidParam(format!(
                "parameter '{}' not recognized",
                key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_set_get() {
        let mut params = Params::new();
        params.set("duration", "PT1H30M").set("color", "Color");
        assert_eq!(
            params.get("duration").and_then(|value| value.as_text()),
            Some("PT1H30M")
        );
        assert!(params.has("color"));
        assert!(!params.has("sound"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_params_set_replaces() {
        let mut params = Params::new();
        params.set("duration", "PT1H").set("duration", "PT2H");
        assert_eq!(params.len(), 1);
        assert_eq!(
            params.get("duration").and_then(|value| value.as_text()),
            Some("PT2H")
        );
    }

    #[test]
    fn test_params_keys_insertion_order() {
        let mut params = Params::new();
        params.set("color", "Color").set("duration", "PT1H30M");
        let keys: Vec<_> = params.keys().collect();
        assert_eq!(keys, vec!["color", "duration"]);
    }

    #[test]
    fn test_check_params_ok() {
        let mut params = Params::new();
        params.set("duration", "PT1H30M");
        assert!(check_params(&params, &FILE_DATA_PARAMS).is_ok());
    }

    #[test]
    fn test_check_params_unknown_key() {
        let mut params = Params::new();
        params.set("typo", "value");
        let err = check_params(&params, &FILE_DATA_PARAMS).unwrap_err();
        assert!(err.to_string().contains("'typo'"));
    }

    #[test]
    fn test_check_params_reports_first_offender() {
        let mut params = Params::new();
        params.set("first", "a").set("second", "b");
        let err = check_params(&params, &FORMAT_PARAMS).unwrap_err();
        assert!(err.to_string().contains("'first'"));
    }

    #[test]
    fn test_attrs_set_get() {
        let mut attrs = Attrs::new();
        attrs.set("maximum", "10").set("unit", "Mbps");
        assert_eq!(attrs.get("maximum"), Some("10"));
        assert_eq!(attrs.get("minimum"), None);
    }

    #[test]
    fn test_whitelist_sizes() {
        assert_eq!(FILE_DATA_PARAMS.len(), MEDIA_PARAMS.len() + 17);
        assert_eq!(TRACK_PARAMS.len(), MEDIA_PARAMS.len() + 11);
        assert_eq!(CODEC_PARAMS.len(), FORMAT_PARAMS.len() + 6);
        assert!(FILE_DATA_PARAMS.starts_with(&MEDIA_PARAMS));
        assert!(TRACK_PARAMS.starts_with(&MEDIA_PARAMS));
        assert!(CODEC_PARAMS.starts_with(&FORMAT_PARAMS));
    }
}
