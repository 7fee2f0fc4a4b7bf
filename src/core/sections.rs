//! VideoMD section assemblers
//!
//! One assembler per VideoMD section. The dictionary-style assemblers
//! (fileData, track, format, codec, physicalData, dimensions, material)
//! validate a [`Params`] mapping against their whitelist and emit children
//! in whitelist order. The remaining sections take explicit scalar
//! arguments. All assemblers consume the subtrees they are given.

use crate::core::error::{VmdError, VmdResult};
use crate::core::namespace::{QName, SCHEMA_LOCATION};
use crate::core::node::Element;
use crate::core::params::{
    check_params, Attrs, Params, CODEC_PARAMS, DIMENSIONS_PARAMS, FILE_DATA_PARAMS,
    FORMAT_PARAMS, LOCATION_TYPES, MATERIAL_PARAMS, PHYSICAL_DATA_PARAMS, TRACK_PARAMS,
    VARIABLE_RATE_ATTRS,
};
use crate::types::value::ParamValue;

/// Rate-valued fields that may carry bound and unit attributes.
const RATE_KEYS: [&str; 3] = ["dataRate", "frameRate", "sampleRate"];

/// Subtree-valued fields of the fileData section.
const FILE_DATA_SUBTREES: [&str; 7] = [
    "tracking", "timecode", "messageDigest", "compression", "track", "frame", "format",
];

/// Subtree-valued fields of the track section.
const TRACK_SUBTREES: [&str; 4] = ["tracking", "timecode", "codec", "frame"];

/// Subtree-valued fields of the physicalData section.
const PHYSICAL_DATA_SUBTREES: [&str; 5] = ["dimensions", "dtv", "material", "timecode", "tracking"];

/// Attribute mappings for the rate-valued fields, keyed by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateAttrs {
    /// Attributes for the dataRate element
    pub data_rate: Option<Attrs>,
    /// Attributes for the frameRate element
    pub frame_rate: Option<Attrs>,
    /// Attributes for the sampleRate element
    pub sample_rate: Option<Attrs>,
}

impl RateAttrs {
    fn for_key(&self, key: &str) -> Option<&Attrs> {
        match key {
            "dataRate" => self.data_rate.as_ref(),
            "frameRate" => self.frame_rate.as_ref(),
            "sampleRate" => self.sample_rate.as_ref(),
            _ => None,
        }
    }
}

/// Arguments for [`file_data`] beside the parameter mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDataOpts {
    /// Attribute mappings for the rate-valued fields
    pub rates: RateAttrs,
    /// Type hint for the location element
    pub location_type: Option<String>,
}

/// Arguments for [`track`] beside the parameter mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackOpts {
    /// Value of the num attribute on the track element
    pub num: Option<String>,
    /// Value of the type attribute on the track element
    pub track_type: Option<String>,
    /// Attribute mappings for the rate-valued fields
    pub rates: RateAttrs,
}

/// Content of a frame element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameParams {
    /// Value of the pixelsHorizontal element
    pub pixels_horizontal: Option<String>,
    /// Value of the pixelsVertical element
    pub pixels_vertical: Option<String>,
    /// Value of the frameRate element
    pub frame_rate: Option<String>,
    /// Value of the PAR element
    pub par: Option<String>,
    /// Value of the DAR element
    pub dar: Option<String>,
    /// Value of the rotation element
    pub rotation: Option<String>,
}

/// Content of a videoInfo section.
#[derive(Debug, Default)]
pub struct VideoInfoParams {
    /// Value of the aspectRatio element
    pub aspect_ratio: Option<String>,
    /// Value of the closedCaptioningNote element
    pub closed_captioning_note: Option<String>,
    /// Value of the closedCaptioningType element
    pub closed_captioning_type: Option<String>,
    /// Pre-built dimensions element
    pub dimensions: Option<Element>,
    /// Value of the duration element
    pub duration: Option<String>,
    /// Pre-built frame element
    pub frame: Option<Element>,
    /// Value of the note element
    pub note: Option<String>,
}

/// Top-level sections of a VideoMD document.
#[derive(Debug, Default)]
pub struct VideomdParts {
    /// ANALOGDIGITALFLAG attribute value; "FileDigital" when unset
    pub analog_digital_flag: Option<String>,
    /// Pre-built fileData section
    pub file_data: Option<Element>,
    /// Pre-built physicalData section
    pub physical_data: Option<Element>,
    /// Pre-built videoInfo section
    pub video_info: Option<Element>,
    /// Pre-built calibrationInfo section
    pub calibration_info: Option<Element>,
}

/// Append one leaf child per text value under the parent.
fn append_simple(parent: &mut Element, tag: &str, value: ParamValue) -> VmdResult<()> {
    match value {
        ParamValue::Text(text) => {
            parent.child(tag).set_text(text);
        }
        ParamValue::List(values) => {
            for text in values {
                parent.child(tag).set_text(text);
            }
        }
        ParamValue::Node(_) | ParamValue::Nodes(_) => {
            return Err(VmdError::InvalidParam(format!(
                "parameter '{}' expects a text value, not a pre-built element",
                tag
            )));
        }
    }
    Ok(())
}

/// Attach one or more pre-built subtrees under the parent, moving them in.
fn append_nodes(parent: &mut Element, key: &str, value: ParamValue) -> VmdResult<()> {
    match value {
        ParamValue::Node(node) => parent.append_child(node),
        ParamValue::Nodes(nodes) => {
            for node in nodes {
                parent.append_child(node);
            }
        }
        ParamValue::Text(_) | ParamValue::List(_) => {
            return Err(VmdError::InvalidParam(format!(
                "parameter '{}' expects a pre-built element, not a text value",
                key
            )));
        }
    }
    Ok(())
}

/// Append one optional leaf with the given tag and text.
fn append_text(parent: &mut Element, tag: &str, value: Option<&str>) {
    if let Some(value) = value {
        parent.child(tag).set_text(value);
    }
}

/// Extract a single text value for a field that cannot take anything else.
fn text_value(key: &str, value: ParamValue) -> VmdResult<String> {
    match value {
        ParamValue::Text(text) => Ok(text),
        _ => Err(VmdError::InvalidParam(format!(
            "parameter '{}' expects a single text value",
            key
        ))),
    }
}

/// Build a location element.
///
/// A type hint from [`LOCATION_TYPES`] goes into the type attribute
/// verbatim; any other hint yields `type="OTHER"` with the hint in
/// otherType. Without a hint no attributes are set. Hints are not checked
/// against the schema enumeration beyond this closed set.
pub fn location(value: &str, loc_type: Option<&str>) -> Element {
    let mut element = Element::new("location");
    element.set_text(value);

    match loc_type {
        None => {}
        Some(hint) if LOCATION_TYPES.contains(&hint) => {
            element.set_attribute(QName::unqualified("type"), hint);
        }
        Some(hint) => {
            element.set_attribute(QName::unqualified("type"), "OTHER");
            element.set_attribute(QName::unqualified("otherType"), hint);
        }
    }

    element
}

/// Build a rate-valued element with optional bound and unit attributes.
///
/// Only the keys named in [`VARIABLE_RATE_ATTRS`] are copied from the
/// mapping, in declared order; anything else in it is dropped without
/// error.
pub fn variable_rate(tag: &str, rate: &str, attrs: Option<&Attrs>) -> Element {
    let mut element = Element::new(tag);
    element.set_text(rate);

    if let Some(attrs) = attrs {
        for key in VARIABLE_RATE_ATTRS {
            if let Some(value) = attrs.get(key) {
                element.set_attribute(QName::unqualified(key), value);
            }
        }
    }

    element
}

/// Build a fileData section from a parameter mapping.
///
/// Children are emitted in [`FILE_DATA_PARAMS`] order regardless of the
/// mapping's insertion order. Subtree values are moved into the section.
pub fn file_data(mut params: Params, opts: FileDataOpts) -> VmdResult<Element> {
    check_params(&params, &FILE_DATA_PARAMS)?;

    let mut element = Element::new("fileData");

    for key in FILE_DATA_PARAMS {
        let Some(value) = params.take(key) else {
            continue;
        };

        if FILE_DATA_SUBTREES.contains(&key) {
            append_nodes(&mut element, key, value)?;
        } else if key == "location" {
            let text = text_value(key, value)?;
            element.append_child(location(&text, opts.location_type.as_deref()));
        } else if RATE_KEYS.contains(&key) {
            let text = text_value(key, value)?;
            element.append_child(variable_rate(key, &text, opts.rates.for_key(key)));
        } else {
            append_simple(&mut element, key, value)?;
        }
    }

    Ok(element)
}

/// Build a track section from a parameter mapping.
///
/// The num and type node attributes from the options are set before any
/// child is appended.
pub fn track(mut params: Params, opts: TrackOpts) -> VmdResult<Element> {
    check_params(&params, &TRACK_PARAMS)?;

    let mut element = Element::new("track");

    if let Some(num) = &opts.num {
        element.set_attribute(QName::unqualified("num"), num);
    }
    if let Some(track_type) = &opts.track_type {
        element.set_attribute(QName::unqualified("type"), track_type);
    }

    for key in TRACK_PARAMS {
        let Some(value) = params.take(key) else {
            continue;
        };

        if TRACK_SUBTREES.contains(&key) {
            append_nodes(&mut element, key, value)?;
        } else if RATE_KEYS.contains(&key) {
            let text = text_value(key, value)?;
            element.append_child(variable_rate(key, &text, opts.rates.for_key(key)));
        } else {
            append_simple(&mut element, key, value)?;
        }
    }

    Ok(element)
}

/// Build a format section from a parameter mapping.
pub fn format(mut params: Params) -> VmdResult<Element> {
    check_params(&params, &FORMAT_PARAMS)?;

    let mut element = Element::new("format");

    for key in FORMAT_PARAMS {
        if let Some(value) = params.take(key) {
            append_simple(&mut element, key, value)?;
        }
    }

    Ok(element)
}

/// Build a codec section from a parameter mapping.
pub fn codec(mut params: Params) -> VmdResult<Element> {
    check_params(&params, &CODEC_PARAMS)?;

    let mut element = Element::new("codec");

    for key in CODEC_PARAMS {
        if let Some(value) = params.take(key) {
            append_simple(&mut element, key, value)?;
        }
    }

    Ok(element)
}

/// Build a physicalData section from a parameter mapping.
pub fn physical_data(mut params: Params) -> VmdResult<Element> {
    check_params(&params, &PHYSICAL_DATA_PARAMS)?;

    let mut element = Element::new("physicalData");

    for key in PHYSICAL_DATA_PARAMS {
        let Some(value) = params.take(key) else {
            continue;
        };

        if PHYSICAL_DATA_SUBTREES.contains(&key) {
            append_nodes(&mut element, key, value)?;
        } else {
            append_simple(&mut element, key, value)?;
        }
    }

    Ok(element)
}

/// Build a dimensions element from a parameter mapping.
///
/// Unlike the other sections, every field becomes an attribute on the
/// element itself; dimensions has no text and no children.
pub fn dimensions(mut params: Params) -> VmdResult<Element> {
    check_params(&params, &DIMENSIONS_PARAMS)?;

    let mut element = Element::new("dimensions");

    for key in DIMENSIONS_PARAMS {
        if let Some(value) = params.take(key) {
            let text = text_value(key, value)?;
            element.set_attribute(QName::unqualified(key), text);
        }
    }

    Ok(element)
}

/// Build a material section from a parameter mapping.
pub fn material(mut params: Params) -> VmdResult<Element> {
    check_params(&params, &MATERIAL_PARAMS)?;

    let mut element = Element::new("material");

    for key in MATERIAL_PARAMS {
        if let Some(value) = params.take(key) {
            append_simple(&mut element, key, value)?;
        }
    }

    Ok(element)
}

/// Build a timecode element.
pub fn timecode(
    record_method: Option<&str>,
    timecode_type: Option<&str>,
    initial_value: Option<&str>,
) -> Element {
    let mut element = Element::new("timecode");
    append_text(&mut element, "timecodeRecordMethod", record_method);
    append_text(&mut element, "timecodeType", timecode_type);
    append_text(&mut element, "timecodeInitialValue", initial_value);
    element
}

/// Build a messageDigest element.
pub fn message_digest(datetime: &str, algorithm: &str, digest: &str) -> Element {
    let mut element = Element::new("messageDigest");
    append_text(&mut element, "messageDigestDatetime", Some(datetime));
    append_text(&mut element, "messageDigestAlgorithm", Some(algorithm));
    append_text(&mut element, "messageDigest", Some(digest));
    element
}

/// Build a compression element.
pub fn compression(
    app: Option<&str>,
    app_version: Option<&str>,
    name: Option<&str>,
    quality: Option<&str>,
) -> Element {
    let mut element = Element::new("compression");
    append_text(&mut element, "codecCreatorApp", app);
    append_text(&mut element, "codecCreatorAppVersion", app_version);
    append_text(&mut element, "codecName", name);
    append_text(&mut element, "codecQuality", quality);
    element
}

/// Build a dtv element.
pub fn dtv(
    aspect_ratio: Option<&str>,
    note: Option<&str>,
    resolution: Option<&str>,
    scan: Option<&str>,
) -> Element {
    let mut element = Element::new("dtv");
    append_text(&mut element, "dtvAspectRatio", aspect_ratio);
    append_text(&mut element, "dtvNote", note);
    append_text(&mut element, "dtvResolution", resolution);
    append_text(&mut element, "dtvScan", scan);
    element
}

/// Build a tracking element.
pub fn tracking(tracking_type: Option<&str>, tracking_value: Option<&str>) -> Element {
    let mut element = Element::new("tracking");
    append_text(&mut element, "trackingType", tracking_type);
    append_text(&mut element, "trackingValue", tracking_value);
    element
}

/// Build a frame element.
pub fn frame(params: &FrameParams) -> Element {
    let mut element = Element::new("frame");
    append_text(&mut element, "pixelsHorizontal", params.pixels_horizontal.as_deref());
    append_text(&mut element, "pixelsVertical", params.pixels_vertical.as_deref());
    append_text(&mut element, "frameRate", params.frame_rate.as_deref());
    append_text(&mut element, "PAR", params.par.as_deref());
    append_text(&mut element, "DAR", params.dar.as_deref());
    append_text(&mut element, "rotation", params.rotation.as_deref());
    element
}

/// Build a videoInfo section, consuming its subtrees.
pub fn video_info(params: VideoInfoParams) -> Element {
    let mut element = Element::new("videoInfo");
    append_text(&mut element, "aspectRatio", params.aspect_ratio.as_deref());
    append_text(
        &mut element,
        "closedCaptioningNote",
        params.closed_captioning_note.as_deref(),
    );
    append_text(
        &mut element,
        "closedCaptioningType",
        params.closed_captioning_type.as_deref(),
    );
    if let Some(dimensions) = params.dimensions {
        element.append_child(dimensions);
    }
    append_text(&mut element, "duration", params.duration.as_deref());
    if let Some(frame) = params.frame {
        element.append_child(frame);
    }
    append_text(&mut element, "note", params.note.as_deref());
    element
}

/// Build a calibrationInfo section.
pub fn calibration_info(
    image_data: Option<&str>,
    target_id: Option<&str>,
    target_type: Option<&str>,
) -> Element {
    let mut element = Element::new("calibrationInfo");
    append_text(&mut element, "imageData", image_data);
    append_text(&mut element, "targetId", target_id);
    append_text(&mut element, "targetType", target_type);
    element
}

/// Assemble the VIDEOMD root element.
///
/// Sets the fixed xsi:schemaLocation pair and the ANALOGDIGITALFLAG
/// attribute, then attaches the supplied sections in fileData,
/// physicalData, videoInfo, calibrationInfo order. The flag is taken as
/// given; it is not checked against the schema enumeration.
pub fn create_videomd(parts: VideomdParts) -> Element {
    let mut root = Element::new("VIDEOMD");
    root.set_attribute(QName::xsi("schemaLocation"), SCHEMA_LOCATION);
    root.set_attribute(
        QName::unqualified("ANALOGDIGITALFLAG"),
        parts.analog_digital_flag.as_deref().unwrap_or("FileDigital"),
    );

    if let Some(file_data) = parts.file_data {
        root.append_child(file_data);
    }
    if let Some(physical_data) = parts.physical_data {
        root.append_child(physical_data);
    }
    if let Some(video_info) = parts.video_info {
        root.append_child(video_info);
    }
    if let Some(calibration_info) = parts.calibration_info {
        root.append_child(calibration_info);
    }

    root
}
