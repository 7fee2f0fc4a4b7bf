//! VideoMD metadata construction library.
//!
//! This crate builds in-memory element trees conforming to the Library of
//! Congress [VideoMD](https://www.loc.gov/standards/vmdvmd/) schema, a
//! standard for describing the technical characteristics of video files
//! and physical video carriers. Digital-preservation pipelines attach the
//! resulting records to archived video assets.
//!
//! Sections are assembled bottom-up: leaf sections first, then the
//! sections that embed them, and finally the `VIDEOMD` root. The
//! dictionary-style assemblers validate every parameter key against the
//! section's whitelist and always emit children in whitelist declaration
//! order, so output structure never depends on insertion order.
//!
//! # Quick Start
//!
//! ```rust
//! use videomd::{create_videomd, file_data, FileDataOpts, Params, VideomdParts, XmlSerializer};
//!
//! let mut params = Params::new();
//! params
//!     .set("duration", "PT1H30M")
//!     .set("bitsPerSample", "24")
//!     .set("color", "Color");
//!
//! let file_data = file_data(params, FileDataOpts::default())?;
//! let videomd = create_videomd(VideomdParts {
//!     file_data: Some(file_data),
//!     ..Default::default()
//! });
//!
//! let xml = XmlSerializer::new().serialize(&videomd)?;
//! assert!(xml.contains("<vmd:VIDEOMD"));
//! assert!(xml.contains("<vmd:duration>PT1H30M</vmd:duration>"));
//! # Ok::<(), videomd::VmdError>(())
//! ```
//!
//! The crate only assembles and serializes trees. Structural and semantic
//! validation is the job of an external XSD validator run on the
//! serialized output.
//!
//! # Module Structure
//!
//! - [`core`] - Element data model, section assemblers, serialization
//! - [`types`] - Parameter value types

pub mod core;
pub mod types;

pub use crate::core::{
    calibration_info, check_params, codec, compression, create_videomd, dimensions, dtv,
    file_data, format, frame, location, material, message_digest, ns, physical_data, timecode,
    track, tracking, variable_rate, video_info, Attrs, Element, FileDataOpts, FrameParams,
    Params, QName, RateAttrs, TrackOpts, VideoInfoParams, VideomdParts, VmdError, VmdResult,
    XmlSerializer, CODEC_PARAMS, DIMENSIONS_PARAMS, FILE_DATA_PARAMS, FORMAT_PARAMS,
    LOCATION_TYPES, MATERIAL_PARAMS, MEDIA_PARAMS, PHYSICAL_DATA_PARAMS, SCHEMA_LOCATION,
    TRACK_PARAMS, VARIABLE_RATE_ATTRS,
};
pub use crate::types::ParamValue;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
