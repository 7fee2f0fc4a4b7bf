//! VideoMD core module
//!
//! This module contains the element data model, parameter validation, the
//! section assemblers, and XML serialization.

pub mod error;
pub mod namespace;
pub mod node;
pub mod params;
pub mod sections;
pub mod serializer;

pub use error::{VmdError, VmdResult};
pub use namespace::{ns, QName, SCHEMA_LOCATION};
pub use node::Element;
pub use params::{
    check_params, Attrs, Params, CODEC_PARAMS, DIMENSIONS_PARAMS, FILE_DATA_PARAMS,
    FORMAT_PARAMS, LOCATION_TYPES, MATERIAL_PARAMS, MEDIA_PARAMS, PHYSICAL_DATA_PARAMS,
    TRACK_PARAMS, VARIABLE_RATE_ATTRS,
};
pub use sections::{
    calibration_info, codec, compression, create_videomd, dimensions, dtv, file_data, format,
    frame, location, material, message_digest, physical_data, timecode, track, tracking,
    variable_rate, video_info, FileDataOpts, FrameParams, RateAttrs, TrackOpts, VideoInfoParams,
    VideomdParts,
};
pub use serializer::XmlSerializer;
