//! Decoder for SeeYou CUP waypoint files.
//!
//! Decoding runs in two stages: [`BaseDecoder`] turns text lines into flat
//! [`BaseRecord`]s and [`SemanticMapper`] turns those into [`Waypoint`]s with
//! classifiers, runways and frequencies.

#![forbid(unsafe_code)]

pub mod base;
pub mod cup_file;
pub mod error;
pub mod fields;
pub mod geo;
pub mod quantity;
pub mod style;
pub mod waypoint;

pub use base::{decode_line, BaseDecoder, BaseRecord, BaseRecordBuilder};
pub use cup_file::CupFile;
pub use error::{Error, ErrorKind, Result};
pub use geo::{decode_latitude, decode_longitude, LatLon};
pub use quantity::{decode_elevation, decode_runway_length, Quantity};
pub use style::{Classifier, Surface};
pub use waypoint::{map_record, Frequency, Runway, SemanticMapper, Waypoint};
