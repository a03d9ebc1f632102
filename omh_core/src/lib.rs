#![forbid(unsafe_code)]

//! Typed data model for Open mHealth measures.
//!
//! This crate provides:
//! - Unit vocabularies and typed unit values
//! - Time descriptors (instants and intervals)
//! - Measure types with validating builders
//! - Canonical JSON encoding and decoding of measure documents
//! - Configuration and logging setup for the tools built on top

pub mod error;
pub mod schema;
pub mod units;
pub mod types;
pub mod unit_value;
pub mod time;
pub mod measure;
pub mod measures;
pub mod codec;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use schema::{SchemaEnumValue, SchemaId, SchemaVersion};
pub use units::*;
pub use types::*;
pub use unit_value::{
    BloodGlucoseUnitValue, DurationUnitValue, HeartRateUnitValue, LengthUnitValue, MassUnitValue,
    TypedUnitValue, VolumeUnitValue,
};
pub use time::{TimeFrame, TimeInterval};
pub use measure::{CommonProperties, Measure, MeasureBuilder};
pub use measures::*;
pub use codec::MeasureCodec;
pub use config::{Config, UnknownFieldPolicy};
