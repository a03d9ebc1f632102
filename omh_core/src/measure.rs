//! The contract shared by every measure type and its builder.
//!
//! A builder receives its required values up front and rejects invalid ones
//! immediately, so a builder that exists can always be built. Optional values
//! are set through chained setters; the last write to a field wins.

use crate::schema::{parse_optional_schema_value, SchemaEnumValue, SchemaId};
use crate::time::{time_frame_from_document, TimeFrame, TimeFrameDocument};
use crate::types::DescriptiveStatistic;
use crate::unit_value::TypedUnitValue;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

pub const EFFECTIVE_TIME_FRAME: &str = "effective_time_frame";
pub const DESCRIPTIVE_STATISTIC: &str = "descriptive_statistic";
pub const USER_NOTES: &str = "user_notes";

/// A schema-versioned, immutable observation
pub trait Measure: Serialize + Clone + PartialEq + Debug + Sized {
    /// The schema every serialized instance conforms to
    const SCHEMA_ID: SchemaId;

    /// Every top-level property the schema defines, in serialization order
    const PROPERTY_NAMES: &'static [&'static str];

    /// Rebuild a measure from a parsed document, validating it exactly as the
    /// builder would
    fn from_json_value(value: Value) -> Result<Self>;

    fn effective_time_frame(&self) -> Option<&TimeFrame>;

    fn descriptive_statistic(&self) -> Option<DescriptiveStatistic>;

    fn user_notes(&self) -> Option<&str>;
}

/// Optional properties every measure carries
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommonProperties {
    pub(crate) effective_time_frame: Option<TimeFrame>,
    pub(crate) descriptive_statistic: Option<DescriptiveStatistic>,
    pub(crate) user_notes: Option<String>,
}

impl CommonProperties {
    pub(crate) fn from_document(
        effective_time_frame: Option<TimeFrameDocument>,
        descriptive_statistic: Option<String>,
        user_notes: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            effective_time_frame: time_frame_from_document(
                EFFECTIVE_TIME_FRAME,
                effective_time_frame,
            )?,
            descriptive_statistic: parse_optional_schema_value(
                DESCRIPTIVE_STATISTIC,
                descriptive_statistic,
            )?,
            user_notes,
        })
    }
}

/// Staged construction of a [`Measure`]
pub trait MeasureBuilder: Sized {
    type Measure: Measure;

    /// Access to the optional properties shared by all measures
    fn common_mut(&mut self) -> &mut CommonProperties;

    /// Assemble the measure; every value was validated when it was set
    fn build(self) -> Self::Measure;

    fn effective_time_frame(mut self, time_frame: impl Into<TimeFrame>) -> Self {
        self.common_mut().effective_time_frame = Some(time_frame.into());
        self
    }

    fn descriptive_statistic(mut self, statistic: DescriptiveStatistic) -> Self {
        self.common_mut().descriptive_statistic = Some(statistic);
        self
    }

    fn user_notes(mut self, notes: impl Into<String>) -> Self {
        self.common_mut().user_notes = Some(notes.into());
        self
    }

    /// Replace all shared optional properties at once
    fn common(mut self, common: CommonProperties) -> Self {
        *self.common_mut() = common;
        self
    }
}

pub(crate) fn ensure_non_negative<U: SchemaEnumValue>(
    field: &str,
    value: &TypedUnitValue<U>,
) -> Result<()> {
    if value.is_negative() {
        return Err(Error::invalid(field, "must be non-negative"));
    }
    Ok(())
}

/// Restrict a value to a subset of its unit vocabulary
pub(crate) fn ensure_unit_in<U: SchemaEnumValue>(
    field: &str,
    value: &TypedUnitValue<U>,
    allowed: &[U],
) -> Result<()> {
    if allowed.contains(&value.unit()) {
        return Ok(());
    }
    let expected = allowed
        .iter()
        .map(|unit| format!("\"{unit}\""))
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::invalid(
        format!("{field}.unit"),
        format!("\"{}\" is not allowed, expected {expected}", value.unit()),
    ))
}
