//! Step count (`omh:step-count:1.0`).

use crate::error::require;
use crate::measure::{
    CommonProperties, Measure, MeasureBuilder, DESCRIPTIVE_STATISTIC, EFFECTIVE_TIME_FRAME,
    USER_NOTES,
};
use crate::schema::SchemaId;
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::DescriptiveStatistic;
use crate::unit_value::{decimal_from_number, serialize_decimal};
use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const STEP_COUNT: &str = "step_count";

/// Number of steps taken; a bare count with no unit
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepCount {
    #[serde(serialize_with = "serialize_decimal")]
    step_count: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl StepCount {
    pub fn step_count(&self) -> Decimal {
        self.step_count
    }
}

#[derive(Clone, Debug)]
pub struct StepCountBuilder {
    step_count: Decimal,
    common: CommonProperties,
}

impl StepCountBuilder {
    /// Fails unless the count is a non-negative whole number
    pub fn new(step_count: impl Into<Decimal>) -> Result<Self> {
        let step_count = step_count.into().normalize();
        if step_count.is_sign_negative() && !step_count.is_zero() {
            return Err(Error::invalid(STEP_COUNT, "must be non-negative"));
        }
        if !step_count.fract().is_zero() {
            return Err(Error::invalid(STEP_COUNT, "must be a whole number"));
        }
        Ok(Self {
            step_count,
            common: CommonProperties::default(),
        })
    }
}

impl MeasureBuilder for StepCountBuilder {
    type Measure = StepCount;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> StepCount {
        StepCount {
            step_count: self.step_count,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StepCountDocument {
    step_count: Option<serde_json::Number>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    user_notes: Option<String>,
}

impl Measure for StepCount {
    const SCHEMA_ID: SchemaId = SchemaId::omh("step-count", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        STEP_COUNT,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: StepCountDocument = serde_json::from_value(value)?;

        let step_count = decimal_from_number(STEP_COUNT, &require(STEP_COUNT, doc.step_count)?)?;

        Ok(StepCountBuilder::new(step_count)?
            .common(CommonProperties::from_document(
                doc.effective_time_frame,
                doc.descriptive_statistic,
                doc.user_notes,
            )?)
            .build())
    }

    fn effective_time_frame(&self) -> Option<&TimeFrame> {
        self.effective_time_frame.as_ref()
    }

    fn descriptive_statistic(&self) -> Option<DescriptiveStatistic> {
        self.descriptive_statistic
    }

    fn user_notes(&self) -> Option<&str> {
        self.user_notes.as_deref()
    }
}
