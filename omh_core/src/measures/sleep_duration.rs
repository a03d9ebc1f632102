//! Sleep duration (`omh:sleep-duration:1.0`).

use crate::error::require;
use crate::measure::{
    ensure_non_negative, CommonProperties, Measure, MeasureBuilder, DESCRIPTIVE_STATISTIC,
    EFFECTIVE_TIME_FRAME, USER_NOTES,
};
use crate::schema::SchemaId;
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::DescriptiveStatistic;
use crate::unit_value::{DurationUnitValue, UnitValueDocument};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SLEEP_DURATION: &str = "sleep_duration";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SleepDuration {
    sleep_duration: DurationUnitValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl SleepDuration {
    pub fn sleep_duration(&self) -> &DurationUnitValue {
        &self.sleep_duration
    }
}

#[derive(Clone, Debug)]
pub struct SleepDurationBuilder {
    sleep_duration: DurationUnitValue,
    common: CommonProperties,
}

impl SleepDurationBuilder {
    pub fn new(sleep_duration: DurationUnitValue) -> Result<Self> {
        ensure_non_negative(SLEEP_DURATION, &sleep_duration)?;
        Ok(Self {
            sleep_duration,
            common: CommonProperties::default(),
        })
    }
}

impl MeasureBuilder for SleepDurationBuilder {
    type Measure = SleepDuration;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> SleepDuration {
        SleepDuration {
            sleep_duration: self.sleep_duration,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SleepDurationDocument {
    sleep_duration: Option<UnitValueDocument>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    user_notes: Option<String>,
}

impl Measure for SleepDuration {
    const SCHEMA_ID: SchemaId = SchemaId::omh("sleep-duration", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        SLEEP_DURATION,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: SleepDurationDocument = serde_json::from_value(value)?;

        let sleep_duration = require(SLEEP_DURATION, doc.sleep_duration)?.into_unit_value(SLEEP_DURATION)?;

        Ok(SleepDurationBuilder::new(sleep_duration)?
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
