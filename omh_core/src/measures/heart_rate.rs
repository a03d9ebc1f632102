//! Heart rate (`omh:heart-rate:1.0`).

use crate::error::require;
use crate::measure::{
    ensure_non_negative, CommonProperties, Measure, MeasureBuilder, DESCRIPTIVE_STATISTIC,
    EFFECTIVE_TIME_FRAME, USER_NOTES,
};
use crate::schema::{parse_optional_schema_value, SchemaId};
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::{DescriptiveStatistic, TemporalRelationshipToPhysicalActivity};
use crate::unit_value::{HeartRateUnitValue, UnitValueDocument};
use crate::units::HeartRateUnit;
use crate::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const HEART_RATE: &str = "heart_rate";
const TEMPORAL_RELATIONSHIP: &str = "temporal_relationship_to_physical_activity";

/// A heart rate reading
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeartRate {
    heart_rate: HeartRateUnitValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temporal_relationship_to_physical_activity: Option<TemporalRelationshipToPhysicalActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl HeartRate {
    pub fn heart_rate(&self) -> &HeartRateUnitValue {
        &self.heart_rate
    }

    pub fn temporal_relationship_to_physical_activity(
        &self,
    ) -> Option<TemporalRelationshipToPhysicalActivity> {
        self.temporal_relationship_to_physical_activity
    }
}

#[derive(Clone, Debug)]
pub struct HeartRateBuilder {
    heart_rate: HeartRateUnitValue,
    temporal_relationship_to_physical_activity: Option<TemporalRelationshipToPhysicalActivity>,
    common: CommonProperties,
}

impl HeartRateBuilder {
    pub fn new(heart_rate: HeartRateUnitValue) -> Result<Self> {
        ensure_non_negative(HEART_RATE, &heart_rate)?;
        Ok(Self {
            heart_rate,
            temporal_relationship_to_physical_activity: None,
            common: CommonProperties::default(),
        })
    }

    /// Shorthand for a value in beats per minute
    pub fn beats_per_minute(value: impl Into<Decimal>) -> Result<Self> {
        Self::new(HeartRateUnitValue::new(HeartRateUnit::BeatsPerMinute, value))
    }

    pub fn temporal_relationship_to_physical_activity(
        mut self,
        relationship: TemporalRelationshipToPhysicalActivity,
    ) -> Self {
        self.temporal_relationship_to_physical_activity = Some(relationship);
        self
    }
}

impl MeasureBuilder for HeartRateBuilder {
    type Measure = HeartRate;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> HeartRate {
        HeartRate {
            heart_rate: self.heart_rate,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            temporal_relationship_to_physical_activity: self
                .temporal_relationship_to_physical_activity,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct HeartRateDocument {
    heart_rate: Option<UnitValueDocument>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    temporal_relationship_to_physical_activity: Option<String>,
    user_notes: Option<String>,
}

impl Measure for HeartRate {
    const SCHEMA_ID: SchemaId = SchemaId::omh("heart-rate", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        HEART_RATE,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        TEMPORAL_RELATIONSHIP,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: HeartRateDocument = serde_json::from_value(value)?;

        let heart_rate = require(HEART_RATE, doc.heart_rate)?.into_unit_value(HEART_RATE)?;
        let mut builder = HeartRateBuilder::new(heart_rate)?.common(CommonProperties::from_document(
            doc.effective_time_frame,
            doc.descriptive_statistic,
            doc.user_notes,
        )?);

        if let Some(relationship) = parse_optional_schema_value(
            TEMPORAL_RELATIONSHIP,
            doc.temporal_relationship_to_physical_activity,
        )? {
            builder = builder.temporal_relationship_to_physical_activity(relationship);
        }

        Ok(builder.build())
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
