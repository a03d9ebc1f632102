//! Physical activity (`omh:physical-activity:1.0`).

use crate::error::require;
use crate::measure::{
    ensure_non_negative, CommonProperties, Measure, MeasureBuilder, DESCRIPTIVE_STATISTIC,
    EFFECTIVE_TIME_FRAME, USER_NOTES,
};
use crate::schema::{parse_optional_schema_value, SchemaId};
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::{DescriptiveStatistic, SelfReportedIntensity};
use crate::unit_value::{LengthUnitValue, UnitValueDocument};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ACTIVITY_NAME: &str = "activity_name";
const DISTANCE: &str = "distance";
const REPORTED_ACTIVITY_INTENSITY: &str = "reported_activity_intensity";

/// A named bout of physical activity
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhysicalActivity {
    activity_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<LengthUnitValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reported_activity_intensity: Option<SelfReportedIntensity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl PhysicalActivity {
    pub fn activity_name(&self) -> &str {
        &self.activity_name
    }

    pub fn distance(&self) -> Option<&LengthUnitValue> {
        self.distance.as_ref()
    }

    pub fn reported_activity_intensity(&self) -> Option<SelfReportedIntensity> {
        self.reported_activity_intensity
    }
}

#[derive(Clone, Debug)]
pub struct PhysicalActivityBuilder {
    activity_name: String,
    distance: Option<LengthUnitValue>,
    reported_activity_intensity: Option<SelfReportedIntensity>,
    common: CommonProperties,
}

impl PhysicalActivityBuilder {
    /// Fails if the activity name is empty
    pub fn new(activity_name: impl Into<String>) -> Result<Self> {
        let activity_name = activity_name.into();
        if activity_name.is_empty() {
            return Err(Error::invalid(ACTIVITY_NAME, "must be non-empty"));
        }
        Ok(Self {
            activity_name,
            distance: None,
            reported_activity_intensity: None,
            common: CommonProperties::default(),
        })
    }

    pub fn distance(mut self, distance: LengthUnitValue) -> Result<Self> {
        ensure_non_negative(DISTANCE, &distance)?;
        self.distance = Some(distance);
        Ok(self)
    }

    pub fn reported_activity_intensity(mut self, intensity: SelfReportedIntensity) -> Self {
        self.reported_activity_intensity = Some(intensity);
        self
    }
}

impl MeasureBuilder for PhysicalActivityBuilder {
    type Measure = PhysicalActivity;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> PhysicalActivity {
        PhysicalActivity {
            activity_name: self.activity_name,
            distance: self.distance,
            reported_activity_intensity: self.reported_activity_intensity,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PhysicalActivityDocument {
    activity_name: Option<String>,
    distance: Option<UnitValueDocument>,
    reported_activity_intensity: Option<String>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    user_notes: Option<String>,
}

impl Measure for PhysicalActivity {
    const SCHEMA_ID: SchemaId = SchemaId::omh("physical-activity", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        ACTIVITY_NAME,
        DISTANCE,
        REPORTED_ACTIVITY_INTENSITY,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: PhysicalActivityDocument = serde_json::from_value(value)?;

        let mut builder = PhysicalActivityBuilder::new(require(ACTIVITY_NAME, doc.activity_name)?)?
            .common(CommonProperties::from_document(
                doc.effective_time_frame,
                doc.descriptive_statistic,
                doc.user_notes,
            )?);

        if let Some(distance) = doc.distance {
            builder = builder.distance(distance.into_unit_value(DISTANCE)?)?;
        }
        if let Some(intensity) =
            parse_optional_schema_value(REPORTED_ACTIVITY_INTENSITY, doc.reported_activity_intensity)?
        {
            builder = builder.reported_activity_intensity(intensity);
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
