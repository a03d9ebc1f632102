//! The catalog of measure types.
//!
//! Each submodule holds one measure, its builder, and its document mapping.
//! [`MeasureKind`] and [`AnyMeasure`] let callers pick a measure type by
//! schema name at runtime.

pub mod blood_glucose;
pub mod body_height;
pub mod body_weight;
pub mod heart_rate;
pub mod minutes_moderate_activity;
pub mod physical_activity;
pub mod sleep_duration;
pub mod step_count;

pub use blood_glucose::{BloodGlucose, BloodGlucoseBuilder};
pub use body_height::{BodyHeight, BodyHeightBuilder};
pub use body_weight::{BodyWeight, BodyWeightBuilder};
pub use heart_rate::{HeartRate, HeartRateBuilder};
pub use minutes_moderate_activity::{MinutesModerateActivity, MinutesModerateActivityBuilder};
pub use physical_activity::{PhysicalActivity, PhysicalActivityBuilder};
pub use sleep_duration::{SleepDuration, SleepDurationBuilder};
pub use step_count::{StepCount, StepCountBuilder};

use crate::measure::Measure;
use crate::schema::{schema_enum, SchemaId};
use crate::Result;
use serde::Serialize;
use serde_json::Value;

schema_enum! {
    /// Measure types, keyed by schema name
    pub enum MeasureKind {
        BloodGlucose => "blood-glucose",
        BodyHeight => "body-height",
        BodyWeight => "body-weight",
        HeartRate => "heart-rate",
        MinutesModerateActivity => "minutes-moderate-activity",
        PhysicalActivity => "physical-activity",
        SleepDuration => "sleep-duration",
        StepCount => "step-count",
    }
}

impl MeasureKind {
    pub fn schema_id(self) -> SchemaId {
        match self {
            MeasureKind::BloodGlucose => BloodGlucose::SCHEMA_ID,
            MeasureKind::BodyHeight => BodyHeight::SCHEMA_ID,
            MeasureKind::BodyWeight => BodyWeight::SCHEMA_ID,
            MeasureKind::HeartRate => HeartRate::SCHEMA_ID,
            MeasureKind::MinutesModerateActivity => MinutesModerateActivity::SCHEMA_ID,
            MeasureKind::PhysicalActivity => PhysicalActivity::SCHEMA_ID,
            MeasureKind::SleepDuration => SleepDuration::SCHEMA_ID,
            MeasureKind::StepCount => StepCount::SCHEMA_ID,
        }
    }

    pub fn property_names(self) -> &'static [&'static str] {
        match self {
            MeasureKind::BloodGlucose => BloodGlucose::PROPERTY_NAMES,
            MeasureKind::BodyHeight => BodyHeight::PROPERTY_NAMES,
            MeasureKind::BodyWeight => BodyWeight::PROPERTY_NAMES,
            MeasureKind::HeartRate => HeartRate::PROPERTY_NAMES,
            MeasureKind::MinutesModerateActivity => MinutesModerateActivity::PROPERTY_NAMES,
            MeasureKind::PhysicalActivity => PhysicalActivity::PROPERTY_NAMES,
            MeasureKind::SleepDuration => SleepDuration::PROPERTY_NAMES,
            MeasureKind::StepCount => StepCount::PROPERTY_NAMES,
        }
    }
}

/// Any supported measure
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyMeasure {
    BloodGlucose(BloodGlucose),
    BodyHeight(BodyHeight),
    BodyWeight(BodyWeight),
    HeartRate(HeartRate),
    MinutesModerateActivity(MinutesModerateActivity),
    PhysicalActivity(PhysicalActivity),
    SleepDuration(SleepDuration),
    StepCount(StepCount),
}

impl AnyMeasure {
    /// Decode a document as the given kind of measure
    pub fn from_json_value(kind: MeasureKind, value: Value) -> Result<Self> {
        Ok(match kind {
            MeasureKind::BloodGlucose => AnyMeasure::BloodGlucose(BloodGlucose::from_json_value(value)?),
            MeasureKind::BodyHeight => AnyMeasure::BodyHeight(BodyHeight::from_json_value(value)?),
            MeasureKind::BodyWeight => AnyMeasure::BodyWeight(BodyWeight::from_json_value(value)?),
            MeasureKind::HeartRate => AnyMeasure::HeartRate(HeartRate::from_json_value(value)?),
            MeasureKind::MinutesModerateActivity => {
                AnyMeasure::MinutesModerateActivity(MinutesModerateActivity::from_json_value(value)?)
            }
            MeasureKind::PhysicalActivity => {
                AnyMeasure::PhysicalActivity(PhysicalActivity::from_json_value(value)?)
            }
            MeasureKind::SleepDuration => {
                AnyMeasure::SleepDuration(SleepDuration::from_json_value(value)?)
            }
            MeasureKind::StepCount => AnyMeasure::StepCount(StepCount::from_json_value(value)?),
        })
    }

    pub fn kind(&self) -> MeasureKind {
        match self {
            AnyMeasure::BloodGlucose(_) => MeasureKind::BloodGlucose,
            AnyMeasure::BodyHeight(_) => MeasureKind::BodyHeight,
            AnyMeasure::BodyWeight(_) => MeasureKind::BodyWeight,
            AnyMeasure::HeartRate(_) => MeasureKind::HeartRate,
            AnyMeasure::MinutesModerateActivity(_) => MeasureKind::MinutesModerateActivity,
            AnyMeasure::PhysicalActivity(_) => MeasureKind::PhysicalActivity,
            AnyMeasure::SleepDuration(_) => MeasureKind::SleepDuration,
            AnyMeasure::StepCount(_) => MeasureKind::StepCount,
        }
    }

    pub fn schema_id(&self) -> SchemaId {
        self.kind().schema_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{assert_schema_values_bijective, SchemaEnumValue};

    #[test]
    fn test_kind_names_match_schema_ids() {
        assert_schema_values_bijective::<MeasureKind>();
        for kind in MeasureKind::ALL {
            assert_eq!(kind.schema_id().name, kind.schema_value());
        }
    }

    #[test]
    fn test_property_names_are_unique() {
        for kind in MeasureKind::ALL {
            let names = kind.property_names();
            let unique: std::collections::HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len(), "{kind}");
            assert!(names.contains(&"effective_time_frame"));
            assert!(names.contains(&"user_notes"));
        }
    }

    #[test]
    fn test_decode_by_kind() {
        let measure = AnyMeasure::from_json_value(
            MeasureKind::HeartRate,
            serde_json::json!({ "heart_rate": { "value": 60, "unit": "beats/min" } }),
        )
        .unwrap();
        assert_eq!(measure.kind(), MeasureKind::HeartRate);
        assert_eq!(measure.schema_id().to_string(), "omh:heart-rate:1.0");
        assert_eq!(
            serde_json::to_string(&measure).unwrap(),
            r#"{"heart_rate":{"value":60,"unit":"beats/min"}}"#
        );
    }
}
