//! Minutes of moderate activity (`omh:minutes-moderate-activity:1.0`).
//!
//! The duration vocabulary is shared with other measures, but this one only
//! accepts minutes.

use crate::error::require;
use crate::measure::{
    ensure_non_negative, ensure_unit_in, CommonProperties, Measure, MeasureBuilder,
    DESCRIPTIVE_STATISTIC, EFFECTIVE_TIME_FRAME, USER_NOTES,
};
use crate::schema::SchemaId;
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::DescriptiveStatistic;
use crate::unit_value::{DurationUnitValue, UnitValueDocument};
use crate::units::DurationUnit;
use crate::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MINUTES_MODERATE_ACTIVITY: &str = "minutes_moderate_activity";
const ALLOWED_UNITS: &[DurationUnit] = &[DurationUnit::Minute];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MinutesModerateActivity {
    minutes_moderate_activity: DurationUnitValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl MinutesModerateActivity {
    pub fn minutes_moderate_activity(&self) -> &DurationUnitValue {
        &self.minutes_moderate_activity
    }
}

#[derive(Clone, Debug)]
pub struct MinutesModerateActivityBuilder {
    minutes_moderate_activity: DurationUnitValue,
    common: CommonProperties,
}

impl MinutesModerateActivityBuilder {
    /// Fails unless the value is a non-negative number of minutes
    pub fn new(minutes_moderate_activity: DurationUnitValue) -> Result<Self> {
        ensure_unit_in(
            MINUTES_MODERATE_ACTIVITY,
            &minutes_moderate_activity,
            ALLOWED_UNITS,
        )?;
        ensure_non_negative(MINUTES_MODERATE_ACTIVITY, &minutes_moderate_activity)?;
        Ok(Self {
            minutes_moderate_activity,
            common: CommonProperties::default(),
        })
    }

    pub fn minutes(value: impl Into<Decimal>) -> Result<Self> {
        Self::new(DurationUnitValue::new(DurationUnit::Minute, value))
    }
}

impl MeasureBuilder for MinutesModerateActivityBuilder {
    type Measure = MinutesModerateActivity;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> MinutesModerateActivity {
        MinutesModerateActivity {
            minutes_moderate_activity: self.minutes_moderate_activity,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MinutesModerateActivityDocument {
    minutes_moderate_activity: Option<UnitValueDocument>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    user_notes: Option<String>,
}

impl Measure for MinutesModerateActivity {
    const SCHEMA_ID: SchemaId = SchemaId::omh("minutes-moderate-activity", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        MINUTES_MODERATE_ACTIVITY,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: MinutesModerateActivityDocument = serde_json::from_value(value)?;

        let minutes = require(MINUTES_MODERATE_ACTIVITY, doc.minutes_moderate_activity)?
            .into_unit_value(MINUTES_MODERATE_ACTIVITY)?;

        Ok(MinutesModerateActivityBuilder::new(minutes)?
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};

    #[test]
    fn test_hours_are_rejected() {
        let err = MinutesModerateActivityBuilder::new(DurationUnitValue::new(DurationUnit::Hour, 1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(err, Error::InvalidArgument { ref field, ref reason }
            if field == "minutes_moderate_activity.unit" && reason.contains("\"h\"")));
    }

    #[test]
    fn test_every_non_minute_unit_is_rejected() {
        for unit in [
            DurationUnit::Second,
            DurationUnit::Hour,
            DurationUnit::Day,
            DurationUnit::Week,
        ] {
            assert!(MinutesModerateActivityBuilder::new(DurationUnitValue::new(unit, 10)).is_err());
        }
    }

    #[test]
    fn test_build_with_minutes() {
        let value = DurationUnitValue::new(DurationUnit::Minute, 10);
        let measure = MinutesModerateActivityBuilder::new(value.clone())
            .unwrap()
            .descriptive_statistic(DescriptiveStatistic::Maximum)
            .user_notes("feeling fine")
            .build();

        assert_eq!(measure.minutes_moderate_activity(), &value);
        assert_eq!(measure.effective_time_frame(), None);
        assert_eq!(measure.descriptive_statistic(), Some(DescriptiveStatistic::Maximum));
        assert_eq!(measure.user_notes(), Some("feeling fine"));
    }

    #[test]
    fn test_document_with_wrong_unit_fails_like_builder() {
        let err = MinutesModerateActivity::from_json_value(serde_json::json!({
            "minutes_moderate_activity": { "value": 1, "unit": "h" }
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
