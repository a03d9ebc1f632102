//! Body weight (`omh:body-weight:1.0`).

use crate::error::require;
use crate::measure::{
    ensure_non_negative, CommonProperties, Measure, MeasureBuilder, DESCRIPTIVE_STATISTIC,
    EFFECTIVE_TIME_FRAME, USER_NOTES,
};
use crate::schema::SchemaId;
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::DescriptiveStatistic;
use crate::unit_value::{MassUnitValue, UnitValueDocument};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BODY_WEIGHT: &str = "body_weight";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyWeight {
    body_weight: MassUnitValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl BodyWeight {
    pub fn body_weight(&self) -> &MassUnitValue {
        &self.body_weight
    }
}

#[derive(Clone, Debug)]
pub struct BodyWeightBuilder {
    body_weight: MassUnitValue,
    common: CommonProperties,
}

impl BodyWeightBuilder {
    pub fn new(body_weight: MassUnitValue) -> Result<Self> {
        ensure_non_negative(BODY_WEIGHT, &body_weight)?;
        Ok(Self {
            body_weight,
            common: CommonProperties::default(),
        })
    }
}

impl MeasureBuilder for BodyWeightBuilder {
    type Measure = BodyWeight;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> BodyWeight {
        BodyWeight {
            body_weight: self.body_weight,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BodyWeightDocument {
    body_weight: Option<UnitValueDocument>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    user_notes: Option<String>,
}

impl Measure for BodyWeight {
    const SCHEMA_ID: SchemaId = SchemaId::omh("body-weight", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        BODY_WEIGHT,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: BodyWeightDocument = serde_json::from_value(value)?;

        let body_weight = require(BODY_WEIGHT, doc.body_weight)?.into_unit_value(BODY_WEIGHT)?;

        Ok(BodyWeightBuilder::new(body_weight)?
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
