//! Body height (`omh:body-height:1.0`).

use crate::error::require;
use crate::measure::{
    ensure_non_negative, CommonProperties, Measure, MeasureBuilder, DESCRIPTIVE_STATISTIC,
    EFFECTIVE_TIME_FRAME, USER_NOTES,
};
use crate::schema::SchemaId;
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::DescriptiveStatistic;
use crate::unit_value::{LengthUnitValue, UnitValueDocument};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BODY_HEIGHT: &str = "body_height";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyHeight {
    body_height: LengthUnitValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl BodyHeight {
    pub fn body_height(&self) -> &LengthUnitValue {
        &self.body_height
    }
}

#[derive(Clone, Debug)]
pub struct BodyHeightBuilder {
    body_height: LengthUnitValue,
    common: CommonProperties,
}

impl BodyHeightBuilder {
    pub fn new(body_height: LengthUnitValue) -> Result<Self> {
        ensure_non_negative(BODY_HEIGHT, &body_height)?;
        Ok(Self {
            body_height,
            common: CommonProperties::default(),
        })
    }
}

impl MeasureBuilder for BodyHeightBuilder {
    type Measure = BodyHeight;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> BodyHeight {
        BodyHeight {
            body_height: self.body_height,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BodyHeightDocument {
    body_height: Option<UnitValueDocument>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    user_notes: Option<String>,
}

impl Measure for BodyHeight {
    const SCHEMA_ID: SchemaId = SchemaId::omh("body-height", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        BODY_HEIGHT,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: BodyHeightDocument = serde_json::from_value(value)?;

        let body_height = require(BODY_HEIGHT, doc.body_height)?.into_unit_value(BODY_HEIGHT)?;

        Ok(BodyHeightBuilder::new(body_height)?
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
