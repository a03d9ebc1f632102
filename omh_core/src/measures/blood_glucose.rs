//! Blood glucose (`omh:blood-glucose:1.0`).

use crate::error::require;
use crate::measure::{
    ensure_non_negative, CommonProperties, Measure, MeasureBuilder, DESCRIPTIVE_STATISTIC,
    EFFECTIVE_TIME_FRAME, USER_NOTES,
};
use crate::schema::{parse_optional_schema_value, SchemaId};
use crate::time::{TimeFrame, TimeFrameDocument};
use crate::types::{
    BloodSpecimenType, DescriptiveStatistic, TemporalRelationshipToMeal,
    TemporalRelationshipToSleep,
};
use crate::unit_value::{BloodGlucoseUnitValue, UnitValueDocument};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BLOOD_GLUCOSE: &str = "blood_glucose";
const BLOOD_SPECIMEN_TYPE: &str = "blood_specimen_type";
const TEMPORAL_RELATIONSHIP_TO_MEAL: &str = "temporal_relationship_to_meal";
const TEMPORAL_RELATIONSHIP_TO_SLEEP: &str = "temporal_relationship_to_sleep";

/// A blood glucose concentration
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BloodGlucose {
    blood_glucose: BloodGlucoseUnitValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_time_frame: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive_statistic: Option<DescriptiveStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blood_specimen_type: Option<BloodSpecimenType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temporal_relationship_to_meal: Option<TemporalRelationshipToMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temporal_relationship_to_sleep: Option<TemporalRelationshipToSleep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_notes: Option<String>,
}

impl BloodGlucose {
    pub fn blood_glucose(&self) -> &BloodGlucoseUnitValue {
        &self.blood_glucose
    }

    pub fn blood_specimen_type(&self) -> Option<BloodSpecimenType> {
        self.blood_specimen_type
    }

    pub fn temporal_relationship_to_meal(&self) -> Option<TemporalRelationshipToMeal> {
        self.temporal_relationship_to_meal
    }

    pub fn temporal_relationship_to_sleep(&self) -> Option<TemporalRelationshipToSleep> {
        self.temporal_relationship_to_sleep
    }
}

#[derive(Clone, Debug)]
pub struct BloodGlucoseBuilder {
    blood_glucose: BloodGlucoseUnitValue,
    blood_specimen_type: Option<BloodSpecimenType>,
    temporal_relationship_to_meal: Option<TemporalRelationshipToMeal>,
    temporal_relationship_to_sleep: Option<TemporalRelationshipToSleep>,
    common: CommonProperties,
}

impl BloodGlucoseBuilder {
    pub fn new(blood_glucose: BloodGlucoseUnitValue) -> Result<Self> {
        ensure_non_negative(BLOOD_GLUCOSE, &blood_glucose)?;
        Ok(Self {
            blood_glucose,
            blood_specimen_type: None,
            temporal_relationship_to_meal: None,
            temporal_relationship_to_sleep: None,
            common: CommonProperties::default(),
        })
    }

    pub fn blood_specimen_type(mut self, specimen_type: BloodSpecimenType) -> Self {
        self.blood_specimen_type = Some(specimen_type);
        self
    }

    pub fn temporal_relationship_to_meal(mut self, relationship: TemporalRelationshipToMeal) -> Self {
        self.temporal_relationship_to_meal = Some(relationship);
        self
    }

    pub fn temporal_relationship_to_sleep(
        mut self,
        relationship: TemporalRelationshipToSleep,
    ) -> Self {
        self.temporal_relationship_to_sleep = Some(relationship);
        self
    }
}

impl MeasureBuilder for BloodGlucoseBuilder {
    type Measure = BloodGlucose;

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn build(self) -> BloodGlucose {
        BloodGlucose {
            blood_glucose: self.blood_glucose,
            effective_time_frame: self.common.effective_time_frame,
            descriptive_statistic: self.common.descriptive_statistic,
            blood_specimen_type: self.blood_specimen_type,
            temporal_relationship_to_meal: self.temporal_relationship_to_meal,
            temporal_relationship_to_sleep: self.temporal_relationship_to_sleep,
            user_notes: self.common.user_notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BloodGlucoseDocument {
    blood_glucose: Option<UnitValueDocument>,
    effective_time_frame: Option<TimeFrameDocument>,
    descriptive_statistic: Option<String>,
    blood_specimen_type: Option<String>,
    temporal_relationship_to_meal: Option<String>,
    temporal_relationship_to_sleep: Option<String>,
    user_notes: Option<String>,
}

impl Measure for BloodGlucose {
    const SCHEMA_ID: SchemaId = SchemaId::omh("blood-glucose", 1, 0);

    const PROPERTY_NAMES: &'static [&'static str] = &[
        BLOOD_GLUCOSE,
        EFFECTIVE_TIME_FRAME,
        DESCRIPTIVE_STATISTIC,
        BLOOD_SPECIMEN_TYPE,
        TEMPORAL_RELATIONSHIP_TO_MEAL,
        TEMPORAL_RELATIONSHIP_TO_SLEEP,
        USER_NOTES,
    ];

    fn from_json_value(value: Value) -> Result<Self> {
        let doc: BloodGlucoseDocument = serde_json::from_value(value)?;

        let blood_glucose =
            require(BLOOD_GLUCOSE, doc.blood_glucose)?.into_unit_value(BLOOD_GLUCOSE)?;
        let mut builder = BloodGlucoseBuilder::new(blood_glucose)?.common(
            CommonProperties::from_document(
                doc.effective_time_frame,
                doc.descriptive_statistic,
                doc.user_notes,
            )?,
        );

        if let Some(specimen) =
            parse_optional_schema_value(BLOOD_SPECIMEN_TYPE, doc.blood_specimen_type)?
        {
            builder = builder.blood_specimen_type(specimen);
        }
        if let Some(meal) =
            parse_optional_schema_value(TEMPORAL_RELATIONSHIP_TO_MEAL, doc.temporal_relationship_to_meal)?
        {
            builder = builder.temporal_relationship_to_meal(meal);
        }
        if let Some(sleep) = parse_optional_schema_value(
            TEMPORAL_RELATIONSHIP_TO_SLEEP,
            doc.temporal_relationship_to_sleep,
        )? {
            builder = builder.temporal_relationship_to_sleep(sleep);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::BloodGlucoseUnit;
    use crate::ErrorKind;

    #[test]
    fn test_specimen_type_uses_schema_value() {
        let glucose = BloodGlucoseBuilder::new(BloodGlucoseUnitValue::new(
            BloodGlucoseUnit::MilligramsPerDeciliter,
            110,
        ))
        .unwrap()
        .blood_specimen_type(BloodSpecimenType::WholeBlood)
        .temporal_relationship_to_meal(TemporalRelationshipToMeal::AfterBreakfast)
        .temporal_relationship_to_sleep(TemporalRelationshipToSleep::OnWaking)
        .build();

        let json = serde_json::to_string(&glucose).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"blood_glucose":{"value":110,"unit":"mg/dL"},"#,
                r#""blood_specimen_type":"whole blood","#,
                r#""temporal_relationship_to_meal":"after breakfast","#,
                r#""temporal_relationship_to_sleep":"on waking"}"#
            )
        );

        let decoded = BloodGlucose::from_json_value(serde_json::from_str(&json).unwrap()).unwrap();
        assert_eq!(decoded, glucose);
        assert_eq!(decoded.blood_specimen_type(), Some(BloodSpecimenType::WholeBlood));
    }

    #[test]
    fn test_programmatic_name_is_not_accepted() {
        let err = BloodGlucose::from_json_value(serde_json::json!({
            "blood_glucose": { "value": 5.5, "unit": "mmol/L" },
            "blood_specimen_type": "WHOLE_BLOOD"
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
    }
}
