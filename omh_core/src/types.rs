//! Shared descriptive vocabularies used by several measures.

use crate::schema::schema_enum;

schema_enum! {
    /// Statistic applied when a value summarizes several readings
    pub enum DescriptiveStatistic {
        Average => "average",
        Count => "count",
        Maximum => "maximum",
        Median => "median",
        Minimum => "minimum",
        StandardDeviation => "standard deviation",
        Sum => "sum",
        Variance => "variance",
    }
}

schema_enum! {
    pub enum PartOfDay {
        Morning => "morning",
        Afternoon => "afternoon",
        Evening => "evening",
        Night => "night",
    }
}

schema_enum! {
    /// Type of blood specimen analyzed
    pub enum BloodSpecimenType {
        WholeBlood => "whole blood",
        Plasma => "plasma",
        Serum => "serum",
    }
}

schema_enum! {
    pub enum TemporalRelationshipToPhysicalActivity {
        AtRest => "at rest",
        Active => "active",
        BeforeExercise => "before exercise",
        AfterExercise => "after exercise",
        DuringExercise => "during exercise",
    }
}

schema_enum! {
    pub enum TemporalRelationshipToMeal {
        Fasting => "fasting",
        NotFasting => "not fasting",
        BeforeMeal => "before meal",
        AfterMeal => "after meal",
        BeforeBreakfast => "before breakfast",
        AfterBreakfast => "after breakfast",
        BeforeLunch => "before lunch",
        AfterLunch => "after lunch",
        BeforeDinner => "before dinner",
        AfterDinner => "after dinner",
    }
}

schema_enum! {
    pub enum TemporalRelationshipToSleep {
        BeforeSleeping => "before sleeping",
        DuringSleep => "during sleep",
        OnWaking => "on waking",
    }
}

schema_enum! {
    /// Intensity of an activity as reported by the person doing it
    pub enum SelfReportedIntensity {
        Light => "light",
        Moderate => "moderate",
        Vigorous => "vigorous",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{assert_schema_values_bijective, SchemaEnumValue};

    #[test]
    fn test_vocabularies_are_bijective() {
        assert_schema_values_bijective::<DescriptiveStatistic>();
        assert_schema_values_bijective::<PartOfDay>();
        assert_schema_values_bijective::<BloodSpecimenType>();
        assert_schema_values_bijective::<TemporalRelationshipToPhysicalActivity>();
        assert_schema_values_bijective::<TemporalRelationshipToMeal>();
        assert_schema_values_bijective::<TemporalRelationshipToSleep>();
        assert_schema_values_bijective::<SelfReportedIntensity>();
    }

    #[test]
    fn test_multi_word_values_are_space_separated() {
        assert_eq!(BloodSpecimenType::WholeBlood.schema_value(), "whole blood");
        assert_eq!(
            BloodSpecimenType::find_by_schema_value("whole_blood"),
            None
        );
        assert_eq!(
            DescriptiveStatistic::find_by_schema_value("standard deviation"),
            Some(DescriptiveStatistic::StandardDeviation)
        );
    }
}
