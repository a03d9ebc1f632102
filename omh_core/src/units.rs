//! Unit vocabularies.
//!
//! Each enum is one quantity family. The schema strings are the unit
//! abbreviations used by the Open mHealth unit-value schemas.

use crate::schema::schema_enum;

schema_enum! {
    /// Units for heart rate
    pub enum HeartRateUnit {
        BeatsPerMinute => "beats/min",
    }
}

schema_enum! {
    /// Units of time
    pub enum DurationUnit {
        Picosecond => "ps",
        Nanosecond => "ns",
        Microsecond => "us",
        Millisecond => "ms",
        Second => "sec",
        Minute => "min",
        Hour => "h",
        Day => "d",
        Week => "wk",
        Month => "Mo",
        Year => "yr",
    }
}

schema_enum! {
    /// Units of length
    pub enum LengthUnit {
        Femtometer => "fm",
        Picometer => "pm",
        Nanometer => "nm",
        Micrometer => "um",
        Millimeter => "mm",
        Centimeter => "cm",
        Meter => "m",
        Kilometer => "km",
        Inch => "in",
        Foot => "ft",
        Yard => "yd",
        Mile => "mi",
    }
}

schema_enum! {
    /// Units of volume
    pub enum VolumeUnit {
        Femtoliter => "fL",
        Picoliter => "pL",
        Nanoliter => "nL",
        Microliter => "uL",
        Milliliter => "mL",
        Centiliter => "cL",
        Deciliter => "dL",
        Liter => "L",
        Kiloliter => "kL",
        CubicInch => "in^3",
        CubicFoot => "ft^3",
        Cup => "cup",
        FluidOunce => "fl oz",
        Pint => "pt",
        Quart => "qt",
        Gallon => "gal",
    }
}

schema_enum! {
    /// Units of mass
    pub enum MassUnit {
        Femtogram => "fg",
        Picogram => "pg",
        Nanogram => "ng",
        Microgram => "ug",
        Milligram => "mg",
        Gram => "g",
        Kilogram => "kg",
        /// Metric ton
        Megagram => "Mg",
        Ounce => "oz",
        Pound => "lb",
        /// Short ton
        Ton => "ton",
    }
}

schema_enum! {
    /// Concentration units for blood glucose
    pub enum BloodGlucoseUnit {
        MilligramsPerDeciliter => "mg/dL",
        MillimolesPerLiter => "mmol/L",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{assert_schema_values_bijective, SchemaEnumValue};

    #[test]
    fn test_unit_vocabularies_are_bijective() {
        assert_schema_values_bijective::<HeartRateUnit>();
        assert_schema_values_bijective::<DurationUnit>();
        assert_schema_values_bijective::<LengthUnit>();
        assert_schema_values_bijective::<VolumeUnit>();
        assert_schema_values_bijective::<MassUnit>();
        assert_schema_values_bijective::<BloodGlucoseUnit>();
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(DurationUnit::find_by_schema_value("Mo"), Some(DurationUnit::Month));
        assert_eq!(DurationUnit::find_by_schema_value("mo"), None);
        assert_eq!(VolumeUnit::find_by_schema_value("L"), Some(VolumeUnit::Liter));
        assert_eq!(VolumeUnit::find_by_schema_value("l"), None);
    }

    #[test]
    fn test_programmatic_names_are_not_schema_values() {
        assert_eq!(DurationUnit::find_by_schema_value("Minute"), None);
        assert_eq!(HeartRateUnit::find_by_schema_value("BeatsPerMinute"), None);
        assert_eq!(HeartRateUnit::BeatsPerMinute.schema_value(), "beats/min");
    }
}
