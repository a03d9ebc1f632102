//! Typed unit values: a decimal quantity tagged with a unit from one vocabulary.
//!
//! Values are always held as normalized exact decimals, so `60`, `60.0` and
//! `"60"` all produce the same value and serialize as `60`. No unit
//! conversion is ever performed.

use crate::error::require;
use crate::schema::{parse_schema_value, SchemaEnumValue};
use crate::units::{
    BloodGlucoseUnit, DurationUnit, HeartRateUnit, LengthUnit, MassUnit, VolumeUnit,
};
use crate::{Error, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An immutable `(unit, value)` pair
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypedUnitValue<U> {
    #[serde(serialize_with = "serialize_decimal")]
    value: Decimal,
    unit: U,
}

pub type HeartRateUnitValue = TypedUnitValue<HeartRateUnit>;
pub type DurationUnitValue = TypedUnitValue<DurationUnit>;
pub type LengthUnitValue = TypedUnitValue<LengthUnit>;
pub type VolumeUnitValue = TypedUnitValue<VolumeUnit>;
pub type MassUnitValue = TypedUnitValue<MassUnit>;
pub type BloodGlucoseUnitValue = TypedUnitValue<BloodGlucoseUnit>;

impl<U: SchemaEnumValue> TypedUnitValue<U> {
    /// Build from an integer or an exact decimal
    pub fn new(unit: U, value: impl Into<Decimal>) -> Self {
        Self {
            unit,
            value: value.into().normalize(),
        }
    }

    /// Build from a float; fails on NaN, infinities and out-of-range values
    pub fn from_f64(unit: U, value: f64) -> Result<Self> {
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| Error::invalid("value", format!("{value} is not a finite decimal")))?;
        Ok(Self::new(unit, decimal))
    }

    /// Build from decimal text such as `"60"`, `"1.5"` or `"15e-1"`
    pub fn parse(unit: U, value: &str) -> Result<Self> {
        Ok(Self::new(unit, parse_decimal("value", value)?))
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }
}

/// Values are only comparable when they share a unit.
impl<U: SchemaEnumValue> PartialOrd for TypedUnitValue<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit == other.unit {
            Some(self.value.cmp(&other.value))
        } else {
            None
        }
    }
}

impl<U: SchemaEnumValue> fmt::Display for TypedUnitValue<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Parse decimal text without rounding; text needing more precision than a
/// `Decimal` holds is rejected
pub(crate) fn parse_decimal(field: &str, text: &str) -> Result<Decimal> {
    Decimal::from_str_exact(text)
        .ok()
        .or_else(|| {
            // Exponent forms and zero-padded text go through the rounding
            // parsers, and are kept only when no significant digit was lost.
            Decimal::from_scientific(text)
                .or_else(|_| Decimal::from_str(text))
                .ok()
                .filter(|d| significant_digits(&d.to_string()) == significant_digits(text))
        })
        .map(|d| d.normalize())
        .ok_or_else(|| {
            Error::invalid(field, format!("\"{text}\" is not an exactly representable decimal"))
        })
}

/// Mantissa digits with leading and trailing zeros removed
fn significant_digits(text: &str) -> String {
    let mantissa = text
        .split(|c| c == 'e' || c == 'E')
        .next()
        .unwrap_or_default();
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    digits.trim_matches('0').to_string()
}

/// Write a decimal as a bare JSON number, keeping every digit
pub(crate) fn serialize_decimal<S>(value: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = serde_json::Number::from_str(&value.normalize().to_string())
        .map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

pub(crate) fn decimal_from_number(field: &str, number: &serde_json::Number) -> Result<Decimal> {
    parse_decimal(field, &number.to_string())
}

/// Wire shape of a unit value before validation
#[derive(Debug, Deserialize)]
pub(crate) struct UnitValueDocument {
    value: Option<serde_json::Number>,
    unit: Option<String>,
}

impl UnitValueDocument {
    pub(crate) fn into_unit_value<U: SchemaEnumValue>(self, field: &str) -> Result<TypedUnitValue<U>> {
        let value_field = format!("{field}.value");
        let unit_field = format!("{field}.unit");

        let value = require(&value_field, self.value)?;
        let unit = require(&unit_field, self.unit)?;
        let unit = parse_schema_value::<U>(&unit_field, &unit)?;

        Ok(TypedUnitValue::new(unit, decimal_from_number(&value_field, &value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_equivalent_numeric_inputs_are_equal() {
        let from_int = HeartRateUnitValue::new(HeartRateUnit::BeatsPerMinute, 60);
        let from_float = HeartRateUnitValue::from_f64(HeartRateUnit::BeatsPerMinute, 60.0).unwrap();
        let from_text = HeartRateUnitValue::parse(HeartRateUnit::BeatsPerMinute, "60").unwrap();
        let from_scaled = HeartRateUnitValue::new(HeartRateUnit::BeatsPerMinute, Decimal::new(600, 1));

        assert_eq!(from_int, from_float);
        assert_eq!(from_int, from_text);
        assert_eq!(from_int, from_scaled);
        assert_eq!(from_scaled.value().to_string(), "60");
    }

    #[test]
    fn test_units_distinguish_values() {
        let minutes = DurationUnitValue::new(DurationUnit::Minute, 10);
        let hours = DurationUnitValue::new(DurationUnit::Hour, 10);
        assert_ne!(minutes, hours);
        assert_eq!(minutes.partial_cmp(&hours), None);
    }

    #[test]
    fn test_ordering_within_a_unit() {
        let short = DurationUnitValue::new(DurationUnit::Minute, 10);
        let long = DurationUnitValue::parse(DurationUnit::Minute, "10.5").unwrap();
        assert!(short < long);
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        let err = LengthUnitValue::from_f64(LengthUnit::Mile, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(LengthUnitValue::from_f64(LengthUnit::Mile, f64::INFINITY).is_err());
    }

    #[test]
    fn test_unparseable_text_is_rejected() {
        let err = LengthUnitValue::parse(LengthUnit::Mile, "one").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            LengthUnitValue::parse(LengthUnit::Mile, "15e-1").unwrap(),
            LengthUnitValue::from_f64(LengthUnit::Mile, 1.5).unwrap()
        );
    }

    #[test]
    fn test_values_are_never_rounded() {
        let digits = "0.123456789012345678901234567891234";
        let err = MassUnitValue::parse(MassUnit::Kilogram, digits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err.to_string(),
            format!("value \"{digits}\" is not an exactly representable decimal")
        );

        let doc: UnitValueDocument =
            serde_json::from_str(&format!(r#"{{"value": {digits}, "unit": "kg"}}"#)).unwrap();
        let err = doc.into_unit_value::<MassUnit>("body_weight").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().starts_with("body_weight.value "));

        for text in ["1e30", "1e-40", "1.23456789012345678901234567891e2"] {
            assert!(MassUnitValue::parse(MassUnit::Kilogram, text).is_err(), "{text}");
        }
    }

    #[test]
    fn test_exact_values_in_any_notation_are_kept() {
        let expected = MassUnitValue::parse(MassUnit::Kilogram, "1.5").unwrap();
        for text in ["15e-1", "1.50000000000000000000000000000000"] {
            assert_eq!(MassUnitValue::parse(MassUnit::Kilogram, text).unwrap(), expected, "{text}");
        }

        let max_digits = "0.1234567890123456789012345678";
        let value = MassUnitValue::parse(MassUnit::Kilogram, max_digits).unwrap();
        assert_eq!(value.value().to_string(), max_digits);
    }

    #[test]
    fn test_negative_detection() {
        assert!(VolumeUnitValue::new(VolumeUnit::Liter, -1).is_negative());
        assert!(!VolumeUnitValue::new(VolumeUnit::Liter, 0).is_negative());
        assert!(!VolumeUnitValue::parse(VolumeUnit::Liter, "-0").unwrap().is_negative());
    }

    #[test]
    fn test_serializes_value_then_unit() {
        let distance = LengthUnitValue::from_f64(LengthUnit::Mile, 1.5).unwrap();
        let json = serde_json::to_string(&distance).unwrap();
        assert_eq!(json, r#"{"value":1.5,"unit":"mi"}"#);

        let volume = VolumeUnitValue::new(VolumeUnit::FluidOunce, 12);
        let json = serde_json::to_string(&volume).unwrap();
        assert_eq!(json, r#"{"value":12,"unit":"fl oz"}"#);
    }

    #[test]
    fn test_document_conversion() {
        let doc: UnitValueDocument =
            serde_json::from_str(r#"{"value": 60.0, "unit": "beats/min"}"#).unwrap();
        let value: HeartRateUnitValue = doc.into_unit_value("heart_rate").unwrap();
        assert_eq!(value, HeartRateUnitValue::new(HeartRateUnit::BeatsPerMinute, 60));

        let doc: UnitValueDocument = serde_json::from_str(r#"{"value": 60}"#).unwrap();
        let err = doc.into_unit_value::<HeartRateUnit>("heart_rate").unwrap_err();
        assert_eq!(err.to_string(), "heart_rate.unit must be provided");

        let doc: UnitValueDocument =
            serde_json::from_str(r#"{"value": 60, "unit": "bpm"}"#).unwrap();
        let err = doc.into_unit_value::<HeartRateUnit>("heart_rate").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
    }

    #[test]
    fn test_high_precision_values_survive() {
        let doc: UnitValueDocument =
            serde_json::from_str(r#"{"value": 0.1234567890123456789, "unit": "kg"}"#).unwrap();
        let value: MassUnitValue = doc.into_unit_value("body_weight").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"value":0.1234567890123456789,"unit":"kg"}"#);
    }
}
