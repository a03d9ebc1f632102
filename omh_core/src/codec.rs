//! Reading and writing measure documents.
//!
//! Encoding writes properties in each measure's declared order and omits
//! absent optional properties. Decoding parses the text, checks that it is a
//! JSON object, optionally rejects unknown top-level properties, and then
//! rebuilds the measure through its builder.

use crate::config::{Config, UnknownFieldPolicy};
use crate::measure::Measure;
use crate::measures::{AnyMeasure, MeasureKind};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Encoder/decoder for measure documents
#[derive(Clone, Debug)]
pub struct MeasureCodec {
    pretty: bool,
    indent: usize,
    unknown_fields: UnknownFieldPolicy,
}

impl Default for MeasureCodec {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl MeasureCodec {
    pub fn from_config(config: &Config) -> Self {
        Self {
            pretty: config.output.pretty,
            indent: config.output.indent,
            unknown_fields: config.input.unknown_fields,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn to_value<T: Serialize>(&self, measure: &T) -> Result<Value> {
        Ok(serde_json::to_value(measure)?)
    }

    pub fn to_string<T: Serialize>(&self, measure: &T) -> Result<String> {
        if !self.pretty {
            return Ok(serde_json::to_string(measure)?);
        }

        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        measure.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::Other(format!("encoded document is not UTF-8: {e}")))
    }

    pub fn from_str<M: Measure>(&self, text: &str) -> Result<M> {
        self.from_value(serde_json::from_str(text)?)
    }

    pub fn from_value<M: Measure>(&self, value: Value) -> Result<M> {
        self.check_properties(&value, M::PROPERTY_NAMES)?;
        let measure = M::from_json_value(value)?;
        tracing::debug!("Decoded {} document", M::SCHEMA_ID);
        Ok(measure)
    }

    /// Decode a document whose measure type is only known at runtime
    pub fn from_str_as(&self, kind: MeasureKind, text: &str) -> Result<AnyMeasure> {
        let value: Value = serde_json::from_str(text)?;
        self.check_properties(&value, kind.property_names())?;
        let measure = AnyMeasure::from_json_value(kind, value)?;
        tracing::debug!("Decoded {} document", kind.schema_id());
        Ok(measure)
    }

    fn check_properties(&self, value: &Value, known: &[&str]) -> Result<()> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::Structural("a measure document must be a JSON object".into()))?;

        if self.unknown_fields == UnknownFieldPolicy::Reject {
            if let Some(name) = object.keys().find(|name| !known.contains(&name.as_str())) {
                return Err(Error::UnknownField {
                    field: name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Encode compactly
pub fn to_string<T: Serialize>(measure: &T) -> Result<String> {
    MeasureCodec::default().with_pretty(false).to_string(measure)
}

/// Encode with four-space indentation
pub fn to_string_pretty<T: Serialize>(measure: &T) -> Result<String> {
    MeasureCodec::default().with_pretty(true).to_string(measure)
}

/// Decode, ignoring unknown properties
pub fn from_str<M: Measure>(text: &str) -> Result<M> {
    MeasureCodec::default().from_str(text)
}
