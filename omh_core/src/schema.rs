//! Schema identifiers and closed schema vocabularies.
//!
//! A vocabulary is a Rust enum whose members each declare the exact string
//! used for them in documents. The reverse index (string -> member) is built
//! once on first lookup and only read afterwards.

use crate::{Error, Result};
use std::fmt;
use std::hash::Hash;

/// A closed set of values with a canonical document string per member.
pub trait SchemaEnumValue:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Sized + 'static
{
    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// The string written to documents for this member
    fn schema_value(self) -> &'static str;

    /// Reverse lookup; `None` for any string outside the vocabulary
    fn find_by_schema_value(value: &str) -> Option<Self>;
}

/// Declares a vocabulary enum together with its schema strings.
///
/// Expands to the enum itself, a [`SchemaEnumValue`] impl backed by a lazily
/// built reverse index, `Display`, and a `Serialize` impl that writes the
/// schema string.
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $schema:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::schema::SchemaEnumValue for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn schema_value(self) -> &'static str {
                match self {
                    $( $name::$variant => $schema ),+
                }
            }

            fn find_by_schema_value(value: &str) -> Option<Self> {
                static INDEX: ::once_cell::sync::Lazy<
                    ::std::collections::HashMap<&'static str, $name>,
                > = ::once_cell::sync::Lazy::new(|| {
                    <$name as $crate::schema::SchemaEnumValue>::ALL
                        .iter()
                        .map(|member| {
                            (
                                <$name as $crate::schema::SchemaEnumValue>::schema_value(*member),
                                *member,
                            )
                        })
                        .collect()
                });
                INDEX.get(value).copied()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<$name as $crate::schema::SchemaEnumValue>::schema_value(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(
                    <$name as $crate::schema::SchemaEnumValue>::schema_value(*self),
                )
            }
        }
    };
}

pub(crate) use schema_enum;

/// Resolve a document string against a vocabulary, naming `field` on failure
pub(crate) fn parse_schema_value<E: SchemaEnumValue>(field: &str, value: &str) -> Result<E> {
    E::find_by_schema_value(value).ok_or_else(|| Error::UnknownSchemaValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Same as [`parse_schema_value`] for optional properties
pub(crate) fn parse_optional_schema_value<E: SchemaEnumValue>(
    field: &str,
    value: Option<String>,
) -> Result<Option<E>> {
    value
        .map(|value| parse_schema_value(field, &value))
        .transpose()
}

/// Major/minor version of a schema
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Identifies the JSON schema a measure conforms to (e.g. `omh:heart-rate:1.0`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SchemaId {
    pub namespace: &'static str,
    pub name: &'static str,
    pub version: SchemaVersion,
}

impl SchemaId {
    pub const OMH_NAMESPACE: &'static str = "omh";

    /// A schema in the `omh` namespace
    pub const fn omh(name: &'static str, major: u32, minor: u32) -> Self {
        Self {
            namespace: Self::OMH_NAMESPACE,
            name,
            version: SchemaVersion { major, minor },
        }
    }

    /// Relative path of the schema file, as expected by a schema validator
    pub fn schema_filename(&self) -> String {
        format!(
            "schema/{}/{}-{}.json",
            self.namespace, self.name, self.version
        )
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.name, self.version)
    }
}

/// Checks that a vocabulary maps members to strings one-to-one.
#[cfg(test)]
pub(crate) fn assert_schema_values_bijective<E: SchemaEnumValue>() {
    let mut seen = std::collections::HashSet::new();
    for member in E::ALL {
        let value = member.schema_value();
        assert!(seen.insert(value), "duplicate schema value {value:?}");
        assert_eq!(E::find_by_schema_value(value), Some(*member));
        assert_eq!(member.to_string(), value);
    }
    assert_eq!(E::find_by_schema_value(""), None);
    assert_eq!(E::find_by_schema_value("not a schema value"), None);
}
