//! # Country and Language Records
//!
//! Wire shapes exchanged with the country service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decode a string that the service may send as `null` or leave out
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A country record; `name` is the natural key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub capital: String,
}

impl Country {
    pub fn new(name: impl Into<String>, capital: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
        }
    }
}

/// A language record
///
/// Only `name` is interpreted. Every other field the service sends is kept
/// as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}
