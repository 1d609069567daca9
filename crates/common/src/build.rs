use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::Selection;

/// A server-defined verdict for one compatibility check
///
/// Only the literal string `OK` counts as passing; anything else is a failure
/// or warning shown as-is. Non-string verdicts are kept as their JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Verdict(pub String);

impl Verdict {
    pub const OK: &'static str = "OK";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn ok() -> Self {
        Self(Self::OK.to_string())
    }

    pub fn is_ok(&self) -> bool {
        self.0 == Self::OK
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<serde_json::Value> for Verdict {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(tag) => Self(tag),
            other => Self(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Verdict::from)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check name -> verdict, in the order the backend reported them
pub type Compatibility = IndexMap<String, Verdict>;

/// Deserialize `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Totals and verdicts computed by the backend for one selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_price: f64,

    /// Estimated draw in watts
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_power: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub compatibility: Compatibility,
}

/// Body of `POST /api/builds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBuildRequest {
    pub name: String,

    #[serde(flatten)]
    pub selection: Selection,
}

impl CreateBuildRequest {
    pub fn new(name: impl Into<String>, selection: Selection) -> Self {
        Self {
            name: name.into(),
            selection,
        }
    }
}

/// Response from `POST /api/builds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveBuildResponse {
    /// Id of the created build, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub summary: BuildSummary,
}

/// A persisted build: the selection plus the totals at save time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBuild {
    pub id: String,

    pub name: String,

    #[serde(flatten)]
    pub selection: Selection,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_price: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_power: u32,
}
