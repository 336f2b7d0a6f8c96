//! Event record handed over by the ingestion host.
//!
//! Only `properties` is interpreted; every other field the host sends is kept
//! as-is and written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property holding the full page-view URL.
pub const CURRENT_URL: &str = "$current_url";
/// Nested mapping of person properties to overwrite.
pub const SET: &str = "$set";
/// Nested mapping of person properties to set only if not already set.
pub const SET_ONCE: &str = "$set_once";
/// Key prefix used for entries written into `$set_once`.
pub const INITIAL_PREFIX: &str = "initial_";

/// A tracked event. `properties` may be missing entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Event {
    /// The `$current_url` value, if present as a non-empty string.
    pub fn current_url(&self) -> Option<&str> {
        self.properties.as_ref().and_then(current_url)
    }
}

/// Reads `$current_url` from a property map. Non-string and empty values
/// count as absent.
pub fn current_url(properties: &Map<String, Value>) -> Option<&str> {
    properties
        .get(CURRENT_URL)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
