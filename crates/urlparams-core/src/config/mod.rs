//! Plugin options: the raw string form supplied by the host and the
//! normalized form the enricher reads.

mod file;
mod white_list;

pub use file::{config_path, load_from_path, load_or_init};
pub use white_list::WhiteList;

use serde::{Deserialize, Serialize};

/// Options exactly as the host stores them: every value is a string.
///
/// Boolean options are `"true"` / `"false"` choices; anything other than the
/// literal `"true"` reads as false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_as_user_properties: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_as_initial_user_properties: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Comma-separated parameter names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_list: Option<String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            ignore_case: Some("false".to_string()),
            set_as_user_properties: Some("false".to_string()),
            set_as_initial_user_properties: Some("false".to_string()),
            prefix: Some(String::new()),
            suffix: Some(String::new()),
            white_list: Some(String::new()),
        }
    }
}

/// Normalized options, built once per configuration load and read-only after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParamsConfig {
    pub ignore_case: bool,
    pub set_as_user_properties: bool,
    pub set_as_initial_user_properties: bool,
    pub prefix: String,
    pub suffix: String,
    pub white_list: WhiteList,
}

impl ParamsConfig {
    /// Normalizes raw options. Total: there is no invalid input.
    pub fn from_raw(raw: &RawConfig) -> Self {
        Self {
            ignore_case: is_true(raw.ignore_case.as_deref()),
            set_as_user_properties: is_true(raw.set_as_user_properties.as_deref()),
            set_as_initial_user_properties: is_true(raw.set_as_initial_user_properties.as_deref()),
            prefix: raw.prefix.clone().unwrap_or_default(),
            suffix: raw.suffix.clone().unwrap_or_default(),
            white_list: raw
                .white_list
                .as_deref()
                .map(WhiteList::parse)
                .unwrap_or_default(),
        }
    }

    /// Output key for a whitelisted name: `prefix + name + suffix`.
    pub fn property_key(&self, name: &str) -> String {
        let mut key = String::with_capacity(self.prefix.len() + name.len() + self.suffix.len());
        key.push_str(&self.prefix);
        key.push_str(name);
        key.push_str(&self.suffix);
        key
    }
}

impl From<&RawConfig> for ParamsConfig {
    fn from(raw: &RawConfig) -> Self {
        Self::from_raw(raw)
    }
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}
