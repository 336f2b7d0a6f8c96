//! Option schema the host shows to operators when configuring the enricher.

use serde::Serialize;

/// Kind of input the host renders for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Choice,
}

/// One recognized option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigField {
    pub key: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<&'static [&'static str]>,
    pub default: &'static str,
    pub hint: &'static str,
    pub required: bool,
}

const BOOL_CHOICES: &[&str] = &["true", "false"];

const fn string_field(key: &'static str, name: &'static str, hint: &'static str) -> ConfigField {
    ConfigField {
        key,
        name,
        field_type: FieldType::String,
        choices: None,
        default: "",
        hint,
        required: false,
    }
}

const fn choice_field(key: &'static str, name: &'static str, hint: &'static str) -> ConfigField {
    ConfigField {
        key,
        name,
        field_type: FieldType::Choice,
        choices: Some(BOOL_CHOICES),
        default: "false",
        hint,
        required: false,
    }
}

/// The six recognized options, keyed by their raw (camelCase) names.
pub static FIELDS: [ConfigField; 6] = [
    string_field(
        "whiteList",
        "URL query parameters to convert",
        "Comma separated list of query parameter names to copy into event properties.",
    ),
    string_field(
        "prefix",
        "Prefix",
        "Added in front of every property name, e.g. `utm_`.",
    ),
    string_field(
        "suffix",
        "Suffix",
        "Added after every property name.",
    ),
    choice_field(
        "ignoreCase",
        "Ignore the case of URL parameters",
        "Match query parameter names case-insensitively. Property names keep the casing from the list.",
    ),
    choice_field(
        "setAsUserProperties",
        "Add to user properties",
        "Also write each value into `$set`.",
    ),
    choice_field(
        "setAsInitialUserProperties",
        "Add to user initial properties",
        "Also write each value into `$set_once` as `initial_<name>`.",
    ),
];

/// Schema document in the host's `{ "config": [...] }` shape.
pub fn schema_json() -> serde_json::Value {
    serde_json::json!({ "config": FIELDS })
}
