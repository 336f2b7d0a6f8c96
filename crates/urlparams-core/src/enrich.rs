//! Per-event enrichment: copy whitelisted query parameters of `$current_url`
//! into the event's properties.
//!
//! For every whitelisted name with a non-empty value in the URL:
//!
//! - `properties[prefix + name + suffix] = value`
//! - with `set_as_user_properties`: `properties.$set[key] = value`
//! - with `set_as_initial_user_properties`: `properties.$set_once["initial_" + key] = value`
//!
//! The output key always uses the whitelist's own spelling, even when the
//! match was case-insensitive.

use serde_json::{Map, Value};

use crate::config::ParamsConfig;
use crate::error::EnrichError;
use crate::event::{self, Event, INITIAL_PREFIX, SET, SET_ONCE};
use crate::query::QueryParams;

/// Enriches `event` in place and hands the same event back.
///
/// An event without `properties`, or without a usable `$current_url`, is
/// returned untouched. A `$current_url` that does not parse is an error and
/// leaves the event unmodified.
pub fn process_event(mut event: Event, cfg: &ParamsConfig) -> Result<Event, EnrichError> {
    if let Some(properties) = event.properties.as_mut() {
        enrich_properties(properties, cfg)?;
    }
    Ok(event)
}

/// Enriches a property map in place. Returns how many whitelisted names
/// were written.
pub fn enrich_properties(
    properties: &mut Map<String, Value>,
    cfg: &ParamsConfig,
) -> Result<usize, EnrichError> {
    let Some(url) = event::current_url(properties) else {
        return Ok(0);
    };
    let params = QueryParams::parse(url, cfg.ignore_case)?;
    if params.is_empty() {
        return Ok(0);
    }
    tracing::trace!(params = params.len(), "parsed query string");

    let mut applied = 0;
    for name in cfg.white_list.iter() {
        let Some(value) = params.get(name).filter(|v| !v.is_empty()) else {
            continue;
        };
        let value = value.to_string();
        let key = cfg.property_key(name);
        tracing::trace!(%key, %value, "copying query parameter");

        if cfg.set_as_user_properties {
            insert_nested(properties, SET, key.clone(), &value);
        }
        if cfg.set_as_initial_user_properties {
            insert_nested(properties, SET_ONCE, format!("{INITIAL_PREFIX}{key}"), &value);
        }
        properties.insert(key, Value::String(value));
        applied += 1;
    }

    if applied > 0 {
        tracing::debug!(applied, "enriched event from query parameters");
    }
    Ok(applied)
}

/// Writes `key = value` into the nested mapping under `name`, creating the
/// mapping (or replacing a non-object) if needed.
fn insert_nested(properties: &mut Map<String, Value>, name: &str, key: String, value: &str) {
    let mut bucket = match properties.remove(name) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    bucket.insert(key, Value::String(value.to_string()));
    properties.insert(name.to_string(), Value::Object(bucket));
}
