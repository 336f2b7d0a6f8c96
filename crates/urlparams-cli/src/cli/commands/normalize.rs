//! `urlparams normalize` – show the options the enricher will actually use.

use anyhow::Result;
use urlparams_core::config::{ParamsConfig, RawConfig};

pub fn run_normalize(raw: &RawConfig) -> Result<()> {
    let cfg = ParamsConfig::from_raw(raw);
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
