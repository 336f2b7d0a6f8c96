//! `urlparams schema` – print the option schema.

use anyhow::Result;
use urlparams_core::schema;

pub fn run_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&schema::schema_json())?);
    Ok(())
}
