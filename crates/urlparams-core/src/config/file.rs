//! Loading raw options from disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::RawConfig;

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlparams")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load options from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<RawConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RawConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load options from `path`: JSON when the extension is `.json`, TOML otherwise.
pub fn load_from_path(path: &Path) -> Result<RawConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let cfg = if is_json {
        serde_json::from_str(&data)
            .with_context(|| format!("parse JSON config: {}", path.display()))?
    } else {
        toml::from_str(&data).with_context(|| format!("parse TOML config: {}", path.display()))?
    };
    Ok(cfg)
}
