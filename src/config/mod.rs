//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<JingleConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {:?}", path))?;
    let config: JingleConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config: {:?}", path))?;
    config.validate()?;
    tracing::info!(
        path = %path.display(),
        sounds = config.export.sounds.len(),
        "loaded configuration"
    );
    Ok(config)
}
