use std::fs;
use std::path::Path;

use tracing::debug;

use super::{AppConfig, Result};

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

/// Reads the configuration file when one is given, then applies environment
/// overrides and validates the result.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            let raw = fs::read_to_string(path)?;
            if is_yaml(path) {
                serde_yaml::from_str::<AppConfig>(&raw)?
            } else {
                serde_json::from_str::<AppConfig>(&raw)?
            }
        }
        None => AppConfig::default(),
    };
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

/// Writes the configuration without the client secret.
pub fn save_config(path: impl AsRef<Path>, config: &AppConfig) -> Result<()> {
    let path = path.as_ref();
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
