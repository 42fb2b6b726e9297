//! Provisioning configuration loading from disk.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{AppError, ProvisionConfig};

/// Load the provisioning configuration.
///
/// Without a path the compiled-in defaults are used. With a path, the TOML document
/// overrides any subset of fields.
pub fn load_config(path: Option<&Path>) -> Result<ProvisionConfig, AppError> {
    let config = match path {
        None => {
            debug!("using compiled-in configuration");
            let config = ProvisionConfig::default();
            config.validate()?;
            config
        }
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(path)?;
            ProvisionConfig::from_toml_str(&content)?
        }
    };

    for name in config.duplicate_targets() {
        warn!("Target '{}' is listed more than once; later entries will fail to fork", name);
    }
    Ok(config)
}
