pub mod batch;
pub mod config;
pub mod output;
pub mod process;

use std::path::Path;

use tracing::debug;

use irsx_core::IrsxConfig;

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<IrsxConfig> {
    if let Some(path) = config_path {
        return Ok(IrsxConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using configuration from {}", default_path.display());
        Ok(IrsxConfig::from_file(&default_path)?)
    } else {
        Ok(IrsxConfig::default())
    }
}
