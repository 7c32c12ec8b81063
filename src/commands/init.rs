use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};
use crate::errors::Error;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

/// Write the default configuration to `path`
pub fn init_config_at(path: &Path, force: bool) -> crate::errors::Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::file_system("Failed to write config file", path, e))?;
    info!("Wrote default configuration to {}", path.display());
    Ok(())
}
