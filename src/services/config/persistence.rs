use std::fs;
use std::path::Path;

use super::ConfigError;
use crate::models::config::StoredConfig;

pub fn load_snapshot(path: &Path) -> Result<StoredConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_snapshot(path: &Path, snapshot: &StoredConfig) -> Result<(), ConfigError> {
    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let data = serde_json::to_string_pretty(snapshot).map_err(|source| ConfigError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, data).map_err(write_err)
}
