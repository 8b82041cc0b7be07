//! Configuration loader.
//!
//! On first run the user is asked for a label and a `MMDD` date, which are
//! validated and written to `config.json`. Later runs read that file back and
//! refuse to continue if anything in it is off.

mod persistence;

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::config::{normalize_target, CountdownConfig, StoredConfig, DEFAULT_DATE};

pub use persistence::{load_snapshot, save_snapshot};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Any year with a 29 February, used when a stored date is checked without
/// tying it to the current year.
const LEAP_REFERENCE_YEAR: i32 = 2000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("date \"{0}\" must be exactly four digits in MMDD form")]
    InvalidDateFormat(String),
    #[error("{month:02}-{day:02} is not a valid date in {year}")]
    ImpossibleDate { year: i32, month: u32, day: u32 },
    #[error("failed to read configuration from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize configuration from {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize configuration for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write configuration to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("setup prompt failed: {0}")]
    Prompt(String),
    #[error("configuration file {} is invalid", path.display())]
    Stored {
        path: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },
}

/// Source of the two first-run answers. `None` means the user dismissed the
/// prompt, which is treated like a blank answer.
#[cfg_attr(test, mockall::automock)]
pub trait FirstRunPrompt {
    fn ask_target(&mut self) -> Result<Option<String>, ConfigError>;
    fn ask_date(&mut self) -> Result<Option<String>, ConfigError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Written just now from the first-run prompts.
    Created,
    /// Read from an existing file.
    Existing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: CountdownConfig,
    pub source: ConfigSource,
    pub path: PathBuf,
}

/// `config.json` next to the running executable, or in the working
/// directory if the executable path is unavailable.
pub fn default_config_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(err) => {
            log::warn!("could not locate executable ({err}); using working directory for config");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }
}

/// Parse a `MMDD` string and check it names a real day in `year`.
pub fn parse_mmdd(input: &str, year: i32) -> Result<(u32, u32), ConfigError> {
    if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidDateFormat(input.to_string()));
    }

    let month: u32 = input[..2]
        .parse()
        .map_err(|_| ConfigError::InvalidDateFormat(input.to_string()))?;
    let day: u32 = input[2..]
        .parse()
        .map_err(|_| ConfigError::InvalidDateFormat(input.to_string()))?;

    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(ConfigError::ImpossibleDate { year, month, day });
    }
    Ok((month, day))
}

/// Turn raw prompt answers into a configuration, applying defaults.
pub fn config_from_answers(
    target: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<CountdownConfig, ConfigError> {
    let target = normalize_target(target.unwrap_or_default());
    let date = date.map(str::trim).filter(|d| !d.is_empty()).unwrap_or(DEFAULT_DATE);
    let (month, day) = parse_mmdd(date, today.year())?;
    Ok(CountdownConfig::new(target, month, day))
}

/// Validate a stored snapshot. The date only has to exist in some year;
/// 29 February is resolved to the next leap year by the countdown.
pub fn config_from_snapshot(snapshot: &StoredConfig) -> Result<CountdownConfig, ConfigError> {
    let (month, day) = parse_mmdd(snapshot.date.trim(), LEAP_REFERENCE_YEAR)?;
    Ok(CountdownConfig::new(snapshot.target.clone(), month, day))
}

pub fn load_config(path: &Path) -> Result<CountdownConfig, ConfigError> {
    let snapshot = load_snapshot(path)?;
    config_from_snapshot(&snapshot)
}

pub fn save_config(path: &Path, config: &CountdownConfig) -> Result<(), ConfigError> {
    save_snapshot(path, &StoredConfig::from(config))
}

/// Load the configuration at `path`, running first-run setup through
/// `prompt` when the file does not exist yet.
pub fn load_or_create(
    path: &Path,
    today: NaiveDate,
    prompt: &mut dyn FirstRunPrompt,
) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        let config = load_config(path).map_err(|source| ConfigError::Stored {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        log::info!(
            "Loaded countdown config from {}: {} on {}",
            path.display(),
            config.target,
            config.mmdd()
        );
        return Ok(LoadedConfig {
            config,
            source: ConfigSource::Existing,
            path: path.to_path_buf(),
        });
    }

    log::info!("No config at {}; starting first-run setup", path.display());
    let target = prompt.ask_target()?;
    let date = prompt.ask_date()?;
    let config = config_from_answers(target.as_deref(), date.as_deref(), today)?;
    save_config(path, &config)?;
    log::info!(
        "Saved countdown config to {}: {} on {}",
        path.display(),
        config.target,
        config.mmdd()
    );

    Ok(LoadedConfig {
        config,
        source: ConfigSource::Created,
        path: path.to_path_buf(),
    })
}
