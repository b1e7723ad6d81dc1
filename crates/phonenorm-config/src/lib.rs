use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonenorm";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Uppercased ISO 3166 code used when no country is passed explicitly.
    pub default_country: Option<String>,
    pub validate_mobile_prefix: bool,
    pub strict_detection: bool,
    /// JSON table replacing the bundled one.
    pub country_table: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_country: None,
            validate_mobile_prefix: true,
            strict_detection: false,
            country_table: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_country value: {0}")]
    InvalidDefaultCountry(String),
    #[error("invalid country_table path: {0}")]
    InvalidCountryTablePath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_country: Option<String>,
    validate_mobile_prefix: Option<bool>,
    strict_detection: Option<bool>,
    country_table: Option<PathBuf>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(Some(merge_config(parsed, base_dir)?))
}

fn merge_config(parsed: ConfigFile, base_dir: &Path) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(country) = parsed.default_country {
        config.default_country = Some(validate_country(&country)?);
    }

    if let Some(enabled) = parsed.validate_mobile_prefix {
        config.validate_mobile_prefix = enabled;
    }

    if let Some(enabled) = parsed.strict_detection {
        config.strict_detection = enabled;
    }

    if let Some(table) = parsed.country_table {
        if table.as_os_str().is_empty() {
            return Err(ConfigError::InvalidCountryTablePath(table));
        }
        let table = if table.is_relative() {
            base_dir.join(table)
        } else {
            table
        };
        config.country_table = Some(table);
    }

    Ok(config)
}

/// Accepts two or three ASCII letters, returned uppercased.
pub fn validate_country(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let valid_len = matches!(trimmed.len(), 2 | 3);
    if !valid_len || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(ConfigError::InvalidDefaultCountry(raw.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}
