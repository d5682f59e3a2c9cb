//! Configuration for quizapp, read from a TOML file
//!
//! ```toml
//! [contract]
//! authority = "com.example.udacity.droidtermsexample"
//!
//! [provider]
//! database = "/path/to/terms.db"
//!
//! [review]
//! show_definition_label = "show definition"
//! next_word_label = "next word"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contract::TermsContract;
use crate::provider::SqliteTermsProvider;
use crate::review::ReviewLabels;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Where terms come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ProviderConfig {
    /// Path to the provider's SQLite database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// JSON file with a term array, used instead of the database when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_json: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub contract: TermsContract,
    pub provider: ProviderConfig,
    pub review: ReviewLabels,
}

impl QuizConfig {
    /// `{config_dir}/quizapp/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join("quizapp").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, or from the default path when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Database path to query: configured, or the default data location
    pub fn database_path(&self) -> Option<PathBuf> {
        self.provider
            .database
            .clone()
            .or_else(|| SqliteTermsProvider::default_database_path(&self.contract))
    }
}
