//! Configuration loader and validator for the note store.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub app: App,
    pub database: Database,
}

/// App-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    pub data_dir: String,
}

/// Where the notes database lives inside `app.data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Database {
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: App {
                data_dir: "./data".into(),
            },
            database: Database {
                file_name: "notes_db".into(),
            },
        }
    }
}

impl Config {
    /// Ensure required directories exist (creates `app.data_dir` if missing).
    pub fn ensure_dirs(&self) -> Result<(), std::io::Error> {
        if self.app.data_dir.trim().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.app.data_dir)
    }

    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}/{}",
            self.app.data_dir.trim_end_matches('/'),
            self.database.file_name
        )
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.app.data_dir.trim().is_empty() {
        return Err(ConfigError::Invalid("app.data_dir must be non-empty"));
    }
    let file_name = cfg.database.file_name.trim();
    if file_name.is_empty() {
        return Err(ConfigError::Invalid("database.file_name must be non-empty"));
    }
    if file_name.contains('/') || file_name.contains('?') {
        return Err(ConfigError::Invalid(
            "database.file_name must be a bare file name",
        ));
    }
    Ok(())
}

/// Example YAML matching [`Config::default`].
pub fn example() -> &'static str {
    r#"app:
  data_dir: "./data"

database:
  file_name: "notes_db"
"#
}
