use crate::errors::{AppError, AppResult};
use crate::models::kind::WorkoutKind;
use crate::utils::path::{from_cwd, resolve_in};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Workout file; relative paths live inside the config directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Tracked workout types, in display order.
    #[serde(default = "WorkoutKind::defaults")]
    pub kinds: Vec<WorkoutKind>,
}

fn default_data_file() -> String {
    Config::data_file_default().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            kinds: WorkoutKind::defaults(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.rworkout`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkout")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkout.conf")
    }

    /// Return the default path of the workout file
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("workouts.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        cfg.check()?;
        Ok(cfg)
    }

    /// Reject configurations the logger cannot work with.
    pub fn check(&self) -> AppResult<()> {
        if self.kinds.is_empty() {
            return Err(AppError::Config(
                "at least one workout type must be listed under `kinds`".into(),
            ));
        }

        let mut seen = HashSet::new();
        for k in &self.kinds {
            if k.tag.trim().is_empty() {
                return Err(AppError::Config("workout type with an empty tag".into()));
            }
            if !seen.insert(k.tag.to_ascii_lowercase()) {
                return Err(AppError::Config(format!(
                    "workout type '{}' is listed twice",
                    k.tag
                )));
            }
        }

        Ok(())
    }

    /// Resolved path of the workout file
    pub fn data_path(&self) -> PathBuf {
        resolve_in(&Self::config_dir(), &self.data_file)
    }

    /// Create the config directory and, unless `is_test`, the config file.
    /// An existing config file is left untouched.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut cfg = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };

        if let Some(name) = custom_file {
            cfg.data_file = from_cwd(&name)?.to_string_lossy().to_string();
        }

        let path = Self::config_file();
        if !is_test && !path.exists() {
            let yaml = serde_yaml::to_string(&cfg)?;
            fs::write(&path, yaml)?;
            tracing::info!(path = %path.display(), "config file written");
        }

        Ok(cfg)
    }
}
