use crate::error::{AddressBookError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_FILE: &str = "addressbook.txt";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Overrides the application home directory (config and logs).
pub const HOME_ENV: &str = "ADDRESSBOOK_HOME";

/// Configuration for addressbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookConfig {
    /// Storage file used when none is given on the command line.
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_storage_file")]
    pub storage_file: PathBuf,

    /// trace | debug | info | warn | error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            log_level: default_log_level(),
        }
    }
}

impl AddressBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddressBookError::Io)?;
        let config: AddressBookConfig =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        Ok(config)
    }

    pub fn uses_default_storage_file(&self) -> bool {
        self.storage_file == Path::new(DEFAULT_STORAGE_FILE)
    }
}

/// Where addressbook keeps its own files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub home: PathBuf,
}

impl AppPaths {
    /// `$ADDRESSBOOK_HOME` if set, otherwise the platform config directory.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                home: PathBuf::from(home),
            });
        }
        let dirs = ProjectDirs::from("com", "addressbook", "addressbook").ok_or_else(|| {
            AddressBookError::Config("could not determine a home directory".to_string())
        })?;
        Ok(Self {
            home: dirs.config_dir().to_path_buf(),
        })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.home.join("logs")
    }
}
