use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory where cookbook files are kept
    #[serde(default = "default_library_dir")]
    pub library_dir: String,
    /// File extension for cookbook files
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_dir: default_library_dir(),
            extension: default_extension(),
        }
    }
}

// Default value functions
fn default_library_dir() -> String {
    ".".to_string()
}

fn default_extension() -> String {
    crate::store::FILE_EXTENSION.to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKSTACK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKSTACK__LIBRARY_DIR
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Environment variables with COOKSTACK prefix
            .add_source(
                Environment::with_prefix("COOKSTACK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Resolves a user-supplied cookbook name to a file path.
    ///
    /// A name without an extension gets the configured one, and a relative
    /// path is looked up inside `library_dir`. Absolute paths are used as
    /// given.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        let mut path = PathBuf::from(name);
        if path.extension().is_none() {
            path.set_extension(&self.extension);
        }
        if path.is_relative() {
            path = Path::new(&self.library_dir).join(path);
        }
        path
    }
}
