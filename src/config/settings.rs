use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::SortOrder;
use crate::utils::SizeFormat;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Could not read settings from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid settings in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Order of the per-extension block.
    #[serde(default)]
    pub sort_by: SortOrder,
    /// How byte totals are printed.
    #[serde(default)]
    pub sizes: SizeFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_by: SortOrder::Key,
            sizes: SizeFormat::Decimal,
        }
    }
}

impl Settings {
    /// Loads `dirstat/config.toml` from the user's config directory.
    ///
    /// A missing file, or a platform without a config directory, yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("Settings: No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads settings from an explicit TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid settings TOML.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirstat").join("config.toml"))
    }

    /// Applies command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, sort_by: Option<SortOrder>, sizes: Option<SizeFormat>) -> Self {
        if let Some(sort_by) = sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sizes) = sizes {
            self.sizes = sizes;
        }
        self
    }
}
