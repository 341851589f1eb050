use std::{
    fs,
    path::{Path, PathBuf},
};

use inudoption_lib::{fs::config_dir, notification::NotificationSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config::theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not locate the configuration directory: {0}")]
    Dir(#[from] inudoption_lib::Error),
    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("Could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The GUI's configuration, serialized to TOML.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Theme,
    pub notifications: NotificationSettings,
}

impl GuiConfig {
    /// Load `gui.toml` from the configuration directory, falling back to the defaults if it
    /// can't be read.
    pub fn load() -> Self {
        match config_dir()
            .map_err(Error::from)
            .and_then(|dir| Self::load_from(&dir.join(FILE_NAME)))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Using default configuration: {e}");
                Self::default()
            }
        }
    }

    /// Load the configuration at `path`, writing the defaults there first if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(path)?;
            return Ok(cfg);
        }

        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        // Make sure the parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}
