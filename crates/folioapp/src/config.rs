//! # Configuration
//!
//! Folio configuration is loaded with [`confique`], layering environment
//! variables, a TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `FOLIO_BACKEND`, `FOLIO_DATA_DIR`, etc.
//! 2. **Config file**: the path given with `--config`, otherwise `folio.toml` in
//!    the OS config directory (via `directories`). A missing file is fine.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Command-line flags such as `--backend` are applied by the binary on top of
//! the loaded value.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `backend` | `FOLIO_BACKEND` | `local` | `local` or `remote` |
//! | `data_dir` | `FOLIO_DATA_DIR` | OS data dir | Where the local backend keeps its files |
//! | `seed_defaults` | `FOLIO_SEED_DEFAULTS` | `false` | Serve sample content for never-saved local types |
//! | `remote_url` | `FOLIO_REMOTE_URL` | | Table service base URL |
//! | `remote_key` | `FOLIO_REMOTE_KEY` | | Table service API key |
//! | `request_timeout_ms` | `FOLIO_REQUEST_TIMEOUT_MS` | `15000` | HTTP timeout |

use crate::error::{FolioError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Which content store binding a deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Local,
    Remote,
}

impl FromStr for BackendKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(BackendKind::Local),
            "remote" => Ok(BackendKind::Remote),
            other => Err(FolioError::Config(format!(
                "unknown backend '{}' (expected 'local' or 'remote')",
                other
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Local => f.write_str("local"),
            BackendKind::Remote => f.write_str("remote"),
        }
    }
}

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Content store binding: "local" or "remote".
    #[config(env = "FOLIO_BACKEND", default = "local")]
    pub backend: String,

    /// Directory for the local backend's files.
    /// When absent, the OS data directory for folio is used.
    #[config(env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Serve the sample portfolio when a content type was never saved locally.
    #[config(env = "FOLIO_SEED_DEFAULTS", default = false)]
    pub seed_defaults: bool,

    /// Base URL of the remote table service.
    #[config(env = "FOLIO_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// API key of the remote table service.
    #[config(env = "FOLIO_REMOTE_KEY")]
    pub remote_key: Option<String>,

    /// Timeout for remote requests, in milliseconds.
    #[config(env = "FOLIO_REQUEST_TIMEOUT_MS", default = 15000)]
    pub request_timeout_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            backend: "local".to_string(),
            data_dir: None,
            seed_defaults: false,
            remote_url: None,
            remote_key: None,
            request_timeout_ms: 15000,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

/// `folio.toml` in the OS config directory, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl FolioConfig {
    /// Load from the environment, then `path` (or the default config file),
    /// then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = FolioConfig::builder().env();
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FolioError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                builder = builder.file(path);
            }
            None => {
                if let Some(default) = default_config_path() {
                    builder = builder.file(default);
                }
            }
        }
        builder.load().map_err(|e| FolioError::Config(e.to_string()))
    }

    /// Commented TOML template listing every setting.
    pub fn template() -> String {
        confique::toml::template::<FolioConfig>(confique::toml::FormatOptions::default())
    }

    pub fn backend_kind(&self) -> Result<BackendKind> {
        self.backend.parse()
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| FolioError::Config("no data directory available, set data_dir".into()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// URL and key of the remote table service. Both are required for the
    /// remote backend.
    pub fn remote_credentials(&self) -> Result<(&str, &str)> {
        let url = self
            .remote_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| FolioError::Config("remote backend needs remote_url".into()))?;
        let key = self
            .remote_key
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| FolioError::Config("remote backend needs remote_key".into()))?;
        Ok((url, key))
    }
}
