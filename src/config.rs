//! Configuration file loading and resolution.
//!
//! Values come from, in increasing priority: built-in defaults, the TOML
//! config file, and the command line (or its environment fallbacks).

use crate::error::{Error, Result};
use crate::fetch::{DEFAULT_API_PORT, DEFAULT_DOCS_PORT, PortRule, api_origin};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Origin the documentation is served from, e.g. `http://docs:8008`.
    pub origin: Option<String>,
    /// Explicit API origin; skips port substitution.
    pub api_origin: Option<String>,
    pub docs_port: Option<u16>,
    pub api_port: Option<u16>,
    /// Host serving `jnr.php` for `[source]` links.
    pub source_host: Option<String>,
}

impl FileConfig {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicitly requested config file. It must exist.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Load the default config file if there is one.
    pub async fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::load(&path).await
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `{config_dir}/udf-docs/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("udf-docs").join("config.toml"))
}

/// Values given on the command line, overriding the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub origin: Option<String>,
    pub api_origin: Option<String>,
    pub docs_port: Option<u16>,
    pub api_port: Option<u16>,
}

/// Fully resolved settings for fetching UDFs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_origin: String,
    pub ports: PortRule,
}

impl Settings {
    /// Merge file values and overrides. Returns `None` when neither an
    /// origin nor an API origin is known.
    pub fn resolve(file: &FileConfig, overrides: &Overrides) -> Option<Self> {
        let ports = PortRule {
            docs_port: overrides
                .docs_port
                .or(file.docs_port)
                .unwrap_or(DEFAULT_DOCS_PORT),
            api_port: overrides
                .api_port
                .or(file.api_port)
                .unwrap_or(DEFAULT_API_PORT),
        };

        let explicit = overrides.api_origin.as_ref().or(file.api_origin.as_ref());
        let origin = overrides.origin.as_ref().or(file.origin.as_ref());

        let api_origin = match (explicit, origin) {
            (Some(api), _) => api.trim_end_matches('/').to_string(),
            (None, Some(origin)) => api_origin(origin, ports),
            (None, None) => return None,
        };

        Some(Self { api_origin, ports })
    }
}
