//! Dashboard configuration file support.
//!
//! Settings come from an optional `dashboard.toml`, then environment
//! variables override individual values:
//!
//! | Variable        | Setting                |
//! |-----------------|------------------------|
//! | `HOST`          | `server.host`          |
//! | `PORT`          | `server.port`          |
//! | `DATASET_PATH`  | `data.dataset_path`    |
//! | `GEO_REFERENCE` | `data.geo_reference`   |

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{DashboardError, DashboardResult};

pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

pub const DEFAULT_GEO_REFERENCE_URL: &str =
    "https://raw.githubusercontent.com/jasperdebie/VisInfo/master/us-state-capitals.csv";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// Local path or http(s) URL of the location coordinate table
    #[serde(default = "default_geo_reference")]
    pub geo_reference: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("shopping_trends_updated.csv")
}

fn default_geo_reference() -> String {
    DEFAULT_GEO_REFERENCE_URL.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            geo_reference: default_geo_reference(),
        }
    }
}

/// Where the geo reference table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoSource {
    Url(String),
    File(PathBuf),
}

impl GeoSource {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            GeoSource::Url(trimmed.to_string())
        } else {
            GeoSource::File(PathBuf::from(trimmed))
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// First `dashboard.toml` found in the current directory, `backend/`, or the parent directory.
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// File settings (or defaults when no file exists) with environment overrides applied.
    pub fn load() -> DashboardResult<Self> {
        let mut config = match Self::find_default_file() {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Self::default()
            }
        };
        config.apply_overrides_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides looked up by variable name.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> DashboardResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| DashboardError::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        if let Some(path) = lookup("DATASET_PATH") {
            self.data.dataset_path = PathBuf::from(path);
        }
        if let Some(geo) = lookup("GEO_REFERENCE") {
            self.data.geo_reference = geo;
        }
        Ok(())
    }

    pub fn bind_address(&self) -> DashboardResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                DashboardError::Config(format!(
                    "Invalid bind address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }

    pub fn geo_source(&self) -> GeoSource {
        GeoSource::parse(&self.data.geo_reference)
    }
}
