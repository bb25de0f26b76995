//! One-time loading of the dataset and the geo reference.
//!
//! [`DatasetStore`] parses each source file at most once and hands out shared
//! [`Arc<Dataset>`] handles afterwards. The server builds its state from these
//! handles before it starts accepting connections.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::GeoSource;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Dataset, GeoReference};
use crate::parsing::{geo_csv, load_dataset};

/// Cache of parsed datasets keyed by source path.
#[derive(Clone, Default)]
pub struct DatasetStore {
    datasets: Arc<RwLock<HashMap<PathBuf, Arc<Dataset>>>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `path` on first use; later calls return the same `Arc`.
    pub fn load(&self, path: &Path) -> DashboardResult<Arc<Dataset>> {
        if let Some(dataset) = self.datasets.read().get(path) {
            debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(dataset));
        }

        let mut datasets = self.datasets.write();
        // Another caller may have loaded it while we waited for the lock
        if let Some(dataset) = datasets.get(path) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_dataset(path)?);
        datasets.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn is_loaded(&self, path: &Path) -> bool {
        self.datasets.read().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.datasets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.read().is_empty()
    }
}

/// Read the coordinate table from a local file or over HTTP(S).
pub async fn load_geo_reference(source: &GeoSource) -> DashboardResult<GeoReference> {
    let reference = match source {
        GeoSource::File(path) => {
            let path = path.clone();
            tokio::task::spawn_blocking(move || geo_csv::load_geo_file(&path))
                .await
                .map_err(|e| DashboardError::Config(format!("Task join error: {}", e)))??
        }
        GeoSource::Url(url) => geo_csv::parse_geo_bytes(fetch_bytes(url).await?)?,
    };

    info!(entries = reference.len(), "Geo reference loaded");
    Ok(reference)
}

#[cfg(feature = "remote-geo")]
async fn fetch_bytes(url: &str) -> DashboardResult<Vec<u8>> {
    use std::time::Duration;

    let fetch_error = |message: String| DashboardError::GeoFetch {
        url: url.to_string(),
        message,
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(20))
        .build()
        .map_err(|e| fetch_error(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_error(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(format!("Unexpected status {}", status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| fetch_error(format!("Failed to read body: {}", e)))?;
    Ok(body.to_vec())
}

#[cfg(not(feature = "remote-geo"))]
async fn fetch_bytes(url: &str) -> DashboardResult<Vec<u8>> {
    Err(DashboardError::Config(format!(
        "Geo reference {} is a URL but the remote-geo feature is not enabled",
        url
    )))
}
