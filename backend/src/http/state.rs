//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::{Dataset, GeoReference};
use crate::routes::options::WidgetOptions;
use crate::services::widget_options;

/// Shared, read-only state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub geo: Arc<GeoReference>,
    /// Widget values, computed once from the dataset
    pub options: Arc<WidgetOptions>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, geo: Arc<GeoReference>) -> Self {
        let options = Arc::new(widget_options(&dataset));
        Self {
            dataset,
            geo,
            options,
        }
    }
}
