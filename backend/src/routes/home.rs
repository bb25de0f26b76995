use serde::{Deserialize, Serialize};

use crate::services::aggregate::{PercentShare, ValueCount};

/// Headline numbers of the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSummary {
    pub total_customers: usize,
    /// Mean review rating, one decimal; `None` when nothing matched
    pub average_rating: Option<f64>,
    /// Sum of previous purchases
    pub total_purchases: f64,
    pub total_customers_display: String,
    pub average_rating_display: String,
    pub total_purchases_display: String,
}

/// Everything the home page renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeData {
    pub matched_rows: usize,
    pub summary: HomeSummary,
    pub category_popularity: Vec<PercentShare>,
    pub gender_frequency: Vec<ValueCount>,
    pub shipping_popularity: Vec<ValueCount>,
}
