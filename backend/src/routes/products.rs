use serde::{Deserialize, Serialize};

use crate::services::aggregate::{CrossTab, PercentShare, ValueCount};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsSummary {
    /// Sum of item prices in the selection
    pub total_sales: f64,
    pub total_sales_display: String,
    /// Distinct categories of the whole dataset
    pub categories: usize,
    /// Distinct purchased items in the selection
    pub products: usize,
}

/// Products page payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsData {
    pub matched_rows: usize,
    pub summary: ProductsSummary,
    /// Most purchased items; percents are relative to the listed items only
    pub top_products: Vec<PercentShare>,
    pub size_popularity: Vec<ValueCount>,
    /// Season rows by category columns
    pub season_category: CrossTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_summary_clone() {
        let summary = ProductsSummary {
            total_sales: 233081.0,
            total_sales_display: "233,081".to_string(),
            categories: 4,
            products: 25,
        };
        let cloned = summary.clone();
        assert_eq!(cloned, summary);
    }
}
