//! Products page: sales summary, best sellers, sizes and seasonal categories.

use tracing::debug;

use crate::models::{CategoricalField, Dataset, FilterCriteria, NumericField};
use crate::routes::products::{ProductsData, ProductsSummary};
use crate::services::aggregate::{
    distinct_count, percentage_of_total, pivot_two_categoricals, sum_field, value_counts,
};
use crate::services::filter::{filter, View};
use crate::services::format::format_thousands;

/// Number of items listed in the best sellers chart.
pub const TOP_PRODUCTS: usize = 10;

/// Products page tables. `dataset` supplies the category count, which is not
/// narrowed by the selection.
pub fn compute_products_data(dataset: &Dataset, view: &View<'_>) -> ProductsData {
    let total_sales = sum_field(view, NumericField::PriceInUsd);

    let summary = ProductsSummary {
        total_sales,
        total_sales_display: format_thousands(total_sales),
        categories: distinct_count(&View::all(dataset), CategoricalField::Category),
        products: distinct_count(view, CategoricalField::ItemPurchased),
    };

    let mut best_sellers = value_counts(view, CategoricalField::ItemPurchased);
    best_sellers.truncate(TOP_PRODUCTS);

    ProductsData {
        matched_rows: view.len(),
        summary,
        top_products: percentage_of_total(&best_sellers),
        size_popularity: value_counts(view, CategoricalField::Size),
        season_category: pivot_two_categoricals(view, CategoricalField::Season, CategoricalField::Category),
    }
}

pub fn get_products_data(dataset: &Dataset, criteria: &FilterCriteria) -> ProductsData {
    let view = filter(dataset, criteria);
    debug!(matched = view.len(), total = dataset.len(), "Computing products page");
    compute_products_data(dataset, &view)
}
