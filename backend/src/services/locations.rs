//! Locations page: sales map, subscription split, regional categories and ratings.

use tracing::debug;

use crate::models::{
    CategoricalField, Dataset, FilterCriteria, GeoReference, NumericField, SubscriptionStatus,
};
use crate::routes::locations::{LocationCategoryCount, LocationsData, SubscriptionShare};
use crate::services::aggregate::{pivot_two_categoricals, top_n_by_group_mean, top_n_rows, CrossTab};
use crate::services::filter::{filter, View};
use crate::services::geo_join::join_and_aggregate;

/// Locations shown in the subscription chart, ranked by sales.
pub const SUBSCRIPTION_TOP_LOCATIONS: usize = 10;
/// Locations shown in the category sunburst, ranked by sales.
pub const CATEGORY_TOP_LOCATIONS: usize = 5;
/// Locations listed by mean review rating.
pub const TOP_RATED_LOCATIONS: usize = 3;

fn whole_percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64 * 100.0).round()
    }
}

/// Yes/No split for each of the top locations by sales, in rank order.
///
/// A status that never occurs for a location counts as zero.
pub(crate) fn subscription_shares(view: &View<'_>, n: usize) -> Vec<SubscriptionShare> {
    let top = top_n_rows(view, CategoricalField::Location, NumericField::PriceInUsd, n);
    let tab = pivot_two_categoricals(
        &top.rows,
        CategoricalField::Location,
        CategoricalField::SubscriptionStatus,
    );

    top.ranked
        .into_iter()
        .map(|location| {
            let yes_count = tab.get(&location, SubscriptionStatus::Yes.as_str());
            let no_count = tab.get(&location, SubscriptionStatus::No.as_str());
            let total = yes_count + no_count;
            SubscriptionShare {
                yes_percent: whole_percent(yes_count, total),
                no_percent: whole_percent(no_count, total),
                location,
                yes_count,
                no_count,
            }
        })
        .collect()
}

fn nonzero_cells(tab: &CrossTab) -> Vec<LocationCategoryCount> {
    let mut cells = Vec::new();
    for (r, location) in tab.rows.iter().enumerate() {
        for (c, category) in tab.columns.iter().enumerate() {
            let count = tab.counts[r][c];
            if count > 0 {
                cells.push(LocationCategoryCount {
                    location: location.clone(),
                    category: category.clone(),
                    count,
                });
            }
        }
    }
    cells
}

/// Category counts within the top locations by sales, ascending by location then category.
pub(crate) fn category_by_location(view: &View<'_>, n: usize) -> Vec<LocationCategoryCount> {
    let top = top_n_rows(view, CategoricalField::Location, NumericField::PriceInUsd, n);
    let tab = pivot_two_categoricals(&top.rows, CategoricalField::Location, CategoricalField::Category);
    nonzero_cells(&tab)
}

pub fn compute_locations_data(view: &View<'_>, geo: &GeoReference) -> LocationsData {
    LocationsData {
        matched_rows: view.len(),
        sales_by_location: join_and_aggregate(view, geo, NumericField::PriceInUsd),
        subscription_shares: subscription_shares(view, SUBSCRIPTION_TOP_LOCATIONS),
        category_by_location: category_by_location(view, CATEGORY_TOP_LOCATIONS),
        top_rated_locations: top_n_by_group_mean(
            view,
            CategoricalField::Location,
            NumericField::ReviewRating,
            TOP_RATED_LOCATIONS,
        ),
    }
}

/// Filter by category, size and season, then build the locations page.
pub fn get_locations_data(
    dataset: &Dataset,
    geo: &GeoReference,
    criteria: &FilterCriteria,
) -> LocationsData {
    let view = filter(dataset, criteria);
    debug!(matched = view.len(), total = dataset.len(), "Computing locations page");
    compute_locations_data(&view, geo)
}
