//! Home page: customer summary and overall popularity tables.

use tracing::debug;

use crate::models::{CategoricalField, Dataset, FilterCriteria, NumericField};
use crate::routes::home::{HomeData, HomeSummary};
use crate::services::aggregate::{
    mean_rating, percentage_of_total, round_to, sum_field, total_rows, value_counts,
};
use crate::services::filter::{filter, View};
use crate::services::format::{format_rating, format_thousands};

pub(crate) fn compute_summary(view: &View<'_>) -> HomeSummary {
    let total_customers = total_rows(view);
    let average_rating = mean_rating(view).map(|m| round_to(m, 1));
    let total_purchases = sum_field(view, NumericField::PreviousPurchases);

    HomeSummary {
        total_customers,
        average_rating,
        total_purchases,
        total_customers_display: format_thousands(total_customers as f64),
        average_rating_display: format_rating(average_rating),
        total_purchases_display: format_thousands(total_purchases),
    }
}

/// Home page tables for an already filtered view.
pub fn compute_home_data(view: &View<'_>) -> HomeData {
    HomeData {
        matched_rows: view.len(),
        summary: compute_summary(view),
        category_popularity: percentage_of_total(&value_counts(view, CategoricalField::Category)),
        gender_frequency: value_counts(view, CategoricalField::Gender),
        shipping_popularity: value_counts(view, CategoricalField::ShippingType),
    }
}

/// Filter `dataset` by category, size and location, then build the home page.
pub fn get_home_data(dataset: &Dataset, criteria: &FilterCriteria) -> HomeData {
    let view = filter(dataset, criteria);
    debug!(matched = view.len(), total = dataset.len(), "Computing home page");
    compute_home_data(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationSelection;
    use crate::test_support::sample_dataset;

    fn everything() -> FilterCriteria {
        FilterCriteria::new(["Accessories", "Clothing", "Shoes"], ["L", "M"])
    }

    #[test]
    fn test_summary_over_whole_dataset() {
        let ds = sample_dataset();
        let data = get_home_data(&ds, &everything());

        assert_eq!(data.matched_rows, 12);
        assert_eq!(data.summary.total_customers, 12);
        assert_eq!(data.summary.average_rating, Some(3.7));
        assert_eq!(data.summary.average_rating_display, "3.7");
        assert_eq!(data.summary.total_purchases, 156.0);
        assert_eq!(data.summary.total_purchases_display, "156");
    }

    #[test]
    fn test_category_popularity_percentages() {
        let ds = sample_dataset();
        let data = get_home_data(&ds, &everything());

        let pairs: Vec<(&str, f64)> = data
            .category_popularity
            .iter()
            .map(|s| (s.value.as_str(), s.percent))
            .collect();
        assert_eq!(
            pairs,
            vec![("Clothing", 50.0), ("Accessories", 25.0), ("Shoes", 25.0)]
        );
    }

    #[test]
    fn test_gender_and_shipping_counts() {
        let ds = sample_dataset();
        let data = get_home_data(&ds, &everything());

        assert_eq!(data.gender_frequency[0].value, "Male");
        assert_eq!(data.gender_frequency[0].count, 8);
        assert_eq!(data.gender_frequency[1].count, 4);
        assert_eq!(data.shipping_popularity.len(), 1);
        assert_eq!(data.shipping_popularity[0].count, 12);
    }

    #[test]
    fn test_location_selection_narrows_summary() {
        let ds = sample_dataset();
        let criteria = everything().with_location(LocationSelection::Only("Ohio".to_string()));
        let data = get_home_data(&ds, &criteria);

        assert_eq!(data.summary.total_customers, 3);
        // ids 4, 8, 11
        assert_eq!(data.summary.total_purchases, 46.0);
    }

    #[test]
    fn test_empty_selection_degrades() {
        let ds = sample_dataset();
        let criteria = FilterCriteria::new(Vec::<String>::new(), ["M"]);
        let data = get_home_data(&ds, &criteria);

        assert_eq!(data.matched_rows, 0);
        assert_eq!(data.summary.average_rating, None);
        assert_eq!(data.summary.average_rating_display, "N/A");
        assert_eq!(data.summary.total_purchases_display, "0");
        assert!(data.category_popularity.is_empty());
        assert!(data.gender_frequency.is_empty());
    }
}
