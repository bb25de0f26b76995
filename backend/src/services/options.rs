//! Option lists for the selection widgets.

use crate::models::{CategoricalField, Dataset, ALL_LOCATIONS};
use crate::routes::options::WidgetOptions;
use crate::services::aggregate::distinct_values;
use crate::services::filter::View;

/// Sorted distinct values for each widget; locations start with `ALL`.
pub fn widget_options(dataset: &Dataset) -> WidgetOptions {
    let all = View::all(dataset);

    let mut locations = Vec::with_capacity(1 + dataset.len().min(64));
    locations.push(ALL_LOCATIONS.to_string());
    locations.extend(distinct_values(&all, CategoricalField::Location));

    WidgetOptions {
        categories: distinct_values(&all, CategoricalField::Category),
        sizes: distinct_values(&all, CategoricalField::Size),
        seasons: distinct_values(&all, CategoricalField::Season),
        locations,
    }
}
