//! Join of filtered rows against the location coordinate reference.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{GeoPoint, GeoReference, NumericField};
use crate::services::filter::View;

/// Summed measure for one location, with coordinates when the reference has them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoAggregate {
    pub location: String,
    pub coordinates: Option<GeoPoint>,
    pub value: f64,
}

impl GeoAggregate {
    pub fn is_mapped(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Left-join every distinct location of `view` against `geo` and sum `measure`.
///
/// One entry per location, ascending by name. Locations missing from the
/// reference are kept with `coordinates: None`; map builders must skip them
/// rather than place them at (0, 0).
pub fn join_and_aggregate(
    view: &View<'_>,
    geo: &GeoReference,
    measure: NumericField,
) -> Vec<GeoAggregate> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for record in view.iter() {
        *sums.entry(record.location.as_str()).or_insert(0.0) += record.numeric(measure);
    }

    let joined: Vec<GeoAggregate> = sums
        .into_iter()
        .map(|(location, value)| GeoAggregate {
            location: location.to_string(),
            coordinates: geo.lookup(location),
            value,
        })
        .collect();

    let unmapped = joined.iter().filter(|g| !g.is_mapped()).count();
    if unmapped > 0 {
        debug!(unmapped, total = joined.len(), "Locations without coordinates");
    }

    joined
}

/// Names of the joined locations that have no coordinates.
pub fn unmapped_locations(joined: &[GeoAggregate]) -> Vec<String> {
    joined
        .iter()
        .filter(|g| !g.is_mapped())
        .map(|g| g.location.clone())
        .collect()
}
