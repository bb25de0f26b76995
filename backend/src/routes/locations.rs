use serde::{Deserialize, Serialize};

use crate::services::aggregate::GroupMeasure;
use crate::services::geo_join::GeoAggregate;

/// Subscribed vs. not subscribed customers of one location.
///
/// Percents are whole numbers of the location's row total; both are 0 when
/// the location has no rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionShare {
    pub location: String,
    pub yes_count: usize,
    pub no_count: usize,
    pub yes_percent: f64,
    pub no_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCategoryCount {
    pub location: String,
    pub category: String,
    pub count: usize,
}

/// Locations page payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationsData {
    pub matched_rows: usize,
    /// Sales per location, ascending by name, with coordinates when known
    pub sales_by_location: Vec<GeoAggregate>,
    /// Top locations by sales, in sales rank order
    pub subscription_shares: Vec<SubscriptionShare>,
    pub category_by_location: Vec<LocationCategoryCount>,
    pub top_rated_locations: Vec<GroupMeasure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_share_roundtrip_fields() {
        let share = SubscriptionShare {
            location: "Texas".to_string(),
            yes_count: 1,
            no_count: 3,
            yes_percent: 25.0,
            no_percent: 75.0,
        };
        let json = serde_json::to_value(&share).unwrap();
        assert_eq!(json["location"], "Texas");
        assert_eq!(json["yes_percent"], 25.0);
    }
}
