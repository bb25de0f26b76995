//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types returned by the page endpoints.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::charts::{ChartData, ChartKind, ChartSeries, ChartSpec, HierarchyNode, MapData, MapPoint};
pub use crate::models::{CustomerId, FilterCriteria, GeoPoint, LocationSelection};
pub use crate::routes::home::HomeData;
pub use crate::routes::home::HomeSummary;
pub use crate::routes::locations::LocationCategoryCount;
pub use crate::routes::locations::LocationsData;
pub use crate::routes::locations::SubscriptionShare;
pub use crate::routes::options::WidgetOptions;
pub use crate::routes::products::ProductsData;
pub use crate::routes::products::ProductsSummary;
pub use crate::services::aggregate::{CrossTab, GroupMeasure, PercentShare, ValueCount};
pub use crate::services::geo_join::GeoAggregate;
