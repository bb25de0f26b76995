//! Service layer: filtering, aggregation and page assembly.
//!
//! Everything here is synchronous and pure over a borrowed [`Dataset`]. The
//! HTTP layer runs these functions on blocking worker threads.
//!
//! [`Dataset`]: crate::models::Dataset

pub mod aggregate;
pub mod filter;
pub mod format;
pub mod geo_join;
pub mod home;
pub mod locations;
pub mod options;
pub mod products;

pub use filter::{filter, View};
pub use geo_join::{join_and_aggregate, GeoAggregate};
pub use home::get_home_data;
pub use locations::get_locations_data;
pub use options::widget_options;
pub use products::get_products_data;
