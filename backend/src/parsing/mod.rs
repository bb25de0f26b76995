//! Parsers for the dashboard's two input tables.
//!
//! - [`dataset_csv`]: the shopping-trends table, normalized and validated into
//!   typed [`Record`](crate::models::Record)s
//! - [`geo_csv`]: the location to latitude/longitude reference table
//!
//! # Example
//!
//! ```no_run
//! use shopping_trends::parsing::dataset_csv::load_dataset;
//! use std::path::Path;
//!
//! let dataset = load_dataset(Path::new("shopping_trends_updated.csv"))
//!     .expect("Failed to load dataset");
//! println!("{} customers", dataset.len());
//! ```

pub mod dataset_csv;
pub mod geo_csv;


pub use dataset_csv::{load_dataset, normalize_column_name, parse_dataset_bytes};
pub use geo_csv::{load_geo_file, parse_geo_bytes};
