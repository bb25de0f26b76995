//! # Shopping Trends Backend
//!
//! Filter and aggregation engine behind the shopping trends dashboard.
//!
//! The crate loads a customer purchase table once, then answers page requests
//! by filtering the rows with the user's widget selection and computing the
//! counts, sums, means, rankings and geo-joined totals each page displays.
//!
//! ## Architecture
//!
//! - [`parsing`]: CSV loading (polars), schema validation, typed records
//! - [`models`]: `Record`, `Dataset`, `FilterCriteria`, `GeoReference`
//! - [`services`]: row filter, aggregators, geo-join and page assembly
//! - [`charts`]: renderer-neutral chart descriptions for each page
//! - [`store`]: one-time loading of the dataset and the geo reference
//! - [`config`]: `dashboard.toml` and environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: page payload types
//!
//! ## Determinism
//!
//! Rankings break ties by ascending value and percentages round half away
//! from zero, so equal inputs always produce identical pages.

pub mod api;
pub mod charts;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
mod test_support;

pub use error::{DashboardError, DashboardResult};
