//! Data Transfer Objects for the HTTP API.
//!
//! Page payloads are the route types from [`crate::routes`]; this module adds
//! query parsing and the response envelopes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::AppError;
use crate::charts::ChartSpec;
use crate::models::{FilterCriteria, LocationSelection};
use crate::routes::options::WidgetOptions;

pub use crate::routes::home::{HomeData, HomeSummary};
pub use crate::routes::locations::{LocationCategoryCount, LocationsData, SubscriptionShare};
pub use crate::routes::products::{ProductsData, ProductsSummary};

/// Selection passed as query parameters.
///
/// Set parameters are comma-separated. An absent parameter selects every
/// known value; a present but empty one selects nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub seasons: Option<String>,
}

/// Resolve one set parameter against the known values.
pub fn parse_set(
    name: &str,
    param: Option<&str>,
    known: &[String],
) -> Result<BTreeSet<String>, AppError> {
    let Some(raw) = param else {
        return Ok(known.iter().cloned().collect());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            if known.iter().any(|k| k == v) {
                Ok(v.to_string())
            } else {
                Err(AppError::BadRequest(format!("Unknown {} '{}'", name, v)))
            }
        })
        .collect()
}

fn parse_location(param: Option<&str>, options: &WidgetOptions) -> Result<LocationSelection, AppError> {
    let selection = LocationSelection::parse(param);
    if let LocationSelection::Only(name) = &selection {
        if !options.locations.iter().any(|l| l == name) {
            return Err(AppError::BadRequest(format!("Unknown location '{}'", name)));
        }
    }
    Ok(selection)
}

impl PageQuery {
    fn base_criteria(&self, options: &WidgetOptions) -> Result<FilterCriteria, AppError> {
        Ok(FilterCriteria::new(
            parse_set("category", self.categories.as_deref(), &options.categories)?,
            parse_set("size", self.sizes.as_deref(), &options.sizes)?,
        ))
    }

    /// Category, size and location selection of the home and products pages.
    pub fn location_criteria(&self, options: &WidgetOptions) -> Result<FilterCriteria, AppError> {
        Ok(self
            .base_criteria(options)?
            .with_location(parse_location(self.location.as_deref(), options)?))
    }

    /// Category, size and season selection of the locations page.
    pub fn season_criteria(&self, options: &WidgetOptions) -> Result<FilterCriteria, AppError> {
        Ok(self
            .base_criteria(options)?
            .with_seasons(parse_set("season", self.seasons.as_deref(), &options.seasons)?))
    }
}

/// Envelope for every page endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub data: T,
    pub charts: Vec<ChartSpec>,
    /// True when the selection matched no rows
    pub empty: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dataset_rows: usize,
}

/// Metadata of the loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub rows: usize,
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> WidgetOptions {
        WidgetOptions {
            categories: vec!["Accessories".into(), "Clothing".into()],
            sizes: vec!["L".into(), "M".into()],
            seasons: vec!["Fall".into(), "Winter".into()],
            locations: vec!["ALL".into(), "Ohio".into(), "Texas".into()],
        }
    }

    #[test]
    fn test_absent_parameter_selects_everything() {
        let set = parse_set("size", None, &options().sizes).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_parameter_selects_nothing() {
        assert!(parse_set("size", Some(""), &options().sizes).unwrap().is_empty());
    }

    #[test]
    fn test_comma_separated_values_trimmed() {
        let set = parse_set("category", Some("Clothing, Accessories"), &options().categories).unwrap();
        assert!(set.contains("Clothing"));
        assert!(set.contains("Accessories"));
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = parse_set("category", Some("Food"), &options().categories).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("Food")));
    }

    #[test]
    fn test_location_criteria() {
        let query = PageQuery {
            location: Some("Texas".into()),
            ..Default::default()
        };
        let criteria = query.location_criteria(&options()).unwrap();
        assert_eq!(criteria.location, LocationSelection::Only("Texas".into()));
        assert!(criteria.seasons.is_none());

        let all = PageQuery {
            location: Some("ALL".into()),
            ..Default::default()
        };
        assert_eq!(all.location_criteria(&options()).unwrap().location, LocationSelection::All);

        let unknown = PageQuery {
            location: Some("Atlantis".into()),
            ..Default::default()
        };
        assert!(unknown.location_criteria(&options()).is_err());
    }

    #[test]
    fn test_season_criteria_ignores_location() {
        let query = PageQuery {
            seasons: Some("Winter".into()),
            location: Some("Texas".into()),
            ..Default::default()
        };
        let criteria = query.season_criteria(&options()).unwrap();
        assert_eq!(criteria.location, LocationSelection::All);
        assert_eq!(criteria.seasons.unwrap().len(), 1);
    }
}
