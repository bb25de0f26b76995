use polars::prelude::*;
use std::path::Path;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{GeoPoint, GeoReference};
use crate::parsing::dataset_csv::read_csv_bytes;

pub const GEO_NAME_COLUMN: &str = "name";
pub const GEO_LATITUDE_COLUMN: &str = "latitude";
pub const GEO_LONGITUDE_COLUMN: &str = "longitude";

/// Parse a reference table with `name`, `latitude` and `longitude` columns.
///
/// Extra columns (the state capitals table also has `description`) are ignored.
/// Rows with a null name or coordinate are skipped: they cannot be joined or
/// plotted, and the join reports their locations as unmapped.
pub fn parse_geo_bytes(bytes: Vec<u8>) -> DashboardResult<GeoReference> {
    let df = read_csv_bytes(bytes)?;

    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for required in [GEO_NAME_COLUMN, GEO_LATITUDE_COLUMN, GEO_LONGITUDE_COLUMN] {
        if !present.iter().any(|c| c == required) {
            return Err(DashboardError::MissingColumn(required.to_string()));
        }
    }

    let df = df
        .lazy()
        .with_column(col(GEO_NAME_COLUMN).cast(DataType::String))
        .with_column(col(GEO_LATITUDE_COLUMN).cast(DataType::Float64))
        .with_column(col(GEO_LONGITUDE_COLUMN).cast(DataType::Float64))
        .collect()?;

    let names = df.column(GEO_NAME_COLUMN)?.str()?;
    let latitudes = df.column(GEO_LATITUDE_COLUMN)?.f64()?;
    let longitudes = df.column(GEO_LONGITUDE_COLUMN)?.f64()?;

    let entries = (0..df.height()).filter_map(|i| {
        match (names.get(i), latitudes.get(i), longitudes.get(i)) {
            (Some(name), Some(lat), Some(lon)) => Some((name.to_string(), GeoPoint::new(lat, lon))),
            _ => None,
        }
    });

    Ok(GeoReference::from_entries(entries))
}

pub fn load_geo_file(path: &Path) -> DashboardResult<GeoReference> {
    let bytes = std::fs::read(path).map_err(|e| DashboardError::io(path, e))?;
    parse_geo_bytes(bytes)
}
