//! Location name to coordinate reference table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Read-only lookup from location name to coordinates.
///
/// Names match exactly (case and whitespace included). When a name repeats in
/// the source table the first occurrence is kept.
#[derive(Debug, Clone, Default)]
pub struct GeoReference {
    points: HashMap<String, GeoPoint>,
}

impl GeoReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, GeoPoint)>,
        S: Into<String>,
    {
        let mut points = HashMap::new();
        for (name, point) in entries {
            points.entry(name.into()).or_insert(point);
        }
        Self { points }
    }

    pub fn lookup(&self, location: &str) -> Option<GeoPoint> {
        self.points.get(location).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let geo = GeoReference::from_entries(vec![
            ("Texas", GeoPoint::new(30.27, -97.74)),
            ("Texas", GeoPoint::new(0.0, 0.0)),
        ]);
        assert_eq!(geo.len(), 1);
        assert_eq!(geo.lookup("Texas"), Some(GeoPoint::new(30.27, -97.74)));
    }

    #[test]
    fn test_lookup_is_exact() {
        let geo = GeoReference::from_entries(vec![("Ohio", GeoPoint::new(39.96, -83.0))]);
        assert!(geo.lookup("ohio").is_none());
        assert!(geo.lookup("Ohio ").is_none());
        assert!(GeoReference::new().is_empty());
    }
}
