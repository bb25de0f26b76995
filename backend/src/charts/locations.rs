use std::collections::BTreeMap;

use super::{palette, placeholders, ChartData, ChartKind, ChartSeries, ChartSpec, HierarchyNode, MapData, MapPoint};
use crate::routes::locations::{LocationCategoryCount, LocationsData, SubscriptionShare};
use crate::services::aggregate::GroupMeasure;
use crate::services::geo_join::{unmapped_locations, GeoAggregate};

pub const SALES_MAP: &str = "sales_map";
pub const SUBSCRIPTION_STATUS: &str = "subscription_status";
pub const CATEGORY_BY_LOCATION: &str = "category_by_location";
pub const TOP_RATED: &str = "top_rated_locations";

const MAP_TITLE: &str = "Locations Via Sales";
const SUBSCRIPTION_TITLE: &str = "Subscription Status Via 10 State";
const SUNBURST_TITLE: &str = "The Popularity of Category Via Top 5 State";
const TOP_RATED_TITLE: &str = "Top 3 States By Review Rating";

pub const MAP_ZOOM: f64 = 3.0;

/// Scatter map of sales. Locations without coordinates are listed, never plotted.
pub fn sales_map(joined: &[GeoAggregate]) -> ChartSpec {
    let points = joined
        .iter()
        .filter_map(|g| {
            g.coordinates.map(|p| MapPoint {
                location: g.location.clone(),
                latitude: p.latitude,
                longitude: p.longitude,
                value: g.value,
            })
        })
        .collect();

    let data = MapData {
        points,
        unmapped: unmapped_locations(joined),
        zoom: MAP_ZOOM,
    };

    ChartSpec::new(SALES_MAP, ChartKind::ScatterMap, MAP_TITLE, ChartData::Map(data))
        .with_colors(&[palette::SALES_SCALE])
        .with_hover("%{hovertext}<br>Price_in_USD: %{marker.color}")
        .with_height(650)
}

pub fn subscription_bars(shares: &[SubscriptionShare]) -> ChartSpec {
    let locations: Vec<String> = shares.iter().map(|s| s.location.clone()).collect();
    let as_text = |values: &[f64]| values.iter().map(|v| format!("{:.0}", v)).collect::<Vec<_>>();

    let yes: Vec<f64> = shares.iter().map(|s| s.yes_percent).collect();
    let no: Vec<f64> = shares.iter().map(|s| s.no_percent).collect();
    let series = vec![
        ChartSeries::new("Yes", locations.clone(), yes.clone()).with_text(as_text(&yes)),
        ChartSeries::new("No", locations, no.clone()).with_text(as_text(&no)),
    ];

    ChartSpec::new(SUBSCRIPTION_STATUS, ChartKind::GroupedBar, SUBSCRIPTION_TITLE, ChartData::Series(series))
        .with_axes("Location", "Popularity (%)")
        .with_colors(&palette::PRIMARY)
        .with_hover("State: %{x}<br>Popularity (%): %{y:.0f}%")
        .with_legend()
}

/// Two-level sunburst: locations at the root, their categories beneath.
pub fn category_sunburst(cells: &[LocationCategoryCount]) -> ChartSpec {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for cell in cells {
        *totals.entry(cell.location.as_str()).or_insert(0) += cell.count;
    }

    let mut nodes: Vec<HierarchyNode> = totals
        .iter()
        .map(|(location, total)| HierarchyNode {
            id: location.to_string(),
            parent: String::new(),
            label: location.to_string(),
            value: *total as f64,
        })
        .collect();
    nodes.extend(cells.iter().map(|cell| HierarchyNode {
        id: format!("{}/{}", cell.location, cell.category),
        parent: cell.location.clone(),
        label: cell.category.clone(),
        value: cell.count as f64,
    }));

    ChartSpec::new(CATEGORY_BY_LOCATION, ChartKind::Sunburst, SUNBURST_TITLE, ChartData::Hierarchy(nodes))
        .with_colors(&palette::SUNBURST)
        .with_hover("State: %{label}<br>Count: %{value}")
}

pub fn top_rated_bar(ranked: &[GroupMeasure]) -> ChartSpec {
    let series = ChartSeries::new(
        "Review Rating",
        ranked.iter().map(|g| g.group.clone()).collect(),
        ranked.iter().map(|g| g.value).collect(),
    )
    .with_text(ranked.iter().map(|g| format!("{:.1}", g.value)).collect());

    ChartSpec::new(TOP_RATED, ChartKind::Bar, TOP_RATED_TITLE, ChartData::Series(vec![series]))
        .with_axes("Location", "Review Rating")
        .with_colors(&palette::PRIMARY)
        .with_hover("State: %{x}<br>AVG Review: %{y:.1f}")
}

pub fn locations_charts(data: &LocationsData) -> Vec<ChartSpec> {
    if data.matched_rows == 0 {
        return placeholders(&[
            (SALES_MAP, MAP_TITLE),
            (SUBSCRIPTION_STATUS, SUBSCRIPTION_TITLE),
            (CATEGORY_BY_LOCATION, SUNBURST_TITLE),
            (TOP_RATED, TOP_RATED_TITLE),
        ]);
    }

    vec![
        sales_map(&data.sales_by_location),
        subscription_bars(&data.subscription_shares),
        category_sunburst(&data.category_by_location),
        top_rated_bar(&data.top_rated_locations),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn joined() -> Vec<GeoAggregate> {
        vec![
            GeoAggregate {
                location: "California".to_string(),
                coordinates: Some(GeoPoint::new(38.56, -121.47)),
                value: 135.0,
            },
            GeoAggregate {
                location: "Maine".to_string(),
                coordinates: None,
                value: 125.0,
            },
        ]
    }

    #[test]
    fn test_sales_map_skips_unmapped_locations() {
        let chart = sales_map(&joined());
        match chart.data {
            ChartData::Map(map) => {
                assert_eq!(map.points.len(), 1);
                assert_eq!(map.points[0].location, "California");
                assert_eq!(map.unmapped, vec!["Maine"]);
                assert!(map.points.iter().all(|p| p.latitude != 0.0 || p.longitude != 0.0));
                assert_eq!(map.zoom, MAP_ZOOM);
            }
            other => panic!("unexpected chart data: {:?}", other),
        }
    }

    #[test]
    fn test_category_sunburst_nodes() {
        let cells = vec![
            LocationCategoryCount { location: "Texas".into(), category: "Clothing".into(), count: 2 },
            LocationCategoryCount { location: "Texas".into(), category: "Shoes".into(), count: 3 },
        ];
        let chart = category_sunburst(&cells);
        match chart.data {
            ChartData::Hierarchy(nodes) => {
                assert_eq!(nodes.len(), 3);
                assert_eq!(nodes[0].id, "Texas");
                assert_eq!(nodes[0].parent, "");
                assert_eq!(nodes[0].value, 5.0);
                assert_eq!(nodes[2].id, "Texas/Shoes");
                assert_eq!(nodes[2].parent, "Texas");
            }
            other => panic!("unexpected chart data: {:?}", other),
        }
    }

    #[test]
    fn test_subscription_bars_two_series() {
        let shares = vec![SubscriptionShare {
            location: "Ohio".into(),
            yes_count: 2,
            no_count: 1,
            yes_percent: 67.0,
            no_percent: 33.0,
        }];
        let chart = subscription_bars(&shares);
        assert_eq!(chart.kind, ChartKind::GroupedBar);
        match chart.data {
            ChartData::Series(series) => {
                assert_eq!(series[0].name, "Yes");
                assert_eq!(series[0].y, vec![67.0]);
                assert_eq!(series[1].text, vec!["33"]);
            }
            other => panic!("unexpected chart data: {:?}", other),
        }
    }

    #[test]
    fn test_top_rated_labels_one_decimal() {
        let ranked = vec![GroupMeasure { group: "California".into(), value: 11.6 / 3.0 }];
        let chart = top_rated_bar(&ranked);
        match chart.data {
            ChartData::Series(series) => assert_eq!(series[0].text, vec!["3.9"]),
            other => panic!("unexpected chart data: {:?}", other),
        }
    }
}
