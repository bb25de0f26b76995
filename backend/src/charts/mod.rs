//! Chart descriptions for the dashboard pages.
//!
//! Services produce numbers; this module turns them into renderer-neutral
//! [`ChartSpec`] values (series, map points, hierarchies) that a Plotly
//! frontend can draw directly. When a selection matches no rows every chart of
//! the page is replaced by a placeholder carrying a message.

use serde::{Deserialize, Serialize};

pub mod home;
pub mod locations;
pub mod products;

pub use home::home_charts;
pub use locations::locations_charts;
pub use products::products_charts;

/// Plotly template used by every chart.
pub const TEMPLATE: &str = "plotly_dark";

pub const EMPTY_SELECTION_MESSAGE: &str = "No data matches the current selection";

pub mod palette {
    pub const PRIMARY: [&str; 4] = ["#FF0060", "#00DFA2", "#0079FF", "#F6FA70"];
    pub const SUNBURST: [&str; 5] = ["#FF0060", "#00DFA2", "#0079FF", "#F6FA70", "#EDD2F3"];
    pub const GENDER: [&str; 2] = ["#FF6969", "#03C988"];
    pub const PASTEL: [&str; 5] = ["#ADA2FF", "#C0DEFF", "#FCDDB0", "#FF9F9F", "#EDD2F3"];
    pub const TOP_PRODUCTS: [&str; 1] = ["#E64848"];
    /// Continuous scale for the sales map
    pub const SALES_SCALE: &str = "IceFire";

    pub fn colors(palette: &[&str]) -> Vec<String> {
        palette.iter().map(|c| c.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    GroupedBar,
    Pie,
    Scatter,
    Line,
    ScatterMap,
    Sunburst,
    Placeholder,
}

/// One named trace: categorical `x`, numeric `y`, optional labels and sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub marker_size: Option<Vec<f64>>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            text: Vec::new(),
            marker_size: None,
        }
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    pub fn with_marker_size(mut self, sizes: Vec<f64>) -> Self {
        self.marker_size = Some(sizes);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
}

/// Points to plot plus the locations that could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub points: Vec<MapPoint>,
    pub unmapped: Vec<String>,
    pub zoom: f64,
}

/// Sunburst node; roots have an empty `parent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: String,
    pub parent: String,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ChartData {
    Series(Vec<ChartSeries>),
    Map(MapData),
    Hierarchy(Vec<HierarchyNode>),
    Empty { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y_label: Option<String>,
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hover_template: Option<String>,
    pub show_legend: bool,
    /// Donut hole fraction for pie charts
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hole: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<u32>,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn new(id: &str, kind: ChartKind, title: &str, data: ChartData) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            template: TEMPLATE.to_string(),
            x_label: None,
            y_label: None,
            colors: Vec::new(),
            hover_template: None,
            show_legend: false,
            hole: None,
            height: None,
            data,
        }
    }

    /// Stand-in for a chart whose selection is empty.
    pub fn placeholder(id: &str, title: &str) -> Self {
        Self::new(
            id,
            ChartKind::Placeholder,
            title,
            ChartData::Empty {
                message: EMPTY_SELECTION_MESSAGE.to_string(),
            },
        )
    }

    pub fn with_axes(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }

    pub fn with_colors(mut self, colors: &[&str]) -> Self {
        self.colors = palette::colors(colors);
        self
    }

    pub fn with_hover(mut self, template: &str) -> Self {
        self.hover_template = Some(template.to_string());
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    pub fn with_hole(mut self, hole: f64) -> Self {
        self.hole = Some(hole);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == ChartKind::Placeholder
    }
}

/// Placeholders for each `(id, title)` of a page.
pub(crate) fn placeholders(charts: &[(&str, &str)]) -> Vec<ChartSpec> {
    charts
        .iter()
        .map(|(id, title)| ChartSpec::placeholder(id, title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_serialization() {
        let chart = ChartSpec::placeholder("category_popularity", "The Popularity of Each Category");
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["kind"], "placeholder");
        assert_eq!(json["template"], "plotly_dark");
        assert_eq!(json["data"]["type"], "empty");
        assert_eq!(json["data"]["payload"]["message"], EMPTY_SELECTION_MESSAGE);
        assert!(json.get("x_label").is_none());
        assert!(chart.is_placeholder());
    }

    #[test]
    fn test_series_serialization_skips_empty_text() {
        let series = ChartSeries::new("count", vec!["A".to_string()], vec![1.0]);
        let json = serde_json::to_value(&series).unwrap();
        assert!(json.get("text").is_none());
        assert!(json.get("marker_size").is_none());

        let sized = series.with_marker_size(vec![1.0]);
        let json = serde_json::to_value(&sized).unwrap();
        assert_eq!(json["marker_size"][0], 1.0);
    }

    #[test]
    fn test_chart_data_roundtrip() {
        let data = ChartData::Hierarchy(vec![HierarchyNode {
            id: "Texas".to_string(),
            parent: String::new(),
            label: "Texas".to_string(),
            value: 4.0,
        }]);
        let text = serde_json::to_string(&data).unwrap();
        let back: ChartData = serde_json::from_str(&text).unwrap();
        assert_eq!(back, data);
    }
}
