use super::{palette, placeholders, ChartData, ChartKind, ChartSeries, ChartSpec};
use crate::routes::home::HomeData;
use crate::services::aggregate::{PercentShare, ValueCount};

pub const CATEGORY_POPULARITY: &str = "category_popularity";
pub const GENDER_FREQUENCY: &str = "gender_frequency";
pub const SHIPPING_POPULARITY: &str = "shipping_popularity";

const CATEGORY_TITLE: &str = "The Popularity of Each Category";
const GENDER_TITLE: &str = "The Frequency of Gender";
const SHIPPING_TITLE: &str = "The Popularity of Shipping Type";

fn labels(counts: &[ValueCount]) -> Vec<String> {
    counts.iter().map(|c| c.value.clone()).collect()
}

fn values(counts: &[ValueCount]) -> Vec<f64> {
    counts.iter().map(|c| c.count as f64).collect()
}

/// Bar of unrounded category shares, labelled with whole percents.
pub fn category_bar(shares: &[PercentShare]) -> ChartSpec {
    let series = ChartSeries::new(
        "Popularity (%)",
        shares.iter().map(|s| s.value.clone()).collect(),
        shares.iter().map(|s| s.share).collect(),
    )
    .with_text(shares.iter().map(|s| format!("{:.0}%", s.percent)).collect());

    ChartSpec::new(CATEGORY_POPULARITY, ChartKind::Bar, CATEGORY_TITLE, ChartData::Series(vec![series]))
        .with_axes("Category", "Popularity (%)")
        .with_colors(&palette::PRIMARY)
        .with_hover("Category: %{x}<br>Popularity (%): %{y:.0f}%")
}

pub fn gender_donut(counts: &[ValueCount]) -> ChartSpec {
    let series = ChartSeries::new("Gender", labels(counts), values(counts));

    ChartSpec::new(GENDER_FREQUENCY, ChartKind::Pie, GENDER_TITLE, ChartData::Series(vec![series]))
        .with_colors(&palette::GENDER)
        .with_hole(0.4)
        .with_hover("Gender: %{label}<br>Frequency: %{value}")
        .with_legend()
}

/// Scatter whose bubble size is the shipping type count.
pub fn shipping_bubbles(counts: &[ValueCount]) -> ChartSpec {
    let sizes = values(counts);
    let series = ChartSeries::new("Frequency", labels(counts), sizes.clone()).with_marker_size(sizes);

    ChartSpec::new(SHIPPING_POPULARITY, ChartKind::Scatter, SHIPPING_TITLE, ChartData::Series(vec![series]))
        .with_axes("Shipping Type", "Frequency")
        .with_colors(&palette::PASTEL)
        .with_hover("Shipping Type: %{x}<br>Frequency: %{y}")
}

pub fn home_charts(data: &HomeData) -> Vec<ChartSpec> {
    if data.matched_rows == 0 {
        return placeholders(&[
            (CATEGORY_POPULARITY, CATEGORY_TITLE),
            (GENDER_FREQUENCY, GENDER_TITLE),
            (SHIPPING_POPULARITY, SHIPPING_TITLE),
        ]);
    }

    vec![
        category_bar(&data.category_popularity),
        gender_donut(&data.gender_frequency),
        shipping_bubbles(&data.shipping_popularity),
    ]
}
