use super::{palette, placeholders, ChartData, ChartKind, ChartSeries, ChartSpec};
use crate::routes::products::ProductsData;
use crate::services::aggregate::{CrossTab, PercentShare, ValueCount};

pub const TOP_PRODUCTS: &str = "top_products";
pub const SIZE_POPULARITY: &str = "size_popularity";
pub const CATEGORY_BY_SEASON: &str = "category_by_season";

const TOP_PRODUCTS_TITLE: &str = "Top 10 Products";
const SIZE_TITLE: &str = "The Popularity of Size";
const SEASON_TITLE: &str = "The Frequency of Category Via Seasons";

/// Bar of the best sellers with their share of the listed total.
pub fn top_products_bar(shares: &[PercentShare]) -> ChartSpec {
    let series = ChartSeries::new(
        "Popularity (%)",
        shares.iter().map(|s| s.value.clone()).collect(),
        shares.iter().map(|s| s.share).collect(),
    )
    .with_text(shares.iter().map(|s| format!("{:.0}%", s.percent)).collect());

    ChartSpec::new(TOP_PRODUCTS, ChartKind::Bar, TOP_PRODUCTS_TITLE, ChartData::Series(vec![series]))
        .with_axes("Product", "Popularity (%)")
        .with_colors(&palette::TOP_PRODUCTS)
        .with_hover("Product: %{x}<br>Popularity (%): %{y:.0f}%")
}

pub fn size_pie(counts: &[ValueCount]) -> ChartSpec {
    let series = ChartSeries::new(
        "Size",
        counts.iter().map(|c| c.value.clone()).collect(),
        counts.iter().map(|c| c.count as f64).collect(),
    );

    ChartSpec::new(SIZE_POPULARITY, ChartKind::Pie, SIZE_TITLE, ChartData::Series(vec![series]))
        .with_colors(&palette::PRIMARY)
        .with_hover("Size: %{label}<br>Popularity (%): %{percent}")
        .with_legend()
}

/// One line per category across the seasons of the table.
pub fn season_lines(tab: &CrossTab) -> ChartSpec {
    let series = tab
        .columns
        .iter()
        .map(|category| {
            let counts = tab.column_counts(category).into_iter().map(|c| c as f64).collect();
            ChartSeries::new(category.clone(), tab.rows.clone(), counts)
        })
        .collect();

    ChartSpec::new(CATEGORY_BY_SEASON, ChartKind::Line, SEASON_TITLE, ChartData::Series(series))
        .with_axes("Season", "Popularity")
        .with_colors(&palette::PASTEL)
        .with_hover("Season: %{x}<br>Popularity: %{y}")
        .with_legend()
        .with_height(565)
}

pub fn products_charts(data: &ProductsData) -> Vec<ChartSpec> {
    if data.matched_rows == 0 {
        return placeholders(&[
            (TOP_PRODUCTS, TOP_PRODUCTS_TITLE),
            (SIZE_POPULARITY, SIZE_TITLE),
            (CATEGORY_BY_SEASON, SEASON_TITLE),
        ]);
    }

    vec![
        top_products_bar(&data.top_products),
        size_pie(&data.size_popularity),
        season_lines(&data.season_category),
    ]
}
