//! Scalar and grouped aggregates over a filtered [`View`].
//!
//! All functions are pure and total: an empty view produces 0, `None`, or an
//! empty table, never a panic or a division by zero.
//!
//! # Ordering rules
//!
//! Grouped results are deterministic. Rankings sort by the measure descending
//! and break ties by ascending group value (byte-wise string order). Tables
//! keyed by group (`pivot_two_categoricals`) list groups in ascending order.
//!
//! # Rounding
//!
//! Percentages and display values round half away from zero (`f64::round`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{CategoricalField, NumericField};
use crate::services::filter::View;

/// Number of rows carrying one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// A value count together with its share of the table total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentShare {
    pub value: String,
    pub count: usize,
    /// Unrounded `count / total * 100`
    pub share: f64,
    /// `share` rounded to a whole percent
    pub percent: f64,
}

/// A group and one aggregated measure (sum or mean).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMeasure {
    pub group: String,
    pub value: f64,
}

/// Cross-tabulated counts of two categorical fields.
///
/// `counts[r][c]` is the number of rows with `rows[r]` and `columns[c]`.
/// A combination that never occurs is a stored zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTab {
    pub row_field: CategoricalField,
    pub column_field: CategoricalField,
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Count for a pair; 0 when either value is absent from the table.
    pub fn get(&self, row: &str, column: &str) -> usize {
        let r = self.rows.iter().position(|v| v == row);
        let c = self.columns.iter().position(|v| v == column);
        match (r, c) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn row_total(&self, row: &str) -> usize {
        self.rows
            .iter()
            .position(|v| v == row)
            .map(|r| self.counts[r].iter().sum())
            .unwrap_or(0)
    }

    /// Counts of one column across all rows, in row order.
    pub fn column_counts(&self, column: &str) -> Vec<usize> {
        match self.columns.iter().position(|v| v == column) {
            Some(c) => self.counts.iter().map(|row| row[c]).collect(),
            None => vec![0; self.rows.len()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn rank_descending(a: &GroupMeasure, b: &GroupMeasure) -> Ordering {
    b.value
        .partial_cmp(&a.value)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.group.cmp(&b.group))
}

// ============================================================================
// Scalar aggregates
// ============================================================================

pub fn total_rows(view: &View<'_>) -> usize {
    view.len()
}

/// Sum of a numeric field; 0 for an empty view.
pub fn sum_field(view: &View<'_>, field: NumericField) -> f64 {
    view.iter().map(|r| r.numeric(field)).sum()
}

/// Arithmetic mean of a numeric field; `None` for an empty view.
pub fn mean_field(view: &View<'_>, field: NumericField) -> Option<f64> {
    if view.is_empty() {
        return None;
    }
    Some(sum_field(view, field) / view.len() as f64)
}

/// Mean review rating; `None` for an empty view (shown as `N/A`).
pub fn mean_rating(view: &View<'_>) -> Option<f64> {
    mean_field(view, NumericField::ReviewRating)
}

pub fn distinct_count(view: &View<'_>, field: CategoricalField) -> usize {
    view.iter()
        .map(|r| r.categorical(field))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Distinct values of a field in ascending order.
pub fn distinct_values(view: &View<'_>, field: CategoricalField) -> Vec<String> {
    view.iter()
        .map(|r| r.categorical(field))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Grouped aggregates
// ============================================================================

/// Frequency of each value, most frequent first, ties by ascending value.
pub fn value_counts(view: &View<'_>, field: CategoricalField) -> Vec<ValueCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in view.iter() {
        *counts.entry(record.categorical(field)).or_insert(0) += 1;
    }

    let mut result: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    result
}

/// Share of each count in the total of `counts`, input order kept.
pub fn percentage_of_total(counts: &[ValueCount]) -> Vec<PercentShare> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .iter()
        .map(|c| {
            let share = c.count as f64 / total as f64 * 100.0;
            PercentShare {
                value: c.value.clone(),
                count: c.count,
                share,
                percent: share.round(),
            }
        })
        .collect()
}

fn group_totals<'v>(
    view: &'v View<'_>,
    group: CategoricalField,
    measure: NumericField,
) -> HashMap<&'v str, (f64, usize)> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in view.iter() {
        let entry = totals.entry(record.categorical(group)).or_insert((0.0, 0));
        entry.0 += record.numeric(measure);
        entry.1 += 1;
    }
    totals
}

/// Per-group sum of `measure`, largest first.
pub fn group_sum(view: &View<'_>, group: CategoricalField, measure: NumericField) -> Vec<GroupMeasure> {
    let mut result: Vec<GroupMeasure> = group_totals(view, group, measure)
        .into_iter()
        .map(|(g, (sum, _))| GroupMeasure {
            group: g.to_string(),
            value: sum,
        })
        .collect();
    result.sort_by(rank_descending);
    result
}

/// Per-group mean of `measure`, largest first.
pub fn group_mean(view: &View<'_>, group: CategoricalField, measure: NumericField) -> Vec<GroupMeasure> {
    let mut result: Vec<GroupMeasure> = group_totals(view, group, measure)
        .into_iter()
        .map(|(g, (sum, count))| GroupMeasure {
            group: g.to_string(),
            value: sum / count as f64,
        })
        .collect();
    result.sort_by(rank_descending);
    result
}

/// The `n` groups with the largest summed `measure`, ranked.
///
/// At the n-th boundary, equal sums are resolved by ascending group value.
pub fn top_n_by_group_sum(
    view: &View<'_>,
    group: CategoricalField,
    measure: NumericField,
    n: usize,
) -> Vec<String> {
    group_sum(view, group, measure)
        .into_iter()
        .take(n)
        .map(|g| g.group)
        .collect()
}

/// The `n` groups with the largest mean `measure`, with their means.
pub fn top_n_by_group_mean(
    view: &View<'_>,
    group: CategoricalField,
    measure: NumericField,
    n: usize,
) -> Vec<GroupMeasure> {
    let mut means = group_mean(view, group, measure);
    means.truncate(n);
    means
}

/// Rows of `view` whose `field` value is one of `groups`.
pub fn restrict_to_groups<'a>(view: &View<'a>, field: CategoricalField, groups: &[String]) -> View<'a> {
    let members: BTreeSet<&str> = groups.iter().map(String::as_str).collect();
    view.retain_where(|r| members.contains(r.categorical(field)))
}

/// Ranked top groups and the rows that belong to them.
#[derive(Debug, Clone)]
pub struct TopGroups<'a> {
    /// Group values, largest sum first
    pub ranked: Vec<String>,
    /// Member rows in view order
    pub rows: View<'a>,
}

/// Top-N groups by summed `measure`, then back to the member rows.
pub fn top_n_rows<'a>(
    view: &View<'a>,
    group: CategoricalField,
    measure: NumericField,
    n: usize,
) -> TopGroups<'a> {
    let ranked = top_n_by_group_sum(view, group, measure, n);
    let rows = restrict_to_groups(view, group, &ranked);
    TopGroups { ranked, rows }
}

/// Count of every `column_field` value within every `row_field` value.
pub fn pivot_two_categoricals(
    view: &View<'_>,
    row_field: CategoricalField,
    column_field: CategoricalField,
) -> CrossTab {
    let mut cells: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    let mut column_values: BTreeSet<&str> = BTreeSet::new();

    for record in view.iter() {
        let row = record.categorical(row_field);
        let column = record.categorical(column_field);
        column_values.insert(column);
        *cells.entry(row).or_default().entry(column).or_insert(0) += 1;
    }

    let columns: Vec<String> = column_values.iter().map(|c| c.to_string()).collect();
    let mut rows = Vec::with_capacity(cells.len());
    let mut counts = Vec::with_capacity(cells.len());
    for (row, row_cells) in &cells {
        rows.push(row.to_string());
        counts.push(
            column_values
                .iter()
                .map(|c| row_cells.get(c).copied().unwrap_or(0))
                .collect(),
        );
    }

    CrossTab {
        row_field,
        column_field,
        rows,
        columns,
        counts,
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
