//! Row filter over the immutable dataset.

use crate::models::{Dataset, FilterCriteria, Record};

/// Borrowed subset of dataset rows, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct View<'a> {
    rows: Vec<&'a Record>,
}

impl<'a> View<'a> {
    pub fn new(rows: Vec<&'a Record>) -> Self {
        Self { rows }
    }

    /// Every row of the dataset.
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            rows: dataset.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().copied()
    }

    /// Sub-view of the rows satisfying `predicate`, order preserved.
    pub fn retain_where<F>(&self, predicate: F) -> View<'a>
    where
        F: Fn(&Record) -> bool,
    {
        View {
            rows: self.rows.iter().copied().filter(|r| predicate(r)).collect(),
        }
    }
}

/// True iff `record` satisfies every active predicate of `criteria`.
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    criteria.categories.contains(&record.category)
        && criteria.sizes.contains(&record.size)
        && criteria.location.matches(&record.location)
        && criteria
            .seasons
            .as_ref()
            .map_or(true, |seasons| seasons.contains(&record.season))
}

/// Rows of `dataset` matching `criteria`. The dataset is never modified.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> View<'a> {
    if criteria.categories.is_empty() || criteria.sizes.is_empty() {
        return View::default();
    }

    View {
        rows: dataset.iter().filter(|r| matches(r, criteria)).collect(),
    }
}
