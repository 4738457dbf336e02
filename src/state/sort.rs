// Sort tags attached to list items through `data-sort`

use std::cmp::Ordering;

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

pub const SORT_ATTRIBUTE: &str = "data-sort";

/// Integer tuple controlling an item's position. Entries that fail to parse are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortTag(Vec<Option<i64>>);

impl SortTag {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        Self(raw.split(',').map(|n| n.trim().parse().ok()).collect())
    }

    pub fn key(&self, index: usize) -> Option<i64> {
        self.0.get(index).copied().flatten()
    }

    /// Order on `key`, ties broken by the first element. Absent keys sort first.
    pub fn compare(&self, other: &Self, key: usize) -> Ordering {
        self.key(key)
            .cmp(&other.key(key))
            .then_with(|| self.key(0).cmp(&other.key(0)))
    }
}

impl From<Vec<i64>> for SortTag {
    fn from(keys: Vec<i64>) -> Self {
        Self(keys.into_iter().map(Some).collect())
    }
}

/// Indices of `tags` in sorted order. The sort is stable.
pub fn sorted_order(tags: &[SortTag], key: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tags.len()).collect();
    order.sort_by(|&a, &b| tags[a].compare(&tags[b], key));
    order
}
