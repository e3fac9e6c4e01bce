//! Company accounting for one allocation run.

use std::collections::BTreeMap;

use serde::Serialize;

/// Accumulated assignment of companies to products and materials.
///
/// A counting map: absent items read as zero via [`Plan::count`] and counts
/// only ever grow. Backed by a `BTreeMap` so iteration is already in the
/// lexicographic item order the summary report uses - never a `HashMap`,
/// whose randomized iteration order would leak into the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Plan {
    counts: BTreeMap<String, u32>,
}

impl Plan {
    /// Create an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Companies assigned to `item`, zero if absent.
    ///
    /// Reading never inserts an entry.
    #[must_use]
    pub fn count(&self, item: &str) -> u32 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Assign `amount` more companies to `item`.
    pub fn add(&mut self, item: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.counts.entry(item.to_string()).or_insert(0) += amount;
    }

    /// Total companies assigned across all items.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Check if no companies have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct items in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over `(item, count)` pairs in lexicographic item order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(item, count)| (item.as_str(), *count))
    }
}
