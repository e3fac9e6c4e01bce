//! Sorted plan summaries for human consumption.

use std::fmt;

use crate::plan::Plan;

/// Displayable summary of a completed plan.
///
/// Lists `item: count` pairs sorted lexicographically by item name,
/// followed by the total number of companies actually used - which may be
/// less than the requested budget when a remainder was unspendable.
#[derive(Debug, Clone, Copy)]
pub struct PlanSummary<'a> {
    plan: &'a Plan,
}

impl<'a> PlanSummary<'a> {
    /// Create a summary borrowing `plan`.
    #[must_use]
    pub const fn new(plan: &'a Plan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for PlanSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== WarEra Company Setup ===")?;
        writeln!(f)?;
        for (item, count) in self.plan.iter() {
            writeln!(f, "{item}: {count}")?;
        }
        writeln!(f)?;
        write!(f, "Total companies used: {}", self.plan.total())
    }
}
