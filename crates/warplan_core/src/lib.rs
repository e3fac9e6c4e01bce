//! # WarPlan Core
//!
//! Deterministic company allocation core for WarPlan.
//!
//! This crate contains **only** deterministic logic:
//! - No file IO
//! - No system randomness
//! - No global mutable state
//!
//! This separation enables:
//! - Reproducible plans (identical budget in, identical plan out)
//! - Headless use from any front end
//! - Exhaustive testing of the allocation rules
//!
//! ## Crate Structure
//!
//! - [`catalog`] - Recipe catalog and priority configuration
//! - [`allocator`] - Allocation policies and their cost model
//! - [`plan`] - Counting map of produced items for one run
//! - [`report`] - Sorted plan summaries
//! - [`error`] - Error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod plan;
pub mod report;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::allocator::{
        full_cost, marginal_cost, optimize_damage, optimize_damage_with, optimize_eco,
        MoneyStrategy, Policy,
    };
    pub use crate::catalog::{Catalog, RecipeInput};
    pub use crate::error::{CatalogError, ParsePolicyError, Result};
    pub use crate::plan::Plan;
    pub use crate::report::PlanSummary;
}
