//! # WarPlan CLI
//!
//! Command-line front end for the allocation core:
//! - Mode and budget parsing
//! - Catalog file loading
//! - Plan summary output
//!
//! All decision logic lives in `warplan_core`; this crate is I/O glue.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
