//! Error types for catalog data and mode parsing.

use thiserror::Error;

/// Result type alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while parsing or validating catalog data.
///
/// The allocator itself has no error paths: any valid catalog and budget
/// produce a valid (possibly empty) plan. Errors only exist at the data
/// boundary, before a catalog reaches the allocator.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog text was not valid RON.
    #[error("Failed to parse catalog data: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// A priority list references a product with no recipe.
    #[error("{list} priority references unknown product '{product}'")]
    UnknownPriorityProduct {
        /// Which priority list contained the reference.
        list: &'static str,
        /// The product name that has no recipe.
        product: String,
    },

    /// A money product's recipe does not consume exactly one material unit.
    ///
    /// Money products are priced at a fixed two companies per unit (one for
    /// the product, one for its material), so their recipes must match.
    #[error("Money product '{product}' must consume exactly one material unit, found {units}")]
    MoneyRecipeShape {
        /// The offending money product.
        product: String,
        /// Total material units its recipe consumes.
        units: u32,
    },
}

/// Error returned when a mode string names no known allocation policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mode '{0}', expected 'eco' or 'damage'")]
pub struct ParsePolicyError(pub String);
