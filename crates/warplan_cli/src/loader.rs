//! Catalog file loading.
//!
//! Reads catalog definitions from RON files and hands validated catalogs
//! to the allocator. The core's catalog module contains no IO - all file
//! reading happens here.

use std::path::Path;

use thiserror::Error;
use warplan_core::catalog::Catalog;
use warplan_core::error::CatalogError;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file.
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file contents failed to parse or validate.
    #[error("Invalid catalog file '{path}': {source}")]
    Invalid {
        /// Path to the file.
        path: String,
        /// Underlying catalog error.
        #[source]
        source: CatalogError,
    },
}

/// Load a catalog from `path`, or the built-in WarEra catalog when `None`.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, parsed, or
/// validated.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, LoadError> {
    let Some(path) = path else {
        return Ok(Catalog::warera());
    };

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Catalog::from_ron_str(&text).map_err(|source| LoadError::Invalid {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_catalog_without_path() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog, Catalog::warera());
    }

    #[test]
    fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            Catalog(
                recipes: {{
                    "Pill": [(material: "Mysterious Plant")],
                    "Steel": [(material: "Iron")],
                    "Concrete": [(material: "Limestone")],
                }},
                boost_product: "Pill",
                money_priority: ["Steel", "Concrete"],
            )
            "#
        )
        .unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.money_priority, vec!["Steel", "Concrete"]);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_catalog(Some(Path::new("/nonexistent/catalog.ron")));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a catalog").unwrap();

        let err = load_catalog(Some(file.path())).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
        assert!(err.to_string().contains("Invalid catalog file"));
    }
}
