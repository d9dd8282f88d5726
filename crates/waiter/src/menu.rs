//! Menu loading.
//!
//! The menu file is read once at startup, validated, and kept in memory for
//! the life of the process. It is a JSON array of categories in tab order;
//! see `menu/menu.json` for the shape.

use std::path::Path;

use comandera_core::Menu;
use comandera_core::menu::MenuValidationError;

/// Errors that can occur when loading the menu file.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Reading the file failed.
    #[error("failed to read menu file {path}: {source}")]
    Io {
        /// The path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid menu JSON.
    #[error("failed to parse menu file {path}: {source}")]
    Parse {
        /// The path that was read.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The menu violates a structural invariant.
    #[error("invalid menu: {0}")]
    Invalid(#[from] MenuValidationError),
}

/// Load and validate the menu from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or fails
/// [`Menu::validate`].
pub fn load_menu(path: &Path) -> Result<Menu, MenuError> {
    let raw = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let menu: Menu = serde_json::from_str(&raw).map_err(|source| MenuError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    menu.validate()?;

    for category in menu.categories() {
        tracing::info!(
            category = %category.name,
            items = category.items.len(),
            "Loaded menu category"
        );
    }

    Ok(menu)
}
