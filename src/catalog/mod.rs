//! Recipe catalog wiring.
//!
//! The catalog is a JSON document (`catalogs/recipes.json` ships with the
//! crate) listing every recipe with its ingredients, hearts recovered, and
//! buff. `model` mirrors the file layout; `RecipeCatalog` is the loaded,
//! read-only view handed to the matcher.

pub mod index;
pub mod model;

pub use index::{CatalogEntry, RecipeCatalog};
pub use model::{CatalogFile, CatalogLoadError, Recipe, load_catalog_from_path, parse_catalog_str};

use std::fmt;
use std::path::PathBuf;

/// Relative path of the bundled catalog inside the repository.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/recipes.json";

pub(crate) const BUNDLED_CATALOG: &str = include_str!("../../catalogs/recipes.json");
pub(crate) const BUNDLED_CATALOG_ORIGIN: &str = "<bundled catalogs/recipes.json>";

/// Raw JSON of the bundled catalog.
pub fn bundled_catalog_json() -> &'static str {
    BUNDLED_CATALOG
}

/// Where the catalog is read from at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => f.write_str(BUNDLED_CATALOG_ORIGIN),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
