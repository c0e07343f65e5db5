pub mod catalog;
pub mod ingredient;
pub mod matcher;
pub mod render;
pub mod schema_loader;

pub use catalog::{
    CatalogEntry, CatalogFile, CatalogLoadError, CatalogSource, DEFAULT_CATALOG_PATH, Recipe,
    RecipeCatalog, load_catalog_from_path, parse_catalog_str,
};
pub use ingredient::{Ingredient, IngredientName, IngredientSet, UnknownIngredient};
pub use matcher::{Condition, InvalidQuery, Query, search, search_by_names};
pub use schema_loader::CatalogSchema;

use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a catalog file to load instead of the bundled one.
pub const CATALOG_ENV_VAR: &str = "RECIPE_CATALOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Pick the catalog source: CLI flag, then `RECIPE_CATALOG`, then the
/// bundled catalog.
pub fn resolve_catalog_source(cli_override: Option<&Path>) -> CatalogSource {
    catalog_source_from(cli_override, env::var(CATALOG_ENV_VAR).ok().as_deref())
}

fn catalog_source_from(cli_override: Option<&Path>, env_hint: Option<&str>) -> CatalogSource {
    if let Some(path) = cli_override {
        return CatalogSource::File(path.to_path_buf());
    }
    match env_hint.map(str::trim) {
        Some(hint) if !hint.is_empty() => CatalogSource::File(PathBuf::from(hint)),
        _ => CatalogSource::Bundled,
    }
}

/// Split a comma-separated ingredient list.
///
/// Ingredient names contain spaces, so only commas separate entries. Entries
/// are trimmed and blanks dropped.
pub fn split_ingredient_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Install the stderr tracing subscriber used by the binaries.
///
/// Honors `RUST_LOG`; defaults to warnings only so stdout stays machine
/// readable.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
