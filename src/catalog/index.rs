//! Loaded, read-only view of a recipe catalog.
//!
//! Each recipe is paired with the distinct set of ingredient names it uses,
//! computed once at load so the matcher never rescans ingredient lists. The
//! catalog is never mutated after construction; share it by reference or
//! behind an `Arc`.

use crate::catalog::{
    BUNDLED_CATALOG, BUNDLED_CATALOG_ORIGIN, CatalogFile, CatalogLoadError, CatalogSource, Recipe,
    load_catalog_from_path, parse_catalog_str,
};
use crate::ingredient::IngredientSet;
use std::collections::BTreeSet;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A recipe plus its de-duplicated ingredient names.
pub struct CatalogEntry {
    recipe: Recipe,
    ingredients: IngredientSet,
}

impl CatalogEntry {
    fn new(recipe: Recipe) -> Self {
        let ingredients = recipe.ingredient_names().collect();
        Self {
            recipe,
            ingredients,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered recipe catalog with per-recipe ingredient sets.
pub struct RecipeCatalog {
    entries: Vec<CatalogEntry>,
}

impl RecipeCatalog {
    /// Load the catalog from the resolved source.
    ///
    /// Only the JSON structure is checked. Duplicate recipe names are logged
    /// and kept since the catalog does not promise unique names.
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogLoadError> {
        let file = match source {
            CatalogSource::Bundled => parse_catalog_str(BUNDLED_CATALOG, BUNDLED_CATALOG_ORIGIN)?,
            CatalogSource::File(path) => load_catalog_from_path(path)?,
        };
        let catalog = Self::from(file);
        info!(
            source = %source,
            recipes = catalog.len(),
            "loaded recipe catalog"
        );
        Ok(catalog)
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogLoadError> {
        Self::load(&CatalogSource::Bundled)
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        warn_on_duplicate_names(&recipes);
        Self {
            entries: recipes.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.entries.iter().map(CatalogEntry::recipe)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<CatalogFile> for RecipeCatalog {
    fn from(file: CatalogFile) -> Self {
        Self::from_recipes(file.recipes)
    }
}

fn warn_on_duplicate_names(recipes: &[Recipe]) {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.name.as_str()) {
            warn!(recipe = %recipe.name, "duplicate recipe name in catalog");
        }
    }
}
