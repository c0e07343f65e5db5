//! Serde model for recipe catalog files and the structural loader.

use crate::ingredient::{Ingredient, IngredientName};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub hearts_recovered: u32,
    #[serde(default)]
    pub buff: String,
}

impl Recipe {
    /// Ingredient names in recipe order, duplicates included.
    pub fn ingredient_names(&self) -> impl Iterator<Item = IngredientName> + '_ {
        self.ingredients.iter().map(|ingredient| ingredient.name)
    }
}

/// On-disk catalog layout: `{"recipes": [...]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub recipes: Vec<Recipe>,
}

/// Startup failures while reading the recipe catalog.
///
/// None of these are recoverable per request; a process that hits one must
/// not start answering queries.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("reading recipe catalog {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing recipe catalog {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse catalog JSON. `origin` only labels errors.
pub fn parse_catalog_str(data: &str, origin: &str) -> Result<CatalogFile, CatalogLoadError> {
    serde_json::from_str(data).map_err(|source| CatalogLoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}

pub fn load_catalog_from_path(path: &Path) -> Result<CatalogFile, CatalogLoadError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_str(&data, &path.display().to_string())
}
