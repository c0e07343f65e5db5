#![allow(dead_code)]

use anyhow::{Context, Result};
use recipe_finder::{CatalogSource, Recipe, RecipeCatalog};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

// The two-recipe catalog used by the end-to-end scenarios.
pub fn scenario_catalog_json() -> Value {
    json!({
        "recipes": [
            {
                "name": "Hearty Salmon Meal",
                "ingredients": [
                    {"name": "Hyrule Bass", "quantity": 1},
                    {"name": "Raw Meat", "quantity": 1}
                ],
                "heartsRecovered": 4,
                "buff": ""
            },
            {
                "name": "Spicy Pepper Seafood",
                "ingredients": [
                    {"name": "Spicy Pepper", "quantity": 1},
                    {"name": "Hyrule Bass", "quantity": 1}
                ],
                "heartsRecovered": 3,
                "buff": "Cold Resistance"
            }
        ]
    })
}

pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer(&mut file, value)?;
    Ok(file)
}

pub fn write_raw_catalog(contents: &str) -> Result<NamedTempFile> {
    let file = NamedTempFile::new().context("failed to allocate catalog file")?;
    std::fs::write(file.path(), contents)?;
    Ok(file)
}

pub fn load_catalog_file(file: &NamedTempFile) -> Result<RecipeCatalog> {
    RecipeCatalog::load(&CatalogSource::File(file.path().to_path_buf()))
        .context("failed to load fixture catalog")
}

pub fn scenario_catalog() -> Result<RecipeCatalog> {
    let file = write_catalog(&scenario_catalog_json())?;
    load_catalog_file(&file)
}

pub fn recipe_names(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|recipe| recipe.name.clone()).collect()
}
