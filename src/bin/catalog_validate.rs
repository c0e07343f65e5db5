//! Validate a recipe catalog file against the catalog schema, then load it.
//!
//! Usage:
//!   catalog-validate                         # bundled catalog
//!   catalog-validate --file catalogs/recipes.json
//!   catalog-validate --file mine.json --schema schema/recipe_catalog.schema.json

use anyhow::{Context, Result};
use clap::Parser;
use recipe_finder::catalog::bundled_catalog_json;
use recipe_finder::{CatalogSchema, CatalogSource, RecipeCatalog, init_tracing};
use serde_json::Value;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate a recipe catalog against the catalog schema")]
struct Cli {
    /// Catalog file to check; the bundled catalog when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Schema to validate against; the bundled schema when omitted.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let schema = match cli.schema.as_deref() {
        Some(path) => CatalogSchema::load(path)?,
        None => CatalogSchema::bundled()?,
    };

    let (source, input): (CatalogSource, Value) = match cli.file {
        Some(path) => {
            let input: Value = serde_json::from_reader(
                File::open(&path)
                    .with_context(|| format!("opening catalog {}", path.display()))?,
            )
            .with_context(|| format!("parsing catalog {}", path.display()))?;
            (CatalogSource::File(path), input)
        }
        None => (
            CatalogSource::Bundled,
            serde_json::from_str::<Value>(bundled_catalog_json()).context("parsing bundled catalog")?,
        ),
    };
    schema.validate(&input)?;

    let catalog = RecipeCatalog::load(&source)?;
    info!(source = %source, "catalog valid");
    println!("{}: {} recipes", source, catalog.len());
    Ok(())
}
