//! Search the recipe catalog by ingredient.
//!
//! Usage:
//!   recipe-search -i "Hyrule Bass" -i "Raw Meat" --condition AND
//!   recipe-search --ingredients "Spicy Pepper,Hyrule Bass" --format text
//!   recipe-search --suggest hy
//!
//! Prints `{"recipes": [...]}` on success (an empty list is still success).
//! Invalid queries exit with status 2; catalog load failures exit with 1.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use recipe_finder::render::{ErrorResponse, SearchResponse, render_text};
use recipe_finder::{
    IngredientName, RecipeCatalog, init_tracing, resolve_catalog_source, search_by_names,
    split_ingredient_list,
};
use std::path::PathBuf;
use tracing::{debug, info};

const EXIT_INVALID_QUERY: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "recipe-search")]
#[command(about = "Find recipes that use the given ingredients")]
struct Cli {
    /// Ingredient to match; repeat for several (e.g. -i "Hyrule Bass").
    #[arg(short = 'i', long = "ingredient", value_name = "NAME")]
    ingredients: Vec<String>,
    /// Comma-separated ingredients, appended after any --ingredient values.
    #[arg(long = "ingredients", value_name = "LIST")]
    ingredient_list: Option<String>,
    /// Match condition: OR (any ingredient) or AND (every ingredient).
    #[arg(short, long, default_value = "OR")]
    condition: String,
    /// Catalog file to load instead of the bundled one (or set RECIPE_CATALOG).
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Print known ingredient names starting with PREFIX and exit.
    #[arg(long, value_name = "PREFIX")]
    suggest: Option<String>,
    /// Print every known ingredient name and exit.
    #[arg(long)]
    list_ingredients: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() {
    init_tracing();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    if cli.list_ingredients {
        for name in IngredientName::ALL {
            println!("{name}");
        }
        return Ok(0);
    }

    if let Some(prefix) = cli.suggest.as_deref() {
        for name in IngredientName::suggest(prefix) {
            println!("{name}");
        }
        return Ok(0);
    }

    let source = resolve_catalog_source(cli.catalog.as_deref());
    let catalog = RecipeCatalog::load(&source).context("recipe catalog unavailable")?;

    let mut requested = cli.ingredients.clone();
    if let Some(list) = cli.ingredient_list.as_deref() {
        requested.extend(split_ingredient_list(list));
    }
    debug!(?requested, condition = %cli.condition, "running search");

    match search_by_names(&catalog, &requested, Some(cli.condition.as_str())) {
        Ok(results) => {
            info!(matches = results.len(), "search complete");
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string(&SearchResponse { recipes: &results })?
                ),
                OutputFormat::Text => print!("{}", render_text(&results)),
            }
            Ok(0)
        }
        Err(err) => {
            eprintln!("recipe-search: invalid query: {err}");
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string(&ErrorResponse::new(&err))?);
            }
            Ok(EXIT_INVALID_QUERY)
        }
    }
}
