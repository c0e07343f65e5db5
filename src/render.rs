//! Output shapes for search results.
//!
//! JSON responses keep the `{"recipes": [...]}` / `{"error": "..."}` envelope
//! so existing consumers can read them unchanged. Text output is a compact
//! card per recipe.

use crate::catalog::Recipe;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub recipes: &'a [&'a Recipe],
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(err: impl std::fmt::Display) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Render one recipe as a short text card.
pub fn recipe_card(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("{} {}", ingredient.quantity, ingredient.name))
        .collect::<Vec<_>>()
        .join(", ");
    let buff = if recipe.buff.is_empty() {
        "none"
    } else {
        recipe.buff.as_str()
    };

    let mut card = String::new();
    let _ = writeln!(card, "{}", recipe.name);
    let _ = writeln!(card, "  ingredients: {ingredients}");
    let _ = writeln!(card, "  hearts: {}", recipe.hearts_recovered);
    let _ = writeln!(card, "  buff: {buff}");
    card
}

/// Text cards separated by blank lines, or a note when nothing matched.
pub fn render_text(recipes: &[&Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes matched.\n".to_string();
    }
    recipes
        .iter()
        .map(|recipe| recipe_card(recipe))
        .collect::<Vec<_>>()
        .join("\n")
}
