//! Ingredient matching over a loaded catalog.
//!
//! `search` is a stable filter: it walks the catalog in order and keeps each
//! recipe whose ingredient set satisfies the condition. It borrows the
//! catalog and returns references into it, so repeated queries against the
//! same catalog always produce the same ordered result.

use crate::catalog::{Recipe, RecipeCatalog};
use crate::ingredient::{IngredientName, IngredientSet, UnknownIngredient};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// At least one requested ingredient is present.
    #[serde(rename = "OR")]
    Or,
    /// Every requested ingredient is present; extra recipe ingredients are fine.
    #[serde(rename = "AND")]
    And,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Or => "OR",
            Condition::And => "AND",
        }
    }

    fn admits(self, matched: usize, requested: usize) -> bool {
        match self {
            Condition::Or => matched >= 1,
            Condition::And => matched >= 1 && matched == requested,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = InvalidQuery;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "OR" => Ok(Condition::Or),
            "AND" => Ok(Condition::And),
            other => Err(InvalidQuery::UnknownCondition(other.to_string())),
        }
    }
}

/// Per-request rejection. Nothing is matched when a query is invalid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidQuery {
    #[error("no ingredients requested")]
    NoIngredients,

    #[error("condition is required (expected OR or AND)")]
    MissingCondition,

    #[error("unknown condition '{0}' (expected OR or AND)")]
    UnknownCondition(String),

    #[error(transparent)]
    UnknownIngredient(#[from] UnknownIngredient),
}

/// A validated request: at least one ingredient plus a condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    ingredients: Vec<IngredientName>,
    condition: Condition,
}

impl Query {
    pub fn new(
        ingredients: Vec<IngredientName>,
        condition: Condition,
    ) -> Result<Self, InvalidQuery> {
        if ingredients.is_empty() {
            return Err(InvalidQuery::NoIngredients);
        }
        Ok(Self {
            ingredients,
            condition,
        })
    }

    /// Build a query from caller-supplied strings.
    ///
    /// The condition is not defaulted here; callers that want `OR` as a
    /// default pass it explicitly.
    pub fn parse<S: AsRef<str>>(
        ingredients: &[S],
        condition: Option<&str>,
    ) -> Result<Self, InvalidQuery> {
        if ingredients.is_empty() {
            return Err(InvalidQuery::NoIngredients);
        }
        let condition = condition
            .ok_or(InvalidQuery::MissingCondition)?
            .parse::<Condition>()?;
        let ingredients = ingredients
            .iter()
            .map(|raw| raw.as_ref().parse::<IngredientName>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ingredients, condition)
    }

    pub fn ingredients(&self) -> &[IngredientName] {
        &self.ingredients
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Run this query against `catalog`.
    pub fn run<'a>(&self, catalog: &'a RecipeCatalog) -> Vec<&'a Recipe> {
        let requested: IngredientSet = self.ingredients.iter().copied().collect();
        filter(catalog, &requested, self.condition)
    }
}

/// Recipes from `catalog` matching `requested` under `condition`, in catalog
/// order.
///
/// Duplicate requested names count once. An empty request is rejected; an
/// empty catalog or no matches is an empty, successful result.
pub fn search<'a>(
    catalog: &'a RecipeCatalog,
    requested: &[IngredientName],
    condition: Condition,
) -> Result<Vec<&'a Recipe>, InvalidQuery> {
    if requested.is_empty() {
        return Err(InvalidQuery::NoIngredients);
    }
    let requested: IngredientSet = requested.iter().copied().collect();
    Ok(filter(catalog, &requested, condition))
}

/// String-level entry point for transport glue.
pub fn search_by_names<'a, S: AsRef<str>>(
    catalog: &'a RecipeCatalog,
    requested: &[S],
    condition: Option<&str>,
) -> Result<Vec<&'a Recipe>, InvalidQuery> {
    Ok(Query::parse(requested, condition)?.run(catalog))
}

fn filter<'a>(
    catalog: &'a RecipeCatalog,
    requested: &IngredientSet,
    condition: Condition,
) -> Vec<&'a Recipe> {
    let wanted = requested.len();
    catalog
        .entries()
        .iter()
        .filter(|entry| condition.admits(entry.ingredients().overlap(requested), wanted))
        .map(|entry| entry.recipe())
        .collect()
}
