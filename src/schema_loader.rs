//! JSON Schema check for catalog files.
//!
//! The catalog loader only parses structure; this is the stricter check used
//! by `catalog-validate` before a catalog file is shipped. The bundled schema
//! lives at `schema/recipe_catalog.schema.json`.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

const BUNDLED_CATALOG_SCHEMA: &str = include_str!("../schema/recipe_catalog.schema.json");

/// Compiled catalog schema.
pub struct CatalogSchema {
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// The schema compiled into the crate.
    pub fn bundled() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(BUNDLED_CATALOG_SCHEMA).context("parsing bundled catalog schema")?;
        Self::compile(&raw, "bundled catalog schema")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&raw, &path.display().to_string())
    }

    fn compile(raw: &Value, label: &str) -> Result<Self> {
        let compiled =
            JSONSchema::compile(raw).map_err(|err| anyhow!("compiling {label}: {err}"))?;
        Ok(Self { compiled })
    }

    /// Validate `instance`, reporting every violation in one error.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {err}", err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed schema validation:\n{}", details);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BUNDLED_CATALOG;
    use serde_json::json;

    #[test]
    fn bundled_catalog_satisfies_bundled_schema() {
        let schema = CatalogSchema::bundled().unwrap();
        let catalog: Value = serde_json::from_str(BUNDLED_CATALOG).unwrap();
        schema.validate(&catalog).unwrap();
    }

    #[test]
    fn rejects_empty_ingredient_lists_and_unknown_names() {
        let schema = CatalogSchema::bundled().unwrap();
        let empty = json!({"recipes": [{
            "name": "Dubious Food",
            "ingredients": [],
            "heartsRecovered": 1
        }]});
        assert!(schema.validate(&empty).is_err());

        let unknown = json!({"recipes": [{
            "name": "Apple Pie",
            "ingredients": [{"name": "Apple", "quantity": 1}],
            "heartsRecovered": 1
        }]});
        let err = schema.validate(&unknown).unwrap_err();
        assert!(err.to_string().contains("/recipes/0/ingredients/0/name"));
    }

    #[test]
    fn accepts_missing_buff() {
        let schema = CatalogSchema::bundled().unwrap();
        let catalog = json!({"recipes": [{
            "name": "Fish Skewer",
            "ingredients": [{"name": "Hyrule Bass", "quantity": 2}],
            "heartsRecovered": 4
        }]});
        schema.validate(&catalog).unwrap();
    }
}
