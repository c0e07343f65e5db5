#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn recipe_search() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recipe-search"));
    cmd.env_remove("RECIPE_CATALOG").env_remove("RUST_LOG");
    cmd
}

pub fn catalog_validate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-validate"));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    Ok(output)
}
