//! List command handler
//!
//! Handles `gcx list`: the recipes that can be built and the declared targets
//! that have no recipe yet.

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::build::artifact_path;
use crate::config::GcxConfig;
use crate::registry::Registry;
use crate::target::Target;
use crate::ui::Table;

#[derive(Serialize, Debug)]
struct RecipeEntry {
    name: String,
    arch: String,
    os: String,
    triple: String,
    artifact: String,
}

#[derive(Serialize, Debug)]
struct Listing {
    recipes: Vec<RecipeEntry>,
    unbound_targets: Vec<Target>,
}

fn listing(registry: &Registry, config: &GcxConfig) -> Listing {
    let recipes = registry
        .recipes()
        .iter()
        .map(|recipe| RecipeEntry {
            name: recipe.name.clone(),
            arch: recipe.target.arch.to_string(),
            os: recipe.target.os.to_string(),
            triple: recipe.target.triple(),
            artifact: artifact_path(
                &config.build.output_dir,
                &config.build.library,
                recipe.target,
            ),
        })
        .collect();

    Listing {
        recipes,
        unbound_targets: registry.unbound_targets(),
    }
}

/// Handle the `gcx list` command
pub fn handle_list(registry: &Registry, config: &GcxConfig, json: bool) -> Result<()> {
    let listing = listing(registry, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{} {}", "🎯".cyan(), "Build Recipes".bold());
    let mut table = Table::new(&["Recipe", "Target", "Triple", "Artifact"]);
    for entry in &listing.recipes {
        table.add_row(vec![
            entry.name.green().bold().to_string(),
            format!("{}/{}", entry.os, entry.arch),
            entry.triple.clone(),
            entry.artifact.clone(),
        ]);
    }
    table.print();

    if !listing.unbound_targets.is_empty() {
        println!();
        println!(
            "{} Declared targets without a recipe (add one under {} in gcx.toml):",
            "ℹ".blue(),
            "[[recipes]]".cyan()
        );
        for target in &listing.unbound_targets {
            println!("   {} ({})", target.to_string().dimmed(), target.triple());
        }
    }

    println!();
    println!("Usage: {}", "gcx build <recipe>...".cyan());
    Ok(())
}
