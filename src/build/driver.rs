use super::compose::{compose_args, display_command};
use super::error::BuildError;
use super::executor::Executor;
use super::spec::BuildSpec;
use super::workdir::WorkdirGuard;
use crate::registry::Recipe;
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Default, Clone, Copy)]
pub struct BuildOptions {
    /// Print the composed command line before running it
    pub verbose: bool,
    /// Print the command line and stop; nothing is created or executed
    pub dry_run: bool,
}

/// Runs recipes against one build spec, one after another.
pub struct Driver<'a, E: Executor> {
    root: PathBuf,
    spec: &'a BuildSpec,
    executor: E,
    options: BuildOptions,
}

impl<'a, E: Executor> Driver<'a, E> {
    pub fn new(root: impl Into<PathBuf>, spec: &'a BuildSpec, executor: E) -> Self {
        Self {
            root: root.into(),
            spec,
            executor,
            options: BuildOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Build one recipe and return the artifact path.
    ///
    /// Runs inside the project root; the caller's working directory is back
    /// in place when this returns, whichever way it returns.
    pub fn run_recipe(&self, recipe: &Recipe) -> Result<PathBuf, BuildError> {
        let _workdir = WorkdirGuard::enter(&self.root)?;

        let target = recipe.target;
        let triple = target.triple();
        let artifact_name = self.spec.artifact_name(target);
        let artifact = self.root.join(self.spec.output_path(target));

        println!(
            "{} Building {} for {}",
            "🔨".cyan(),
            artifact_name.bold(),
            triple.cyan()
        );

        let args = compose_args(self.spec, target);
        if self.options.verbose || self.options.dry_run {
            println!("   {} {}", "$".dimmed(), display_command(&args).dimmed());
        }
        if self.options.dry_run {
            println!("{} Dry run, skipped {}", "!".yellow(), recipe.name);
            return Ok(artifact);
        }

        let output_dir = self.spec.output_dir_for(target.arch);
        fs::create_dir_all(&output_dir).map_err(|e| {
            BuildError::io(format!("Failed to create {}", output_dir.display()), e)
        })?;

        let start_time = Instant::now();
        let status = self.executor.execute(&args)?;

        if status != 0 {
            eprintln!(
                "{} Failed to build {} for {} (exit status {})",
                "x".red(),
                artifact_name,
                triple,
                status
            );
            return Err(BuildError::ToolchainFailed {
                recipe: recipe.name.clone(),
                triple,
                status,
            });
        }

        println!(
            "{} Finished building {} for {} in {:.2?}",
            "✓".green(),
            artifact_name,
            triple,
            start_time.elapsed()
        );
        Ok(artifact)
    }

    /// Build recipes in order. The first failure stops the run; later
    /// recipes are not attempted.
    pub fn run_recipes(&self, recipes: &[&Recipe]) -> Result<Vec<PathBuf>, BuildError> {
        recipes
            .iter()
            .map(|recipe| self.run_recipe(recipe))
            .collect()
    }
}
