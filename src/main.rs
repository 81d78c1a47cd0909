//! # gcx CLI Entry Point
//!
//! Parses arguments with clap and routes them to the build driver or one of
//! the command handlers. Any recipe name also works as a subcommand of its
//! own, so `gcx build-linux-x64` is the same as `gcx build build-linux-x64`.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::{Path, PathBuf};

use gcx::build::{self, BuildError, BuildOptions, BuildSpec, Driver, ProcessExecutor};
use gcx::commands;
use gcx::config::{self, GcxConfig};
use gcx::registry::Registry;

#[derive(Parser)]
#[command(name = "gcx")]
#[command(about = "Cross-compile bdwgc into shared libraries with zig cc", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(allow_external_subcommands = true)]
struct Cli {
    /// Project root (default: nearest directory with gcx.toml, else the current one)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one or more recipes, in order; stops at the first failure
    Build {
        /// Recipe names (see `gcx list`)
        #[arg(required = true)]
        recipes: Vec<String>,
        /// Print the toolchain command line
        #[arg(short, long)]
        verbose: bool,
        /// Show what would be executed without running
        #[arg(long)]
        dry_run: bool,
    },
    /// List recipes and declared targets
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the toolchain and source tree
    Doctor,
    /// Remove the output directory
    Clean,
    /// Generate shell completion scripts
    Completion { shell: Shell },
    /// Build a recipe by name
    #[command(external_subcommand)]
    External(Vec<String>),
}

struct Project {
    root: PathBuf,
    config: GcxConfig,
    registry: Registry,
}

fn load_project(explicit_root: Option<&Path>) -> Result<Project> {
    let root = config::find_project_root(explicit_root)?;
    let config = config::load_config(&root)?;
    let registry = Registry::with_extra(&config.recipes)?;
    Ok(Project {
        root,
        config,
        registry,
    })
}

fn build_recipes(project: &Project, names: &[String], options: BuildOptions) -> Result<()> {
    let recipes = project.registry.resolve(names)?;
    let spec = BuildSpec::from_config(&project.root, &project.config)
        .context("Failed to prepare build")?;

    let driver = Driver::new(&project.root, &spec, ProcessExecutor).with_options(options);
    driver.run_recipes(&recipes)?;
    Ok(())
}

/// Split the raw words after a recipe-name subcommand into recipe names and
/// the flags `gcx build` understands.
fn parse_shortcut(args: &[String]) -> Result<(Vec<String>, BuildOptions)> {
    let mut names = Vec::new();
    let mut options = BuildOptions::default();
    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => options.verbose = true,
            "--dry-run" => options.dry_run = true,
            flag if flag.starts_with('-') => {
                bail!(
                    "Unknown flag '{}' (supported: --verbose, --dry-run)",
                    flag
                );
            }
            name => names.push(name.to_string()),
        }
    }
    Ok((names, options))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root.as_deref();

    let result = match &cli.command {
        Some(Commands::Build {
            recipes,
            verbose,
            dry_run,
        }) => {
            let project = load_project(root)?;
            let options = BuildOptions {
                verbose: *verbose,
                dry_run: *dry_run,
            };
            build_recipes(&project, recipes, options)
        }

        Some(Commands::External(args)) => {
            let (names, options) = parse_shortcut(args)?;
            let project = load_project(root)?;
            build_recipes(&project, &names, options)
        }

        Some(Commands::List { json }) => {
            let project = load_project(root)?;
            commands::list::handle_list(&project.registry, &project.config, *json)
        }

        Some(Commands::Doctor) => {
            let project = load_project(root)?;
            if !commands::doctor::run_doctor(&project.root, &project.config)? {
                std::process::exit(1);
            }
            Ok(())
        }

        Some(Commands::Clean) => {
            let project = load_project(root)?;
            build::clean(&project.root, &project.config.build.output_dir).map(|_| ())
        }

        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }

        None => {
            println!("{} No command given. Try {}", "!".yellow(), "gcx list".cyan());
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result
        && e.downcast_ref::<BuildError>()
            .is_some_and(BuildError::is_toolchain_failure)
    {
        // Already reported by the driver
        std::process::exit(1);
    }
    result
}
