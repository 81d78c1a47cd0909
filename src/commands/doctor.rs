//! Doctor command handler
//!
//! Handles `gcx doctor`: checks that the toolchain starts and that the source
//! tree the build spec points at is actually there.

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::build::discover_sources;
use crate::config::GcxConfig;
use crate::toolchain;

/// Run the `gcx doctor` command. Returns `false` if a required check failed.
pub fn run_doctor(root: &Path, config: &GcxConfig) -> Result<bool> {
    println!("{} Running gcx doctor...", "🚑".red());
    println!("-------------------------------");
    let mut healthy = true;

    print!("Checking host... ");
    println!(
        "{} ({})",
        std::env::consts::OS.green(),
        std::env::consts::ARCH.cyan()
    );

    println!("Checking project root... {}", root.display());

    let command = config.toolchain.command.join(" ");
    print!("Checking toolchain '{}'... ", command);
    match toolchain::probe_version(&config.toolchain.command) {
        Ok(version) => println!("{} ({})", "Found".green(), version),
        Err(e) => {
            println!("{}", e.to_string().red());
            println!("   Install zig from https://ziglang.org/download/ or set [toolchain] command");
            healthy = false;
        }
    }

    let build = &config.build;
    print!("Checking sources in {}... ", build.source_dir);
    match discover_sources(root, &build.source_dir, &build.source_extension) {
        Ok(sources) if sources.is_empty() => {
            println!(
                "{}",
                format!("no .{} files found", build.source_extension).yellow()
            );
            healthy = false;
        }
        Ok(sources) => println!("{} ({} files)", "Found".green(), sources.len()),
        Err(e) => {
            println!("{}", e.to_string().red());
            healthy = false;
        }
    }

    for dir in &build.include_dirs {
        print!("Checking include dir {}... ", dir);
        if root.join(dir).is_dir() {
            println!("{}", "Found".green());
        } else {
            println!("{}", "Missing".yellow());
        }
    }

    Ok(healthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_doctor_flags_missing_sources() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GcxConfig::default();
        config.toolchain.command = vec!["gcx-no-such-zig".to_string()];
        assert!(!run_doctor(dir.path(), &config).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_doctor_healthy_project() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("bdwgc")).unwrap();
        fs::write(dir.path().join("bdwgc").join("alloc.c"), "").unwrap();

        let mut config = GcxConfig::default();
        config.toolchain.command = vec!["sh".into(), "-c".into(), "echo zig 0.13".into()];
        assert!(run_doctor(dir.path(), &config).unwrap());
    }
}
