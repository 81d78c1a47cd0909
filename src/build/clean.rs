//! Build artifact cleanup.
//!
//! `gcx clean` removes the output root (`dist/` by default) and with it every
//! artifact of every target.

use anyhow::{Context, Result};
use colored::*;

use crate::config::check_output_dir;

use std::fs;
use std::path::Path;

/// Returns whether anything was removed.
pub fn clean(root: &Path, output_dir: &str) -> Result<bool> {
    check_output_dir(output_dir).context("Refusing to clean")?;
    let dist = root.join(output_dir);
    if !dist.exists() {
        println!("{} Nothing to clean", "!".yellow());
        return Ok(false);
    }

    fs::remove_dir_all(&dist)
        .with_context(|| format!("Failed to remove {}", dist.display()))?;
    println!("{} Removed {}", "🗑️".red(), dist.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_output_root() {
        let dir = tempfile::tempdir().unwrap();
        let arch_dir = dir.path().join("dist").join("x86_64");
        fs::create_dir_all(&arch_dir).unwrap();
        fs::write(arch_dir.join("libgc.so"), "").unwrap();

        assert!(clean(dir.path(), "dist").unwrap());
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_clean_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!clean(dir.path(), "dist").unwrap());
    }

    #[test]
    fn test_clean_refuses_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("bdwgc");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("alloc.c"), "").unwrap();

        for output_dir in [".", "..", "bdwgc/..", "/"] {
            assert!(clean(dir.path(), output_dir).is_err());
        }
        assert!(src.join("alloc.c").is_file());
    }
}
