use super::error::BuildError;
use colored::*;
use std::env;
use std::path::{Path, PathBuf};

/// Switches the process working directory and switches it back on drop.
///
/// The working directory is process-wide, so only one guard may be live at a
/// time; recipes run sequentially for exactly that reason.
#[derive(Debug)]
pub struct WorkdirGuard {
    previous: PathBuf,
}

impl WorkdirGuard {
    pub fn enter(dir: &Path) -> Result<Self, BuildError> {
        let previous = env::current_dir()
            .map_err(|e| BuildError::io("Failed to read current directory", e))?;
        env::set_current_dir(dir)
            .map_err(|e| BuildError::io(format!("Failed to enter {}", dir.display()), e))?;
        Ok(Self { previous })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            eprintln!(
                "{} Failed to restore working directory {}: {}",
                "!".yellow(),
                self.previous.display(),
                e
            );
        }
    }
}
