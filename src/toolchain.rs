//! Cross toolchain probing.
//!
//! gcx never searches for a compiler: the configured command (`zig cc` unless
//! `gcx.toml` says otherwise) is the toolchain. This module only checks that
//! it starts and reports its version.

use std::process::Command;

/// Error type for toolchain probing
#[derive(Debug)]
pub enum ToolchainError {
    /// Toolchain command is empty
    NotConfigured,
    /// The binary could not be started
    NotFound(String),
    /// It started but `--version` failed
    Broken(String),
}

impl std::fmt::Display for ToolchainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolchainError::NotConfigured => write!(f, "No toolchain command configured"),
            ToolchainError::NotFound(msg) => write!(f, "Toolchain not found: {}", msg),
            ToolchainError::Broken(msg) => write!(f, "Toolchain not working: {}", msg),
        }
    }
}

impl std::error::Error for ToolchainError {}

/// Run `<command> --version` and return the first line it prints.
pub fn probe_version(command: &[String]) -> Result<String, ToolchainError> {
    let (program, args) = command.split_first().ok_or(ToolchainError::NotConfigured)?;

    let output = Command::new(program)
        .args(args)
        .arg("--version")
        .output()
        .map_err(|e| ToolchainError::NotFound(format!("{}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ToolchainError::Broken(
            stderr.lines().next().unwrap_or("unknown error").to_string(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or("unknown").trim().to_string())
}
