use super::error::BuildError;
use std::process::Command;

/// Runs a composed command line and reports its exit status.
pub trait Executor {
    fn execute(&self, argv: &[String]) -> Result<i32, BuildError>;
}

/// Spawns the toolchain as a child process with inherited stdio and waits for
/// it. There is no timeout; compiler output goes straight to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, argv: &[String]) -> Result<i32, BuildError> {
        let (program, args) = argv.split_first().ok_or(BuildError::EmptyCommand)?;

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| BuildError::Spawn {
                program: program.clone(),
                source,
            })?;

        // Killed by a signal: no code, but certainly not a success
        Ok(status.code().unwrap_or(-1))
    }
}
