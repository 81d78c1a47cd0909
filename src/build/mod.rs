mod clean;
mod compose;
mod driver;
mod error;
mod executor;
mod spec;
mod workdir;

pub use clean::clean;
pub use compose::{compose_args, display_command};
pub use driver::{BuildOptions, Driver};
pub use error::BuildError;
pub use executor::{Executor, ProcessExecutor};
pub use spec::{BuildSpec, artifact_path, discover_sources};
pub use workdir::WorkdirGuard;

/// Serializes tests that change the process working directory.
#[cfg(test)]
pub(crate) fn cwd_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
