use std::fmt;
use std::io;

/// Error type for build operations
#[derive(Debug)]
pub enum BuildError {
    /// The toolchain ran and exited with a non-zero status
    ToolchainFailed {
        recipe: String,
        triple: String,
        status: i32,
    },
    /// The toolchain binary could not be started
    Spawn { program: String, source: io::Error },
    /// Composed command line has no program to run
    EmptyCommand,
    /// Filesystem error (output directory, source discovery, working directory)
    Io { context: String, source: io::Error },
}

impl BuildError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        BuildError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn is_toolchain_failure(&self) -> bool {
        matches!(self, BuildError::ToolchainFailed { .. })
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ToolchainFailed {
                recipe,
                triple,
                status,
            } => write!(
                f,
                "Recipe '{}' failed: toolchain exited with status {} for {}",
                recipe, status, triple
            ),
            BuildError::Spawn { program, source } => {
                write!(f, "Failed to run toolchain '{}': {}", program, source)
            }
            BuildError::EmptyCommand => write!(f, "Toolchain command is empty"),
            BuildError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Spawn { source, .. } | BuildError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
