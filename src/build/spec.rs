//! The target-independent half of every build: toolchain, flags, include
//! directories and the discovered source list.

use super::error::BuildError;
use crate::config::GcxConfig;
use crate::target::{Arch, Target};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Shared by all recipes of a run. Fields are private so nothing can change
/// them once the spec exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSpec {
    toolchain: Vec<String>,
    library: String,
    flags: Vec<String>,
    include_dirs: Vec<String>,
    sources: Vec<String>,
    output_dir: String,
}

impl BuildSpec {
    pub fn new(
        toolchain: Vec<String>,
        flags: Vec<String>,
        include_dirs: Vec<String>,
        sources: Vec<String>,
    ) -> Self {
        Self {
            toolchain,
            library: "gc".to_string(),
            flags,
            include_dirs,
            sources,
            output_dir: "dist".to_string(),
        }
    }

    #[must_use]
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Build the spec from config, discovering sources under `root`.
    pub fn from_config(root: &Path, config: &GcxConfig) -> Result<Self, BuildError> {
        let build = &config.build;
        let sources = discover_sources(root, &build.source_dir, &build.source_extension)?;
        Ok(Self::new(
            config.toolchain.command.clone(),
            build.flags.clone(),
            build.include_dirs.clone(),
            sources,
        )
        .with_library(build.library.clone())
        .with_output_dir(build.output_dir.clone()))
    }

    pub fn toolchain(&self) -> &[String] {
        &self.toolchain
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn include_dirs(&self) -> &[String] {
        &self.include_dirs
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn output_root(&self) -> &str {
        &self.output_dir
    }

    /// File name of the artifact, e.g. `libgc.dylib`.
    pub fn artifact_name(&self, target: Target) -> String {
        format!("lib{}{}", self.library, target.dl_extension())
    }

    /// Per-architecture output directory, relative to the project root.
    pub fn output_dir_for(&self, arch: Arch) -> PathBuf {
        Path::new(&self.output_dir).join(arch.as_str())
    }

    /// Artifact path as passed to `-o`, always `/`-separated.
    pub fn output_path(&self, target: Target) -> String {
        artifact_path(&self.output_dir, &self.library, target)
    }
}

/// `<output_dir>/<arch>/lib<library><ext>` with `/` separators on every host.
pub fn artifact_path(output_dir: &str, library: &str, target: Target) -> String {
    let root = output_dir.replace('\\', "/");
    format!(
        "{}/{}/lib{}{}",
        root.trim_end_matches('/'),
        target.arch,
        library,
        target.dl_extension()
    )
}

/// List the files directly inside `source_dir` with the given extension,
/// sorted by file name. Paths are returned as `<source_dir>/<file>`.
pub fn discover_sources(
    root: &Path,
    source_dir: &str,
    extension: &str,
) -> Result<Vec<String>, BuildError> {
    let dir = root.join(source_dir);
    let prefix = source_dir.trim_end_matches(['/', '\\']);
    let mut sources = Vec::new();

    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            BuildError::io(
                format!("Failed to read source directory {}", dir.display()),
                e.into(),
            )
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != extension) {
            continue;
        }
        sources.push(format!("{}/{}", prefix, entry.file_name().to_string_lossy()));
    }

    Ok(sources)
}
