use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CONFIG_FILE: &str = "gcx.toml";

/// Contents of `gcx.toml`. Every field is optional; a project without the
/// file builds bdwgc with the stock settings below.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct GcxConfig {
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub recipes: Vec<RecipeConfig>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ToolchainConfig {
    #[serde(default = "default_command")]
    pub command: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default = "default_library")]
    pub library: String,
    #[serde(default = "default_flags")]
    pub flags: Vec<String>,
    #[serde(default = "default_include_dirs")]
    pub include_dirs: Vec<String>,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Extra recipe declared in `[[recipes]]`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RecipeConfig {
    pub name: String,
    pub arch: String,
    pub os: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            flags: default_flags(),
            include_dirs: default_include_dirs(),
            source_dir: default_source_dir(),
            source_extension: default_source_extension(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_command() -> Vec<String> {
    vec!["zig".to_string(), "cc".to_string()]
}

fn default_library() -> String {
    "gc".to_string()
}

/// bdwgc feature switches: threads with parallel marking and thread-local
/// allocation, plus the portability options for hosts without executable
/// heap pages.
const BDWGC_FLAGS: &[&str] = &[
    "-DGC_THREADS",
    "-DPARALLEL_MARK",
    "-DTHREAD_LOCAL_ALLOC",
    "-DENABLE_DISCLAIM",
    "-DGC_ATOMIC_UNCOLLECTABLE",
    "-DGC_GCJ_SUPPORT",
    "-DJAVA_FINALIZATION",
    "-DNO_EXECUTE_PERMISSION",
    "-DUSE_MMAP",
    "-DUSE_MUNMAP",
    "-fPIC",
    "-O2",
];

fn default_flags() -> Vec<String> {
    BDWGC_FLAGS.iter().map(|s| s.to_string()).collect()
}

fn default_include_dirs() -> Vec<String> {
    vec![
        "./bdwgc/include".to_string(),
        "./bdwgc/libatomic_ops/src".to_string(),
    ]
}

fn default_source_dir() -> String {
    "./bdwgc".to_string()
}

fn default_source_extension() -> String {
    "c".to_string()
}

fn default_output_dir() -> String {
    "dist".to_string()
}

impl GcxConfig {
    fn validate(&self) -> Result<()> {
        if self.toolchain.command.is_empty() || self.toolchain.command[0].is_empty() {
            return Err(anyhow!("[toolchain] command must name a program"));
        }
        if self.build.library.is_empty() {
            return Err(anyhow!("[build] library must not be empty"));
        }
        check_output_dir(&self.build.output_dir)
    }
}

/// The output root is wiped by `gcx clean`, so it must be a relative path
/// strictly below the project root: not empty, not `.`, not absolute and
/// without `..` components.
pub fn check_output_dir(output_dir: &str) -> Result<()> {
    let normalized = output_dir.replace('\\', "/");
    let path = Path::new(&normalized);
    let mut depth = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(anyhow!(
                    "[build] output_dir '{}' must stay inside the project root",
                    output_dir
                ));
            }
        }
    }
    if depth == 0 {
        return Err(anyhow!(
            "[build] output_dir '{}' must name a directory below the project root",
            output_dir
        ));
    }
    Ok(())
}

/// Load `gcx.toml` from the project root, falling back to the defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<GcxConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GcxConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: GcxConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid {}", path.display()))?;
    Ok(config)
}

/// Resolve the project root.
///
/// An explicit `--root` wins. Otherwise walk up from the current directory to
/// the first ancestor holding `gcx.toml`, and settle for the current directory
/// when there is none.
pub fn find_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return dir
            .canonicalize()
            .with_context(|| format!("Project root {} does not exist", dir.display()));
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let root = cwd
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .unwrap_or(cwd.as_path());
    root.canonicalize()
        .with_context(|| format!("Failed to resolve project root {}", root.display()))
}
