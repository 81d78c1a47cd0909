//! Build targets.
//!
//! A [`Target`] is one `(arch, os)` pair of the build matrix. Everything the
//! rest of the crate needs to know about a target (the zig triple and the
//! shared library extension) is derived from those two fields.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// CPU architecture of a build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arch {
    X86_64,
    Aarch64,
}

/// Operating system of a build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Os {
    Linux,
    Macos,
    Windows,
}

impl Arch {
    pub const ALL: [Arch; 2] = [Arch::X86_64, Arch::Aarch64];

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Aarch64 => "aarch64",
        }
    }
}

impl Os {
    pub const ALL: [Os; 3] = [Os::Linux, Os::Macos, Os::Windows];

    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Macos => "macos",
            Os::Windows => "windows",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x86_64" => Ok(Arch::X86_64),
            "aarch64" => Ok(Arch::Aarch64),
            other => Err(TargetError::UnknownArch(other.to_string())),
        }
    }
}

impl FromStr for Os {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Os::Linux),
            "macos" => Ok(Os::Macos),
            "windows" => Ok(Os::Windows),
            other => Err(TargetError::UnknownOs(other.to_string())),
        }
    }
}

/// One cell of the build matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    pub arch: Arch,
    pub os: Os,
}

impl Target {
    pub const fn new(arch: Arch, os: Os) -> Self {
        Self { arch, os }
    }

    /// Parse a target from its textual parts, as written in `gcx.toml`.
    ///
    /// Unknown names are a broken target matrix, never a fallback to some
    /// default target.
    pub fn parse(arch: &str, os: &str) -> Result<Self, TargetError> {
        Ok(Self::new(arch.parse()?, os.parse()?))
    }

    /// Every declared combination, whether or not a recipe builds it.
    pub fn all() -> impl Iterator<Item = Target> {
        Arch::ALL
            .into_iter()
            .flat_map(|arch| Os::ALL.into_iter().map(move |os| Target::new(arch, os)))
    }

    /// Target triple understood by `zig cc -target`.
    pub fn triple(&self) -> String {
        match self.os {
            Os::Linux => format!("{}-linux-gnu", self.arch),
            Os::Macos => format!("{}-macos-none", self.arch),
            Os::Windows => format!("{}-windows-gnu", self.arch),
        }
    }

    /// File extension of a shared library on this target, dot included.
    pub fn dl_extension(&self) -> &'static str {
        match self.os {
            Os::Linux => ".so",
            Os::Macos => ".dylib",
            Os::Windows => ".dll",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Error type for target parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    UnknownArch(String),
    UnknownOs(String),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::UnknownArch(arch) => write!(
                f,
                "Unknown architecture: '{}' (expected x86_64 or aarch64)",
                arch
            ),
            TargetError::UnknownOs(os) => write!(
                f,
                "Unknown OS: '{}' (expected linux, macos or windows)",
                os
            ),
        }
    }
}

impl std::error::Error for TargetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triples() {
        let cases = [
            (Arch::X86_64, Os::Linux, "x86_64-linux-gnu"),
            (Arch::X86_64, Os::Macos, "x86_64-macos-none"),
            (Arch::X86_64, Os::Windows, "x86_64-windows-gnu"),
            (Arch::Aarch64, Os::Linux, "aarch64-linux-gnu"),
            (Arch::Aarch64, Os::Macos, "aarch64-macos-none"),
            (Arch::Aarch64, Os::Windows, "aarch64-windows-gnu"),
        ];
        for (arch, os, triple) in cases {
            assert_eq!(Target::new(arch, os).triple(), triple);
        }
    }

    #[test]
    fn test_dl_extensions() {
        for arch in Arch::ALL {
            assert_eq!(Target::new(arch, Os::Linux).dl_extension(), ".so");
            assert_eq!(Target::new(arch, Os::Macos).dl_extension(), ".dylib");
            assert_eq!(Target::new(arch, Os::Windows).dl_extension(), ".dll");
        }
    }

    #[test]
    fn test_all_covers_matrix() {
        let all: Vec<Target> = Target::all().collect();
        assert_eq!(all.len(), 6);
        assert!(all.contains(&Target::new(Arch::Aarch64, Os::Macos)));
    }

    #[test]
    fn test_parse_known() {
        let target = Target::parse("aarch64", "linux").unwrap();
        assert_eq!(target, Target::new(Arch::Aarch64, Os::Linux));
    }

    #[test]
    fn test_parse_unknown_os_fails() {
        let err = Target::parse("x86_64", "freebsd").unwrap_err();
        assert_eq!(err, TargetError::UnknownOs("freebsd".to_string()));
        assert!(err.to_string().contains("freebsd"));
    }

    #[test]
    fn test_parse_unknown_arch_fails() {
        let err = Target::parse("riscv64", "linux").unwrap_err();
        assert_eq!(err, TargetError::UnknownArch("riscv64".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Target::parse("x86_64", "Linux").is_err());
    }
}
