//! Recipe registry.
//!
//! A recipe binds a name (what the user types on the command line) to a
//! [`Target`]. The built-in table only covers x86_64; further recipes come
//! from `[[recipes]]` in `gcx.toml`. Targets without a recipe are still
//! declared and listed, they just cannot be built by name.

use crate::config::RecipeConfig;
use crate::target::{Arch, Os, Target};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub target: Target,
}

const BUILTIN_RECIPES: &[(&str, Target)] = &[
    ("build-win-x64", Target::new(Arch::X86_64, Os::Windows)),
    ("build-macos-x64", Target::new(Arch::X86_64, Os::Macos)),
    ("build-linux-x64", Target::new(Arch::X86_64, Os::Linux)),
];

#[derive(Debug, Clone)]
pub struct Registry {
    recipes: Vec<Recipe>,
}

impl Registry {
    pub fn builtin() -> Self {
        let recipes = BUILTIN_RECIPES
            .iter()
            .map(|(name, target)| Recipe {
                name: name.to_string(),
                target: *target,
            })
            .collect();
        Self { recipes }
    }

    /// Built-in recipes plus those declared in `gcx.toml`.
    pub fn with_extra(extra: &[RecipeConfig]) -> Result<Self> {
        let mut registry = Self::builtin();
        for entry in extra {
            let target = Target::parse(&entry.arch, &entry.os)
                .with_context(|| format!("Invalid target for recipe '{}'", entry.name))?;
            registry.register(entry.name.clone(), target)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, name: String, target: Target) -> Result<()> {
        if name.trim().is_empty() {
            return Err(anyhow!("Recipe name must not be empty"));
        }
        if self.get(&name).is_some() {
            return Err(anyhow!("Recipe '{}' is declared twice", name));
        }
        self.recipes.push(Recipe { name, target });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Look up every name, failing on the first unknown one before anything
    /// gets built.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Recipe>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name).ok_or_else(|| {
                    anyhow!(
                        "Unknown recipe '{}'. Available: {}",
                        name,
                        self.names().join(", ")
                    )
                })
            })
            .collect()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.name.as_str()).collect()
    }

    /// Declared targets that no recipe builds.
    pub fn unbound_targets(&self) -> Vec<Target> {
        Target::all()
            .filter(|t| !self.recipes.iter().any(|r| r.target == *t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_config(name: &str, arch: &str, os: &str) -> RecipeConfig {
        RecipeConfig {
            name: name.to_string(),
            arch: arch.to_string(),
            os: os.to_string(),
        }
    }

    #[test]
    fn test_builtin_recipes() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.names(),
            vec!["build-win-x64", "build-macos-x64", "build-linux-x64"]
        );
        let linux = registry.get("build-linux-x64").unwrap();
        assert_eq!(linux.target, Target::new(Arch::X86_64, Os::Linux));
    }

    #[test]
    fn test_aarch64_declared_but_unbound() {
        let unbound = Registry::builtin().unbound_targets();
        assert_eq!(unbound.len(), 3);
        assert!(unbound.iter().all(|t| t.arch == Arch::Aarch64));
    }

    #[test]
    fn test_extra_recipe_binds_target() {
        let registry =
            Registry::with_extra(&[recipe_config("build-linux-arm64", "aarch64", "linux")])
                .unwrap();
        let recipe = registry.get("build-linux-arm64").unwrap();
        assert_eq!(recipe.target.triple(), "aarch64-linux-gnu");
        assert_eq!(registry.unbound_targets().len(), 2);
    }

    #[test]
    fn test_extra_recipe_unknown_os_is_fatal() {
        let err = Registry::with_extra(&[recipe_config("build-bsd", "x86_64", "freebsd")])
            .unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("build-bsd"));
        assert!(msg.contains("freebsd"));
    }

    #[test]
    fn test_duplicate_recipe_rejected() {
        let err = Registry::with_extra(&[recipe_config("build-linux-x64", "x86_64", "linux")])
            .unwrap_err();
        assert!(err.to_string().contains("declared twice"));
    }

    #[test]
    fn test_resolve_keeps_order() {
        let registry = Registry::builtin();
        let picked = registry
            .resolve(&["build-linux-x64", "build-win-x64"])
            .unwrap();
        assert_eq!(picked[0].name, "build-linux-x64");
        assert_eq!(picked[1].name, "build-win-x64");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = Registry::builtin()
            .resolve(&["build-linux-x64", "build-plan9"])
            .unwrap_err();
        assert!(err.to_string().contains("build-plan9"));
    }
}
