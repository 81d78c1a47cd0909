//! # gcx - bdwgc cross-build orchestrator
//!
//! gcx builds the Boehm-Demers-Weiser garbage collector as a shared library
//! for several (architecture, OS) targets from a single host, driving
//! `zig cc` as the cross compiler.
//!
//! ## Quick Start
//!
//! ```bash
//! # See what can be built
//! gcx list
//!
//! # Build the Linux x86_64 library into dist/x86_64/libgc.so
//! gcx build build-linux-x64
//! ```
//!
//! ## Module Organization
//!
//! - [`target`] - The (arch, os) matrix and derived triples/extensions
//! - [`registry`] - Named recipes bound to targets
//! - [`build`] - Argument composition, toolchain execution and the driver
//! - [`config`] - Optional `gcx.toml` overrides
//! - [`commands`] - CLI command handlers

/// Build spec, command composition, execution and the recipe driver.
pub mod build;

/// CLI command handlers (`list`, `doctor`).
pub mod commands;

/// Configuration file parsing (`gcx.toml`).
pub mod config;

/// Recipe registry.
pub mod registry;

/// Build targets.
pub mod target;

/// Toolchain probing.
pub mod toolchain;

/// Terminal UI utilities (tables).
pub mod ui;
