//! CLI Command handlers
//!
//! Handlers for the commands that are not a build: `list` and `doctor`.

pub mod doctor;
pub mod list;
