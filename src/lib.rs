//! twig - a small, local-first version-control engine
//!
//! The crate is organized the same way as the commands it serves:
//!
//! - `areas`: the mutable parts of a repository (object database, refs, index,
//!   remotes, workspace and the persisted state that holds them)
//! - `artifacts`: the data structures and algorithms working on those areas
//!   (objects, history walks, status, checkout migrations, merge, remote transfer)
//! - `commands`: one user-facing operation per module, implemented on `Repository`
//! - `errors`: the typed failures surfaced to the command line

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use errors::TwigError;

/// Name of the repository metadata directory
pub const REPOSITORY_DIR: &str = ".twig";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";
