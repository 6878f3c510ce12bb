//! Core repository components
//!
//! This module contains the mutable parts of a twig repository:
//!
//! - `database`: Object database holding blobs and commits
//! - `index`: Staging area for the next commit
//! - `refs`: Branch table and the active branch
//! - `remotes`: Named paths to other repositories
//! - `repository`: Loaded repository coordinating all areas
//! - `storage`: Locked, versioned state file
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod remotes;
pub mod repository;
pub mod storage;
pub mod workspace;
