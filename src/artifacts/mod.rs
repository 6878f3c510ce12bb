//! twig data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `branch`: Branch names
//! - `checkout`: Working tree migrations and untracked-file protection
//! - `log`: Commit history traversal
//! - `merge`: Split point, three-way classification and conflict markers
//! - `objects`: Object types (blob, tree, commit)
//! - `remote`: History transfer between repositories
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod log;
pub mod merge;
pub mod objects;
pub mod remote;
pub mod status;
