//! Working tree status inspection
//!
//! This module classifies every file of the working tree by comparing it
//! against the index and the head commit.
//!
//! ## Components
//!
//! - `file_change`: Kinds of unstaged changes
//! - `inspector`: Per-file classification rules
//! - `status_info`: Status information aggregation

pub mod file_change;
pub mod inspector;
pub mod status_info;
