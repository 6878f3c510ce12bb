//! Three-way merge of two branches
//!
//! - `split_point`: latest commit shared by two single-parent histories
//! - `resolution`: per-path classification of split, current and target trees
//! - `conflict`: conflict-marker file content
//!
//! The merge command combines them: find the split point, fast-forward when
//! possible, otherwise classify every path and write the outcome.

pub mod conflict;
pub mod resolution;
pub mod split_point;
