//! Commit history traversal
//!
//! - `rev_list`: walk of a single-parent commit chain, newest first
//!
//! Every commit has at most one parent, so a history is a plain list: the walk
//! follows parent links from a head until it reaches the initial commit.

pub mod rev_list;
