//! Working tree migrations
//!
//! Checkout of a branch, checkout of a file, reset, fast-forward and merge all
//! rewrite the working tree. They describe the rewrite as a `Migration` first:
//!
//! - every file to write, with the blob it receives
//! - every file to delete
//!
//! The migration is checked against the working tree before anything is
//! touched. A file in the way that the current commit does not track aborts
//! the whole operation with `UntrackedFileInTheWay`.

pub mod conflict;
pub mod migration;
