//! Command implementations
//!
//! twig has no plumbing layer of its own: every command is a porcelain
//! workflow built on the repository areas.

pub mod porcelain;
