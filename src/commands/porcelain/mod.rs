//! User-facing twig commands
//!
//! Each module adds one command to `Repository`. Commands change the areas in
//! memory and print to the repository writer; persisting the result is left
//! to the caller.
//!
//! ## Commands
//!
//! - `init`: Create a repository with its initial commit
//! - `add` / `rm`: Stage a file for addition or removal
//! - `commit`: Record the index on top of the active branch
//! - `log`, `global-log`, `find`: Inspect history
//! - `status`: Show branches, the index and the working tree
//! - `checkout`: Restore a file or switch branches
//! - `branch` / `rm-branch`: Create or delete branches
//! - `reset`: Move the active branch to another commit
//! - `merge`: Merge a branch into the active one
//! - `add-remote` / `rm-remote`: Manage remotes
//! - `push`, `fetch`, `pull`: Exchange history with a remote

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod fetch;
pub mod init;
pub mod log;
pub mod merge;
pub mod pull;
pub mod push;
pub mod remote;
pub mod reset;
pub mod rm;
pub mod status;
