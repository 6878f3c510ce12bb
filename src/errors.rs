//! Typed failures of twig commands
//!
//! Every condition a user can run into is a `TwigError`. Commands return
//! `anyhow::Result` and raise these with `bail!`/`into()`, so the command line
//! can downcast and print the single-line message while unexpected failures
//! (I/O, corrupted state) keep their `anyhow` context chain.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwigError {
    /// Wrong argument shape
    UsageError(String),
    NotInitialized,
    DuplicateInit,
    /// `add` on a path that does not exist in the working tree
    FileNotFound,
    FileNotInCommit,
    EmptyMessage,
    NothingToCommit,
    NothingToRemove,
    UnknownCommit,
    NoCommitWithMessage,
    UnknownBranch,
    /// `checkout <branch>` on a missing branch
    NoSuchBranch,
    AlreadyOnBranch,
    DuplicateBranch,
    InvalidBranchName(String),
    CannotRemoveActive,
    UntrackedFileInTheWay,
    SelfMerge,
    GivenIsAncestor,
    UncommittedChanges,
    UnknownRemote,
    DuplicateRemote,
    RemoteNotFound,
    /// A remote leading back to the repository it is registered in
    RemoteIsLocal,
    NonFastForward,
    UnknownRemoteBranch,
}

impl fmt::Display for TwigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwigError::UsageError(msg) => write!(f, "{msg}"),
            TwigError::NotInitialized => write!(f, "Not in an initialized twig directory."),
            TwigError::DuplicateInit => write!(
                f,
                "A twig version-control system already exists in the current directory."
            ),
            TwigError::FileNotFound => write!(f, "File does not exist."),
            TwigError::FileNotInCommit => write!(f, "File does not exist in that commit."),
            TwigError::EmptyMessage => write!(f, "Please enter a commit message."),
            TwigError::NothingToCommit => write!(f, "No changes added to the commit."),
            TwigError::NothingToRemove => write!(f, "No reason to remove the file."),
            TwigError::UnknownCommit => write!(f, "No commit with that id exists."),
            TwigError::NoCommitWithMessage => write!(f, "Found no commit with that message."),
            TwigError::UnknownBranch => write!(f, "A branch with that name does not exist."),
            TwigError::NoSuchBranch => write!(f, "No such branch exists."),
            TwigError::AlreadyOnBranch => write!(f, "No need to checkout the current branch."),
            TwigError::DuplicateBranch => write!(f, "A branch with that name already exists."),
            TwigError::InvalidBranchName(name) => write!(f, "Invalid branch name: {name}."),
            TwigError::CannotRemoveActive => write!(f, "Cannot remove the current branch."),
            TwigError::UntrackedFileInTheWay => write!(
                f,
                "There is an untracked file in the way; delete it, or add and commit it first."
            ),
            TwigError::SelfMerge => write!(f, "Cannot merge a branch with itself."),
            TwigError::GivenIsAncestor => {
                write!(f, "Given branch is an ancestor of the current branch.")
            }
            TwigError::UncommittedChanges => write!(f, "You have uncommitted changes."),
            TwigError::UnknownRemote => write!(f, "A remote with that name does not exist."),
            TwigError::DuplicateRemote => write!(f, "A remote with that name already exists."),
            TwigError::RemoteNotFound => write!(f, "Remote directory not found."),
            TwigError::RemoteIsLocal => {
                write!(f, "That remote is the current repository.")
            }
            TwigError::NonFastForward => {
                write!(f, "Please pull down remote changes before pushing.")
            }
            TwigError::UnknownRemoteBranch => write!(f, "That remote does not have that branch."),
        }
    }
}

impl std::error::Error for TwigError {}

/// Look for a `TwigError` anywhere in an `anyhow` chain
pub fn as_twig_error(error: &anyhow::Error) -> Option<&TwigError> {
    error.chain().find_map(|cause| cause.downcast_ref::<TwigError>())
}
