//! Commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree (path to blob snapshot)
//! - At most one parent commit ID
//! - A timestamp
//! - A commit message
//!
//! ## Digest
//!
//! ```text
//! <message>\0<timestamp, RFC 3339 with nanoseconds>\0<tree digest>
//! ```
//!
//! The parent is not part of the digest: a commit keeps its
//! identity when fetched history is spliced onto a new parent.

use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::TwigError;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Message of the commit created by `init`
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Environment variable overriding the timestamp of new commits
pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    message: String,
    timestamp: DateTime<FixedOffset>,
    parent: Option<ObjectId>,
    tree: Tree,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `message` - Commit message, must not be blank
    /// * `timestamp` - Commit date
    /// * `parent` - Parent commit ID (None for the initial commit)
    /// * `tree` - Snapshot recorded by the commit
    pub fn try_new(
        message: String,
        timestamp: DateTime<FixedOffset>,
        parent: Option<ObjectId>,
        tree: Tree,
    ) -> anyhow::Result<Self> {
        if message.trim().is_empty() {
            anyhow::bail!(TwigError::EmptyMessage);
        }

        Ok(Commit {
            message,
            timestamp,
            parent,
            tree,
        })
    }

    /// The commit every repository starts from
    ///
    /// Its record is fixed (epoch timestamp, empty tree), so two independently
    /// initialized repositories share the same root digest.
    pub fn initial() -> Self {
        Commit {
            message: INITIAL_COMMIT_MESSAGE.to_string(),
            timestamp: DateTime::UNIX_EPOCH.fixed_offset(),
            parent: None,
            tree: Tree::default(),
        }
    }

    /// Timestamp for a new commit
    ///
    /// Reads `TWIG_COMMIT_DATE` when set (`%Y-%m-%d %H:%M:%S %z` or RFC 2822),
    /// otherwise uses the current local time.
    pub fn timestamp_from_env() -> anyhow::Result<DateTime<FixedOffset>> {
        match std::env::var(COMMIT_DATE_ENV) {
            Ok(date_str) => DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z")
                .or_else(|_| DateTime::parse_from_rfc2822(&date_str))
                .map_err(|_| anyhow::anyhow!("{COMMIT_DATE_ENV} is not a valid date: {date_str}")),
            Err(_) => Ok(chrono::Local::now().fixed_offset()),
        }
    }

    /// Copy of this commit attached to another parent, same digest
    pub fn reparented(&self, parent: Option<ObjectId>) -> Self {
        Commit {
            parent,
            ..self.clone()
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let content = format!(
            "{}\0{}\0{}",
            self.message,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.tree.object_id()
        );

        Bytes::from(content)
    }
}

impl Object for Commit {}
