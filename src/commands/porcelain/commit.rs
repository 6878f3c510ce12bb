use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use chrono::TimeDelta;

/// Whether a commit may record an unchanged snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// Requires staged changes
    User,
    /// Merge bookkeeping, always recorded
    Merge,
}

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.write_commit(message, CommitKind::User)?;

        Ok(())
    }

    /// Record the index on top of the active branch head
    ///
    /// The branch advances to the new commit and the index is emptied.
    pub(crate) fn write_commit(
        &mut self,
        message: &str,
        kind: CommitKind,
    ) -> anyhow::Result<ObjectId> {
        if message.trim().is_empty() {
            anyhow::bail!(TwigError::EmptyMessage);
        }
        if kind == CommitKind::User && self.index().is_clean() {
            anyhow::bail!(TwigError::NothingToCommit);
        }

        let parent = self.head_oid()?;
        let tree = self.index().snapshot(self.head_commit()?.tree());

        // the parent is not hashed, so an equal message, time and tree would
        // reuse an older commit's digest
        let mut timestamp = Commit::timestamp_from_env()?;
        let commit = loop {
            let commit = Commit::try_new(
                message.to_string(),
                timestamp,
                Some(parent.clone()),
                tree.clone(),
            )?;
            if !self.database().has_commit(&commit.object_id()) {
                break commit;
            }

            log::debug!(
                "digest {} is taken, moving the commit date forward",
                commit.object_id().to_short_oid()
            );
            timestamp += TimeDelta::seconds(1);
        };

        let commit_id = self.database_mut().store_commit(commit);
        self.refs_mut().update_head(commit_id.clone());
        self.index_mut().clear();

        log::info!("committed {} on {}", commit_id.to_short_oid(), self.refs().current_branch());

        Ok(commit_id)
    }
}
