use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::conflict::conflict_content;
use crate::artifacts::merge::resolution::{MergeAction, resolve};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::porcelain::commit::CommitKind;
use crate::errors::TwigError;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};

pub const FAST_FORWARD_MESSAGE: &str = "Current branch fast-forwarded.";
pub const CONFLICT_MESSAGE: &str = "Encountered a merge conflict.";

#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Record a merge commit even when a fast-forward is possible
    pub no_ff: bool,
}

/// Successful end of a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The active branch moved to the target head, no commit was made
    FastForward,
    /// Clean merge recorded by the given commit
    Merged(ObjectId),
    /// Conflicts written to the working tree and recorded by the given commit
    Conflicted(ObjectId),
}

/// Index updates a three-way merge performs once the working tree is written
enum StagedChange {
    Add(ObjectId),
    Remove(ObjectId),
}

impl Repository {
    pub fn merge(&mut self, target: &str, options: &MergeOptions) -> anyhow::Result<MergeOutcome> {
        let (target_name, target_head) = self
            .refs()
            .get(target)
            .map(|(name, head)| (name.clone(), head.clone()))
            .ok_or(TwigError::UnknownBranch)?;
        if !self.index().is_clean() {
            anyhow::bail!(TwigError::UncommittedChanges);
        }
        if self.refs().is_current_branch(target) {
            anyhow::bail!(TwigError::SelfMerge);
        }

        let current_head = self.head_oid()?;
        let split_point = {
            let database = self.database();
            let finder = SplitPointFinder::new(|oid: &ObjectId| {
                database
                    .load_commit(oid)
                    .map(|commit| commit.parent().cloned())
            });

            let current_ancestors = self
                .refs()
                .ancestor_digests(database, self.refs().current_branch().as_ref())?;

            finder
                .find_split_point(current_ancestors, &target_head)?
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "{} and {} share no history",
                        self.refs().current_branch(),
                        target_name
                    )
                })?
        };

        if split_point == target_head {
            anyhow::bail!(TwigError::GivenIsAncestor);
        }

        if split_point == current_head && !options.no_ff {
            return self.fast_forward(target_name.as_ref(), target_head);
        }

        self.three_way_merge(target_name.as_ref(), &split_point, &target_head)
    }

    fn fast_forward(
        &mut self,
        target: &str,
        target_head: ObjectId,
    ) -> anyhow::Result<MergeOutcome> {
        let head_tree = self.head_commit()?.tree();
        let target_tree = self.database().load_commit(&target_head)?.tree();

        let mut migration = Migration::between(head_tree, target_tree);
        for path in self.removed_files(target)?.keys() {
            migration.delete(path);
        }

        migration.check_conflicts(self.workspace(), head_tree)?;
        self.workspace()
            .apply_migration(&migration, self.database())?;

        log::info!(
            "fast-forwarding {} to {}",
            self.refs().current_branch(),
            target_head.to_short_oid()
        );
        self.refs_mut().update_head(target_head);
        self.index_mut().clear();

        writeln!(self.writer(), "{FAST_FORWARD_MESSAGE}")?;

        Ok(MergeOutcome::FastForward)
    }

    fn three_way_merge(
        &mut self,
        target: &str,
        split_point: &ObjectId,
        target_head: &ObjectId,
    ) -> anyhow::Result<MergeOutcome> {
        let split_tree = self.database().load_commit(split_point)?.tree().clone();
        let head_tree = self.head_commit()?.tree().clone();
        let target_tree = self.database().load_commit(target_head)?.tree().clone();

        let actions = resolve(&split_tree, &head_tree, &target_tree);

        let mut migration = Migration::default();
        let mut staged = BTreeMap::new();
        let mut conflicted = BTreeSet::new();

        for (path, action) in actions {
            let tracked = head_tree.contains(&path);

            match action {
                MergeAction::Take(oid) => {
                    migration.write(&path, oid.clone(), tracked);
                    staged.insert(path, StagedChange::Add(oid));
                }
                MergeAction::Remove => {
                    if let Some(oid) = head_tree.get(&path) {
                        staged.insert(path.clone(), StagedChange::Remove(oid.clone()));
                    }
                    migration.delete(&path);
                }
                MergeAction::Conflict { current, target } => {
                    let ours = self.blob_content(current.as_ref())?;
                    let theirs = self.blob_content(target.as_ref())?;
                    let content = conflict_content(ours.as_deref(), theirs.as_deref());

                    let oid = self
                        .database_mut()
                        .put_blob(Blob::new(path.clone(), content));
                    migration.write(&path, oid.clone(), tracked);
                    staged.insert(path.clone(), StagedChange::Add(oid));
                    conflicted.insert(path);
                }
                MergeAction::Keep => {}
            }
        }

        // deletions the target branch made are carried over
        for (path, _) in self.removed_files(target)? {
            if conflicted.contains(&path) {
                continue;
            }
            if let Some(oid) = head_tree.get(&path) {
                staged.insert(path.clone(), StagedChange::Remove(oid.clone()));
            }
            migration.delete(&path);
        }

        migration.check_conflicts(self.workspace(), &head_tree)?;
        self.workspace()
            .apply_migration(&migration, self.database())?;

        for (path, change) in staged {
            match change {
                StagedChange::Add(oid) => self.index_mut().stage_add(&path, oid),
                StagedChange::Remove(oid) => self.index_mut().stage_removal(&path, oid),
            }
        }

        if conflicted.is_empty() {
            let message = format!(
                "Merged {} into {}.",
                target,
                self.refs().current_branch()
            );
            let commit_oid = self.write_commit(&message, CommitKind::Merge)?;

            Ok(MergeOutcome::Merged(commit_oid))
        } else {
            log::debug!("conflicting paths: {conflicted:?}");
            let commit_oid = self.write_commit(CONFLICT_MESSAGE, CommitKind::Merge)?;
            writeln!(self.writer(), "{CONFLICT_MESSAGE}")?;

            Ok(MergeOutcome::Conflicted(commit_oid))
        }
    }

    fn blob_content(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        oid.map(|oid| {
            self.database()
                .load_blob(oid)
                .map(|blob| blob.content().clone())
        })
        .transpose()
    }
}
