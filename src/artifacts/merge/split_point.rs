//! Split point finder
//!
//! The split point of two branches is the latest commit present in both of
//! their histories. Histories are single-parent chains, so the search is a
//! plain two-step walk:
//!
//! 1. Collect every commit of the current branch's chain.
//! 2. Walk the target branch's chain, head first, and stop at the first commit
//!    collected in step 1.
//!
//! Merges keep a single parent, so commits reachable only through a merged
//! branch are invisible to the walk; repeated merges between the same branches
//! may therefore find an older split point than git would.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = SplitPointFinder::new(|commit_id| {
//!     database.load_commit(commit_id).map(|commit| commit.parent().cloned())
//! });
//!
//! let current_ancestors = refs.ancestor_digests(&database, "master")?;
//! let split_point = finder.find_split_point(current_ancestors, &target_head)?;
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Finds the split point of two commits
///
/// # Type Parameters
///
/// * `ParentLoaderFn` - A function returning the parent of a commit (`None` for
///   the initial commit), which keeps the finder independent of storage.
#[derive(Debug, Clone)]
pub struct SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    parent_loader: ParentLoaderFn,
}

impl<ParentLoaderFn> SplitPointFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    pub fn new(parent_loader: ParentLoaderFn) -> Self {
        Self { parent_loader }
    }

    /// Latest commit of the target chain found in `current_ancestors`
    ///
    /// Returns `None` when the histories are unrelated.
    pub fn find_split_point(
        &self,
        current_ancestors: impl IntoIterator<Item = ObjectId>,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let current_ancestors = current_ancestors.into_iter().collect::<HashSet<_>>();

        let mut candidate = Some(target.clone());
        while let Some(commit_id) = candidate {
            if current_ancestors.contains(&commit_id) {
                log::debug!(
                    "split point with {} is {}",
                    target.to_short_oid(),
                    commit_id.to_short_oid()
                );
                return Ok(Some(commit_id));
            }

            candidate = (self.parent_loader)(&commit_id)?;
        }

        log::debug!("no split point with {}", target.to_short_oid());

        Ok(None)
    }
}
