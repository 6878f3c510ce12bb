//! Branch table
//!
//! Branches are named pointers into the commit graph. Exactly one branch is
//! active at any time; it plays the role git gives to `HEAD`.
//!
//! ## Removed view
//!
//! The set of files a branch "removed" is never stored. It is derived from the
//! commit graph: the paths tracked by the parent of the branch head but no
//! longer tracked by the head itself. Pending removals staged in the index
//! are added on top by the repository for the active branch.

use crate::areas::database::Database;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    /// Branch heads by name
    branches: BTreeMap<BranchName, ObjectId>,
    /// The active branch
    current: BranchName,
}

impl Refs {
    /// Create a branch table holding a single active branch
    pub fn new(current: BranchName, head: ObjectId) -> Self {
        Refs {
            branches: BTreeMap::from([(current.clone(), head)]),
            current,
        }
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current
    }

    pub fn is_current_branch(&self, name: &str) -> bool {
        self.current.as_ref() == name
    }

    /// Head commit of the active branch
    pub fn head(&self) -> anyhow::Result<&ObjectId> {
        self.branches
            .get(&self.current)
            .ok_or_else(|| anyhow::anyhow!("active branch {} has no head", self.current))
    }

    /// Look up a branch by its raw name
    pub fn get(&self, name: &str) -> Option<(&BranchName, &ObjectId)> {
        self.branches.get_key_value(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.branches.contains_key(name)
    }

    /// Every branch with its head, sorted by name
    pub fn branches(&self) -> impl Iterator<Item = (&BranchName, &ObjectId)> {
        self.branches.iter()
    }

    /// Create a branch pointing at `head`
    pub fn create(&mut self, name: BranchName, head: ObjectId) -> anyhow::Result<()> {
        if self.branches.contains_key(&name) {
            anyhow::bail!(TwigError::DuplicateBranch);
        }

        log::info!("creating branch {name} at {}", head.to_short_oid());
        self.branches.insert(name, head);

        Ok(())
    }

    /// Delete a branch; its commits stay in the database
    pub fn remove(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.branches.contains_key(name) {
            anyhow::bail!(TwigError::UnknownBranch);
        }
        if self.is_current_branch(name) {
            anyhow::bail!(TwigError::CannotRemoveActive);
        }

        log::info!("removing branch {name}");
        self.branches.remove(name);

        Ok(())
    }

    /// Point a branch at `head`, creating it when missing
    ///
    /// No fast-forward rule is enforced here.
    pub fn set_head(&mut self, name: &BranchName, head: ObjectId) {
        log::info!("moving branch {name} to {}", head.to_short_oid());
        self.branches.insert(name.clone(), head);
    }

    /// Advance the active branch
    pub fn update_head(&mut self, head: ObjectId) {
        let current = self.current.clone();
        self.set_head(&current, head);
    }

    /// Make another existing branch the active one
    pub fn switch_to(&mut self, name: &str) -> anyhow::Result<()> {
        let (name, _) = self
            .branches
            .get_key_value(name)
            .ok_or(TwigError::NoSuchBranch)?;

        self.current = name.clone();

        Ok(())
    }

    /// Digests of every commit on a branch, head first
    pub fn ancestor_digests(
        &self,
        database: &Database,
        name: &str,
    ) -> anyhow::Result<Vec<ObjectId>> {
        let (_, head) = self.get(name).ok_or(TwigError::UnknownBranch)?;

        database
            .history(head)
            .map(|entry| entry.map(|(oid, _)| oid))
            .collect()
    }

    /// Paths the branch head dropped relative to its parent
    pub fn removed(
        &self,
        database: &Database,
        name: &str,
    ) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let (_, head) = self.get(name).ok_or(TwigError::UnknownBranch)?;
        let head = database.load_commit(head)?;

        let Some(parent) = head.parent() else {
            return Ok(BTreeMap::new());
        };
        let parent = database.load_commit(parent)?;

        Ok(parent
            .tree()
            .entries()
            .filter(|(path, _)| !head.tree().contains(path))
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect())
    }
}
