//! Object database
//!
//! Holds every blob and commit a repository knows about. Objects are keyed by
//! their digest and never deleted; commits additionally keep their global
//! creation order, which `global-log`, `find` and prefix lookups follow.

use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::LOOKUP_PREFIX_LENGTH;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    /// Blob arena keyed by digest
    blobs: BTreeMap<ObjectId, Blob>,
    /// Commits keyed by digest
    commits: BTreeMap<ObjectId, Commit>,
    /// Commit digests in creation order
    history: Vec<ObjectId>,
}

impl Database {
    /// Store a blob unless it already exists, returning its digest
    pub fn put_blob(&mut self, blob: Blob) -> ObjectId {
        let oid = blob.object_id();
        self.blobs.entry(oid.clone()).or_insert(blob);

        oid
    }

    pub fn blob(&self, oid: &ObjectId) -> Option<&Blob> {
        self.blobs.get(oid)
    }

    pub fn has_blob(&self, oid: &ObjectId) -> bool {
        self.blobs.contains_key(oid)
    }

    /// Look up a blob that a tree or the index references
    ///
    /// A dangling reference means the persisted state is corrupted.
    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<&Blob> {
        self.blob(oid)
            .ok_or_else(|| anyhow::anyhow!("blob {oid} is missing from the object database"))
    }

    /// Store a commit, returning its digest
    ///
    /// Storing a commit that is already known keeps the first record: the
    /// creation order and the original parent link stay untouched.
    pub fn store_commit(&mut self, commit: Commit) -> ObjectId {
        let oid = commit.object_id();

        if !self.commits.contains_key(&oid) {
            self.history.push(oid.clone());
            self.commits.insert(oid.clone(), commit);
        }

        oid
    }

    pub fn commit(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits.get(oid)
    }

    pub fn has_commit(&self, oid: &ObjectId) -> bool {
        self.commits.contains_key(oid)
    }

    /// Look up a commit that a branch or another commit references
    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<&Commit> {
        self.commit(oid)
            .ok_or_else(|| anyhow::anyhow!("commit {oid} is missing from the object database"))
    }

    /// Every commit in creation order
    pub fn commits(&self) -> impl Iterator<Item = (&ObjectId, &Commit)> {
        self.history
            .iter()
            .filter_map(|oid| self.commits.get(oid).map(|commit| (oid, commit)))
    }

    /// Resolve an abbreviated commit id
    ///
    /// Only the first 6 characters of the abbreviation are significant; when
    /// several commits match, the oldest one wins.
    pub fn find_commit_by_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        log::debug!(
            "resolving commit prefix {}",
            prefix.chars().take(LOOKUP_PREFIX_LENGTH).collect::<String>()
        );

        self.history
            .iter()
            .find(|oid| oid.matches_prefix(prefix))
            .cloned()
            .ok_or_else(|| TwigError::UnknownCommit.into())
    }

    /// Every commit with exactly the given message, in creation order
    pub fn find_by_message(&self, message: &str) -> anyhow::Result<Vec<ObjectId>> {
        let matches = self
            .commits()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid.clone())
            .collect::<Vec<_>>();

        if matches.is_empty() {
            anyhow::bail!(TwigError::NoCommitWithMessage);
        }

        Ok(matches)
    }

    /// Walk the parent chain of `head`, head first
    pub fn history<'a>(&'a self, head: &ObjectId) -> RevList<'a> {
        RevList::new(self, Some(head.clone()))
    }

    /// Whether `ancestor` is on the parent chain of `descendant` (reflexive)
    pub fn is_ancestor(&self, ancestor: &ObjectId, descendant: &ObjectId) -> anyhow::Result<bool> {
        for entry in self.history(descendant) {
            let (oid, _) = entry?;
            if &oid == ancestor {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::tree::Tree;
    use bytes::Bytes;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn chain(database: &mut Database, messages: &[&str]) -> Vec<ObjectId> {
        let mut parent = database.store_commit(Commit::initial());
        let mut oids = vec![parent.clone()];

        for (seconds, message) in messages.iter().enumerate() {
            let timestamp = DateTime::from_timestamp(seconds as i64 + 1, 0)
                .unwrap()
                .fixed_offset();
            let commit = Commit::try_new(
                message.to_string(),
                timestamp,
                Some(parent.clone()),
                Tree::default(),
            )
            .unwrap();
            parent = database.store_commit(commit);
            oids.push(parent.clone());
        }

        oids
    }

    #[test]
    fn blobs_are_stored_once() {
        let mut database = Database::default();
        let first = database.put_blob(Blob::new("a.txt".to_string(), Bytes::from("x")));
        let second = database.put_blob(Blob::new("a.txt".to_string(), Bytes::from("x")));

        assert_eq!(first, second);
        assert_eq!(database.blobs.len(), 1);
        assert_eq!(database.blob(&first).unwrap().content(), &Bytes::from("x"));
    }

    #[test]
    fn ancestry_is_reflexive_and_follows_parents() {
        let mut database = Database::default();
        let oids = chain(&mut database, &["c1", "c2"]);

        assert!(database.is_ancestor(&oids[2], &oids[2]).unwrap());
        assert!(database.is_ancestor(&oids[0], &oids[2]).unwrap());
        assert!(!database.is_ancestor(&oids[2], &oids[1]).unwrap());
    }

    #[test]
    fn history_walks_from_head_to_root() {
        let mut database = Database::default();
        let oids = chain(&mut database, &["c1", "c2"]);

        let walked = database
            .history(&oids[2])
            .map(|entry| entry.unwrap().0)
            .collect::<Vec<_>>();

        assert_eq!(walked, oids.iter().rev().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn prefix_lookup_uses_six_significant_characters() {
        let mut database = Database::default();
        let oids = chain(&mut database, &["c1"]);
        let target = oids[1].as_ref();
        let noisy_prefix = format!("{}zzzz", &target[..6]);

        assert_eq!(database.find_commit_by_prefix(&target[..6]).unwrap(), oids[1]);
        assert_eq!(database.find_commit_by_prefix(&noisy_prefix).unwrap(), oids[1]);
        assert_eq!(
            database
                .find_commit_by_prefix("zzzzzz")
                .unwrap_err()
                .downcast_ref::<TwigError>(),
            Some(&TwigError::UnknownCommit)
        );
    }

    #[test]
    fn find_by_message_keeps_creation_order() {
        let mut database = Database::default();
        let oids = chain(&mut database, &["same", "other", "same"]);

        assert_eq!(
            database.find_by_message("same").unwrap(),
            vec![oids[1].clone(), oids[3].clone()]
        );
        assert!(database.find_by_message("missing").is_err());
    }

    #[test]
    fn storing_a_known_commit_keeps_the_first_record() {
        let mut database = Database::default();
        let oids = chain(&mut database, &["c1"]);
        let moved = database.commit(&oids[1]).unwrap().reparented(None);

        database.store_commit(moved);

        assert_eq!(database.commits().count(), 2);
        assert_eq!(database.commit(&oids[1]).unwrap().parent(), Some(&oids[0]));
    }
}
