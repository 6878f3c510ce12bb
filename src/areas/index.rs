//! Index (staging area)
//!
//! The index tracks which changes go into the next commit. It holds two maps
//! from repository-relative path to blob digest:
//!
//! - `addition`: files staged with their new content
//! - `removal`: files staged for deletion, with the digest HEAD tracked
//!
//! A path is never in both maps at once. The index is emptied after every
//! commit, branch checkout and reset.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    addition: BTreeMap<String, ObjectId>,
    removal: BTreeMap<String, ObjectId>,
}

impl Index {
    /// Stage new content for a path, dropping any pending removal of it
    pub fn stage_add(&mut self, path: &str, oid: ObjectId) {
        self.removal.remove(path);
        self.addition.insert(path.to_string(), oid);
    }

    /// Drop a staged addition, returning the digest that was staged
    pub fn unstage_add(&mut self, path: &str) -> Option<ObjectId> {
        self.addition.remove(path)
    }

    /// Stage the removal of a tracked path
    pub fn stage_removal(&mut self, path: &str, oid: ObjectId) {
        self.addition.remove(path);
        self.removal.insert(path.to_string(), oid);
    }

    /// Drop a pending removal, returning the digest it recorded
    pub fn unstage_removal(&mut self, path: &str) -> Option<ObjectId> {
        self.removal.remove(path)
    }

    pub fn staged_addition(&self, path: &str) -> Option<&ObjectId> {
        self.addition.get(path)
    }

    pub fn is_staged_for_removal(&self, path: &str) -> bool {
        self.removal.contains_key(path)
    }

    pub fn addition(&self) -> &BTreeMap<String, ObjectId> {
        &self.addition
    }

    pub fn removal(&self) -> &BTreeMap<String, ObjectId> {
        &self.removal
    }

    /// Nothing staged in either direction
    pub fn is_clean(&self) -> bool {
        self.addition.is_empty() && self.removal.is_empty()
    }

    pub fn clear(&mut self) {
        self.addition.clear();
        self.removal.clear();
    }

    /// Snapshot the next commit would record on top of `parent`
    pub fn snapshot(&self, parent: &Tree) -> Tree {
        parent.apply(&self.addition, self.removal.keys())
    }
}
