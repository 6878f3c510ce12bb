//! Tree snapshot
//!
//! A tree maps every tracked path of a snapshot to the digest of its blob.
//! Trees are flat (no nested directory objects): paths are repository-relative
//! strings with `/` separators, kept sorted.
//!
//! ## Digest
//!
//! The digest of a tree is computed from its sorted entries, one
//! `<path>\0<blob-oid>\n` line per entry. It only feeds the commit digest; trees
//! are not stored on their own.

use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    entries: BTreeMap<String, ObjectId>,
}

impl Tree {
    pub fn new(entries: BTreeMap<String, ObjectId>) -> Self {
        Tree { entries }
    }

    pub fn get(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Derive a new snapshot: `additions` override entries, `removals` are dropped
    pub fn apply<'a>(
        &self,
        additions: impl IntoIterator<Item = (&'a String, &'a ObjectId)>,
        removals: impl IntoIterator<Item = &'a String>,
    ) -> Tree {
        let mut entries = self.entries.clone();

        for (path, oid) in additions {
            entries.insert(path.clone(), oid.clone());
        }
        for path in removals {
            entries.remove(path);
        }

        Tree { entries }
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let mut content = Vec::new();

        for (path, oid) in &self.entries {
            content.extend_from_slice(path.as_bytes());
            content.push(b'\0');
            content.extend_from_slice(oid.as_ref().as_bytes());
            content.push(b'\n');
        }

        Bytes::from(content)
    }
}

impl Object for Tree {}
