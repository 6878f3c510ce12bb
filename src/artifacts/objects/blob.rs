//! Blob object
//!
//! Blobs store file content. Unlike git, a blob is scoped by the path it was
//! read from: its digest is `sha1(path ++ content)`, so identical content under
//! two different paths yields two different blobs.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::{BufMut, Bytes, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Blob object representing the content of one file
#[derive(Debug, Clone, new, Serialize, Deserialize)]
pub struct Blob {
    /// Repository-relative path the content was read from
    path: String,
    /// Raw file content
    content: Bytes,
}

impl Blob {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Blobs are equal when their digests are, content is never compared
    pub fn same_as(&self, other: &Blob) -> bool {
        self.object_id() == other.object_id()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        let mut blob_bytes = BytesMut::with_capacity(self.path.len() + self.content.len());
        blob_bytes.put_slice(self.path.as_bytes());
        blob_bytes.put_slice(&self.content);

        blob_bytes.freeze()
    }
}

impl Object for Blob {}
