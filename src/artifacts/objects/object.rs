use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use sha1::{Digest, Sha1};

pub trait Packable {
    /// Bytes the object digest is computed from
    fn serialize(&self) -> Bytes;
}

pub trait Object: Packable {
    fn object_id(&self) -> ObjectId {
        let content = self.serialize();
        let mut hasher = Sha1::new();
        hasher.update(&content);

        ObjectId::from_digest(&hasher.finalize())
    }
}
