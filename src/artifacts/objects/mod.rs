//! twig object types and operations
//!
//! All content is stored as objects identified by SHA-1 digests:
//!
//! - **Blob**: the content of one file at one path
//! - **Tree**: the path to blob mapping of a whole snapshot
//! - **Commit**: a snapshot with message, timestamp and a single parent link
//!
//! Objects implement `Packable`, whose output is the exact preimage of the
//! digest returned by `Object::object_id`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Number of leading digest characters compared when looking up a commit by prefix
pub const LOOKUP_PREFIX_LENGTH: usize = 6;
