//! History transfer between repositories
//!
//! Push and fetch both copy a run of commits, with every blob their trees
//! reference, from one object database into another. Digests never change:
//! a copied commit may receive a new parent link (fetch splices remote history
//! on top of local history), but the parent is not part of its digest.

pub mod transfer;
