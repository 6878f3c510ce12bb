//! Persisted repository state
//!
//! A repository lives in a single file, `.twig/state`: the zlib-compressed JSON
//! encoding of `RepositoryState`. Commands load it whole, work on it in memory
//! and store it whole once they succeed.
//!
//! ## Locking
//!
//! `Storage` holds an exclusive lock on `.twig/lock` from the moment it is
//! opened until it is dropped, so two commands never interleave their
//! load/store cycles on the same repository.
//!
//! ## Atomicity
//!
//! The state file is written to a temporary file in the same directory and
//! renamed over the previous one.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::remotes::Remotes;
use anyhow::Context;
use bytes::Bytes;
use file_guard::{FileGuard, Lock};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Version of the state layout written by this build
pub const STATE_VERSION: u32 = 1;

/// Name of the state file inside the metadata directory
pub const STATE_FILE: &str = "state";

/// Name of the lock file inside the metadata directory
pub const LOCK_FILE: &str = "lock";

const TEMP_STATE_FILE: &str = "state.tmp";

/// Everything a repository persists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryState {
    pub version: u32,
    pub database: Database,
    pub refs: Refs,
    pub index: Index,
    pub remotes: Remotes,
}

/// Borrowed view of the state, used when storing
#[derive(Debug, Serialize)]
pub struct RepositoryStateRef<'s> {
    pub version: u32,
    pub database: &'s Database,
    pub refs: &'s Refs,
    pub index: &'s Index,
    pub remotes: &'s Remotes,
}

/// Locked access to the state file of one repository
pub struct Storage {
    path: Box<Path>,
    _lock: FileGuard<Box<File>>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").field("path", &self.path).finish()
    }
}

impl Storage {
    /// Acquire the repository lock, blocking until it is available
    ///
    /// # Arguments
    ///
    /// * `path` - Metadata directory of the repository (`.twig`)
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let lock_path = path.join(LOCK_FILE);
        let lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open lock file at {:?}", lock_path))?;

        let lock = file_guard::lock(Box::new(lock_file), Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock {:?}", lock_path))?;
        log::debug!("locked {:?}", lock_path);

        Ok(Storage {
            path: path.into(),
            _lock: lock,
        })
    }

    pub fn exists(&self) -> bool {
        self.path.join(STATE_FILE).exists()
    }

    pub fn load(&self) -> anyhow::Result<RepositoryState> {
        let state_path = self.path.join(STATE_FILE);
        let content = std::fs::read(&state_path)
            .with_context(|| format!("failed to read state file {:?}", state_path))?;

        let content = Self::decompress(content.into())?;
        let state: RepositoryState = serde_json::from_slice(&content)
            .with_context(|| format!("failed to parse state file {:?}", state_path))?;

        if state.version != STATE_VERSION {
            anyhow::bail!(
                "unsupported state version {} in {:?} (expected {})",
                state.version,
                state_path,
                STATE_VERSION
            );
        }

        log::debug!("loaded state from {:?}", state_path);

        Ok(state)
    }

    pub fn store(&self, state: &RepositoryStateRef<'_>) -> anyhow::Result<()> {
        let state_path = self.path.join(STATE_FILE);
        let temp_state_path = self.path.join(TEMP_STATE_FILE);

        let content = serde_json::to_vec(state).context("failed to encode repository state")?;
        let content = Self::compress(content.into())?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_state_path)
            .with_context(|| format!("failed to open state file {:?}", temp_state_path))?;

        file.write_all(&content)
            .with_context(|| format!("failed to write state file {:?}", temp_state_path))?;
        file.sync_all()
            .with_context(|| format!("failed to flush state file {:?}", temp_state_path))?;

        // rename the temp file over the state file to make the write atomic
        std::fs::rename(&temp_state_path, &state_path)
            .with_context(|| format!("failed to rename state file to {:?}", state_path))?;

        log::debug!("stored state to {:?}", state_path);

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress repository state")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing repository state")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress repository state")?;

        Ok(decompressed_content.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::branch::branch_name::BranchName;
    use crate::artifacts::objects::commit::Commit;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    fn fresh_state() -> (Database, Refs) {
        let mut database = Database::default();
        let root = database.store_commit(Commit::initial());
        let refs = Refs::new(BranchName::try_parse("master".to_string()).unwrap(), root);

        (database, refs)
    }

    #[test]
    fn stored_state_loads_back() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let (database, refs) = fresh_state();
        let index = Index::default();
        let remotes = Remotes::default();

        assert!(!storage.exists());
        storage
            .store(&RepositoryStateRef {
                version: STATE_VERSION,
                database: &database,
                refs: &refs,
                index: &index,
                remotes: &remotes,
            })
            .unwrap();

        let state = storage.load().unwrap();
        assert!(storage.exists());
        assert_eq!(state.refs, refs);
        assert_eq!(state.database.commits().count(), 1);
        assert!(!dir.path().join(TEMP_STATE_FILE).exists());
    }

    #[test]
    fn other_versions_are_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let (database, refs) = fresh_state();

        storage
            .store(&RepositoryStateRef {
                version: STATE_VERSION + 1,
                database: &database,
                refs: &refs,
                index: &Index::default(),
                remotes: &Remotes::default(),
            })
            .unwrap();

        assert!(storage.load().is_err());
    }
}
