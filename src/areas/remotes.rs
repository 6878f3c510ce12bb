//! Remote table
//!
//! A remote is a name for another twig repository on the same machine. The
//! recorded path may designate either the repository root or its `.twig`
//! directory, and is resolved against the local repository root when
//! relative.

use crate::errors::TwigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remotes {
    remotes: BTreeMap<String, String>,
}

impl Remotes {
    pub fn add(&mut self, name: &str, path: &str) -> anyhow::Result<()> {
        if self.remotes.contains_key(name) {
            anyhow::bail!(TwigError::DuplicateRemote);
        }

        self.remotes.insert(name.to_string(), path.to_string());

        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> anyhow::Result<()> {
        self.remotes
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| TwigError::UnknownRemote.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.remotes.get(name).map(String::as_str)
    }

    /// Root directory of the repository a remote designates
    ///
    /// Fails with `UnknownRemote` for an unknown name and `RemoteNotFound` when
    /// the path does not lead to an initialized repository.
    pub fn resolve(&self, name: &str, local_root: &Path) -> anyhow::Result<PathBuf> {
        let raw_path = self.get(name).ok_or(TwigError::UnknownRemote)?;

        let path = local_root.join(raw_path);
        let root = if path.file_name().is_some_and(|name| name == crate::REPOSITORY_DIR) {
            path.parent().map(Path::to_path_buf).unwrap_or(path)
        } else {
            path
        };

        if !root.join(crate::REPOSITORY_DIR).is_dir() {
            log::debug!("remote {name} points at {:?}, not a repository", root);
            anyhow::bail!(TwigError::RemoteNotFound);
        }

        Ok(root)
    }
}
