use crate::areas::database::Database;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [crate::REPOSITORY_DIR, ".", ".."];

/// Working directory of a repository
///
/// Paths handed in and out are repository-relative strings with `/`
/// separators; the metadata directory is never listed.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Every regular file of the working tree, sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name().to_string_lossy().as_ref()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.relative_path(entry.path()))
            .collect::<Vec<_>>();

        files.sort();

        Ok(files)
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;
        let components = relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().to_string()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        Some(components.join("/"))
    }

    /// Normalize a user-supplied path into a repository-relative one
    ///
    /// Accepts paths relative to the repository root or absolute paths inside
    /// it. Paths escaping the repository or pointing into its metadata
    /// directory yield `None`.
    pub fn normalize(&self, file_path: &str) -> Option<String> {
        let candidate = Path::new(file_path);
        let relative = if candidate.is_absolute() {
            candidate.strip_prefix(self.path.as_ref()).ok()?.to_path_buf()
        } else {
            candidate.to_path_buf()
        };

        let mut components: Vec<String> = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => components.push(name.to_string_lossy().to_string()),
                Component::CurDir => {}
                Component::ParentDir => {
                    components.pop()?;
                }
                _ => return None,
            }
        }

        match components.first() {
            None => None,
            Some(first) if Self::is_ignored(first) => None,
            Some(_) => Some(components.join("/")),
        }
    }

    fn full_path(&self, file_path: &str) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn exists(&self, file_path: &str) -> bool {
        self.full_path(file_path).exists()
    }

    pub fn is_file(&self, file_path: &str) -> bool {
        self.full_path(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &str) -> anyhow::Result<Bytes> {
        let path = self.full_path(file_path);

        let content =
            std::fs::read(&path).with_context(|| format!("failed to read file {:?}", path))?;

        Ok(content.into())
    }

    pub fn parse_blob(&self, file_path: &str) -> anyhow::Result<Blob> {
        let content = self.read_file(file_path)?;

        Ok(Blob::new(file_path.to_string(), content))
    }

    /// Replace the content of a file, creating missing parent directories
    pub fn write_file(&self, file_path: &str, content: &[u8]) -> anyhow::Result<()> {
        let path = self.full_path(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {:?}", parent))?;
        }
        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("failed to remove directory {:?}", path))?;
        }

        std::fs::write(&path, content).with_context(|| format!("failed to write file {:?}", path))
    }

    /// Delete a file if present, then prune the directories it leaves empty
    pub fn remove_file(&self, file_path: &str) -> anyhow::Result<()> {
        let path = self.full_path(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove file {:?}", path))?;
        }

        for ancestor in path.ancestors().skip(1) {
            if ancestor == self.path.as_ref() || !ancestor.starts_with(self.path.as_ref()) {
                break;
            }
            // stops at the first directory that still has children
            if std::fs::remove_dir(ancestor).is_err() {
                break;
            }
        }

        Ok(())
    }

    // The order of applying migrations is important:
    // deletions go first so a file can take the place of a removed directory.
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for file_path in migration.deletes() {
            self.remove_file(file_path)?;
        }

        for (file_path, oid) in migration.writes() {
            let blob = database.load_blob(oid)?;
            self.write_file(file_path, blob.content())?;
        }

        Ok(())
    }
}
