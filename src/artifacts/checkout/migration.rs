use crate::areas::workspace::Workspace;
use crate::artifacts::checkout::conflict::ConflictType;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::TwigError;
use std::collections::BTreeMap;

/// Type of file system action required by a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    /// Write a file the source snapshot does not track
    Add,
    /// Rewrite a file the source snapshot tracks
    Modify,
    /// Delete a file
    Delete,
}

/// Planned actions grouped by type, each path with the blob it receives
pub type ActionsSet = BTreeMap<ActionType, BTreeMap<String, Option<ObjectId>>>;

/// Planned rewrite of the working tree
#[derive(Debug, Clone, Default)]
pub struct Migration {
    actions: ActionsSet,
}

impl Migration {
    /// Plan the move from `from` to `to`
    ///
    /// Every file of `to` is written, even when `from` already holds the same
    /// blob, so local edits of tracked files are replaced. Files only `from`
    /// tracks are deleted.
    pub fn between(from: &Tree, to: &Tree) -> Self {
        let mut migration = Migration::default();

        for (path, oid) in to.entries() {
            migration.write(path, oid.clone(), from.contains(path));
        }
        for path in from.paths().filter(|path| !to.contains(path)) {
            migration.delete(path);
        }

        migration
    }

    /// Plan writing `oid` at `path`
    pub fn write(&mut self, path: &str, oid: ObjectId, tracked: bool) {
        let action = if tracked {
            ActionType::Modify
        } else {
            ActionType::Add
        };

        self.forget(path);
        self.actions
            .entry(action)
            .or_default()
            .insert(path.to_string(), Some(oid));
    }

    /// Plan deleting `path`
    pub fn delete(&mut self, path: &str) {
        self.forget(path);
        self.actions
            .entry(ActionType::Delete)
            .or_default()
            .insert(path.to_string(), None);
    }

    fn forget(&mut self, path: &str) {
        for paths in self.actions.values_mut() {
            paths.remove(path);
        }
    }

    /// Files to write with their blobs, additions before modifications
    pub fn writes(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        [ActionType::Add, ActionType::Modify]
            .into_iter()
            .filter_map(|action| self.actions.get(&action))
            .flatten()
            .filter_map(|(path, oid)| oid.as_ref().map(|oid| (path, oid)))
    }

    /// Files to delete
    pub fn deletes(&self) -> impl Iterator<Item = &String> {
        self.actions
            .get(&ActionType::Delete)
            .into_iter()
            .flat_map(|paths| paths.keys())
    }

    /// Abort when an untracked working file would be lost
    ///
    /// A file in the way blocks the migration when it exists, is not tracked by
    /// `tracked` (the current commit's tree) and is either deleted or replaced
    /// by a blob with a different digest.
    pub fn check_conflicts(&self, workspace: &Workspace, tracked: &Tree) -> anyhow::Result<()> {
        for paths in self.actions.values() {
            for (path, incoming) in paths {
                if tracked.contains(path) || !workspace.exists(path) {
                    continue;
                }

                let unchanged = match incoming {
                    Some(oid) if workspace.is_file(path) => {
                        &workspace.parse_blob(path)?.object_id() == oid
                    }
                    _ => false,
                };

                if !unchanged {
                    let conflict = ConflictType::get_conflict_type(incoming.as_ref());
                    log::debug!("untracked file {path} {}", conflict.describe());
                    anyhow::bail!(TwigError::UntrackedFileInTheWay);
                }
            }
        }

        Ok(())
    }
}
