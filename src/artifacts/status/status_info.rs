use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    /// Branch names, flagged when active
    pub(crate) branches: Vec<(String, bool)>,
    pub(crate) staged_files: Vec<String>,
    pub(crate) removed_files: Vec<String>,
    pub(crate) changed_files: BTreeSet<FileChange>,
    pub(crate) untracked_files: BTreeSet<String>,
}

impl StatusInfo {
    pub fn branches(&self) -> &[(String, bool)] {
        &self.branches
    }

    pub fn staged_files(&self) -> &[String] {
        &self.staged_files
    }

    pub fn removed_files(&self) -> &[String] {
        &self.removed_files
    }

    pub fn changed_files(&self) -> &BTreeSet<FileChange> {
        &self.changed_files
    }

    pub fn untracked_files(&self) -> &BTreeSet<String> {
        &self.untracked_files
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let repository = self.repository;
        let inspector = Inspector::new(repository);
        let head_tree = repository.head_commit()?.tree();
        let index = repository.index();

        let branches = repository
            .refs()
            .branches()
            .map(|(name, _)| {
                (
                    name.to_string(),
                    repository.refs().is_current_branch(name.as_ref()),
                )
            })
            .collect();

        let workspace_files = repository.workspace().list_files()?;

        // every path the index or the head commit knows about
        let known_paths = head_tree
            .paths()
            .chain(index.addition().keys())
            .collect::<BTreeSet<_>>();

        let mut changed_files = BTreeSet::new();
        for path in known_paths {
            if let Some(change) = inspector.check_workspace_file(path, head_tree)? {
                changed_files.insert(FileChange {
                    path: path.clone(),
                    change,
                });
            }
        }

        let untracked_files = workspace_files
            .into_iter()
            .filter(|path| inspector.is_untracked(path, head_tree))
            .collect();

        Ok(StatusInfo {
            branches,
            staged_files: index.addition().keys().cloned().collect(),
            removed_files: index.removal().keys().cloned().collect(),
            changed_files,
            untracked_files,
        })
    }
}
