use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    fn is_content_changed(&self, path: &str, expected: &ObjectId) -> anyhow::Result<bool> {
        let blob = self.repository.workspace().parse_blob(path)?;

        Ok(&blob.object_id() != expected)
    }

    /// Unstaged change of a path known to the index or the head tree
    ///
    /// - staged for addition: compared against the staged blob
    /// - staged for removal: never reported here
    /// - tracked by `head_tree`: compared against the committed blob
    pub fn check_workspace_file(
        &self,
        path: &str,
        head_tree: &Tree,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        let index = self.repository.index();
        let exists = self.repository.workspace().is_file(path);

        let expected = match index.staged_addition(path) {
            Some(staged) => staged,
            None if index.is_staged_for_removal(path) => return Ok(None),
            None => match head_tree.get(path) {
                Some(committed) => committed,
                None => return Ok(None),
            },
        };

        if !exists {
            Ok(Some(WorkspaceChangeType::Deleted))
        } else if self.is_content_changed(path, expected)? {
            Ok(Some(WorkspaceChangeType::Modified))
        } else {
            Ok(None)
        }
    }

    /// A present file that neither the index nor the head tree will carry
    pub fn is_untracked(&self, path: &str, head_tree: &Tree) -> bool {
        let index = self.repository.index();

        index.staged_addition(path).is_none()
            && (!head_tree.contains(path) || index.is_staged_for_removal(path))
    }
}
