use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::errors::TwigError;

impl Repository {
    /// Restore one file from HEAD, or from the commit `commit_prefix` designates
    ///
    /// The index is left untouched.
    pub fn checkout_file(
        &mut self,
        commit_prefix: Option<&str>,
        file_path: &str,
    ) -> anyhow::Result<()> {
        let path = self.relative_path(file_path)?;
        let commit_oid = match commit_prefix {
            Some(prefix) => self.database().find_commit_by_prefix(prefix)?,
            None => self.head_oid()?,
        };

        let commit = self.database().load_commit(&commit_oid)?;
        let blob_oid = commit
            .tree()
            .get(&path)
            .cloned()
            .ok_or(TwigError::FileNotInCommit)?;

        let head_tree = self.head_commit()?.tree();
        let mut migration = Migration::default();
        migration.write(&path, blob_oid, head_tree.contains(&path));

        migration.check_conflicts(self.workspace(), head_tree)?;
        self.workspace()
            .apply_migration(&migration, self.database())?;

        Ok(())
    }

    /// Switch to another branch
    ///
    /// Every file of the branch head is written, files only the current head
    /// tracks are deleted and the index is emptied.
    pub fn checkout_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let (_, target_oid) = self
            .refs()
            .get(branch_name)
            .ok_or(TwigError::NoSuchBranch)?;
        if self.refs().is_current_branch(branch_name) {
            anyhow::bail!(TwigError::AlreadyOnBranch);
        }

        let head_tree = self.head_commit()?.tree();
        let target_tree = self.database().load_commit(target_oid)?.tree();
        let migration = Migration::between(head_tree, target_tree);

        migration.check_conflicts(self.workspace(), head_tree)?;
        self.workspace()
            .apply_migration(&migration, self.database())?;

        self.refs_mut().switch_to(branch_name)?;
        self.index_mut().clear();

        log::info!("switched to branch {branch_name}");

        Ok(())
    }
}
