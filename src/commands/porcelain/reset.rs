use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Move the active branch to an arbitrary commit and check it out
    pub fn reset(&mut self, commit_prefix: &str) -> anyhow::Result<()> {
        let commit_oid = self.database().find_commit_by_prefix(commit_prefix)?;

        self.move_active_head(commit_oid)
    }

    /// Check out `commit_oid` over the working tree, then point the active
    /// branch at it and empty the index
    pub(crate) fn move_active_head(&mut self, commit_oid: ObjectId) -> anyhow::Result<()> {
        let head_tree = self.head_commit()?.tree();
        let target_tree = self.database().load_commit(&commit_oid)?.tree();
        let migration = Migration::between(head_tree, target_tree);

        migration.check_conflicts(self.workspace(), head_tree)?;
        self.workspace()
            .apply_migration(&migration, self.database())?;

        self.refs_mut().update_head(commit_oid);
        self.index_mut().clear();

        Ok(())
    }
}
