use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

impl Repository {
    /// Create a branch at the head of the active branch, without switching
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let head = self.head_oid()?;

        self.refs_mut().create(branch_name, head)?;

        Ok(())
    }

    /// Delete a branch pointer; its commits stay
    pub fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        self.refs_mut().remove(branch_name)
    }
}
