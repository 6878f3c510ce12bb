use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::remote::transfer::HistoryTransfer;
use crate::errors::TwigError;

impl Repository {
    /// Append the active branch's history to `branch` of a remote
    ///
    /// The remote branch must be an ancestor of the local head; it is created
    /// when missing. The remote state is only written on success.
    pub fn push(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(branch.to_string())?;
        let mut remote = self.open_named_remote(remote_name)?;

        let local_head = self.head_oid()?;
        if let Some((_, remote_head)) = remote.refs().get(branch.as_ref())
            && !self.database().is_ancestor(remote_head, &local_head)?
        {
            anyhow::bail!(TwigError::NonFastForward);
        }

        let transfer = HistoryTransfer::new(self.database());
        let missing = transfer.missing_commits(&local_head, |oid| {
            remote.database().has_commit(oid)
        })?;
        transfer.copy_into(remote.database_mut(), &missing, None)?;

        log::info!(
            "pushing {} to {branch} of {remote_name}",
            local_head.to_short_oid()
        );
        remote.refs_mut().set_head(&branch, local_head);
        remote.persist()
    }
}
