use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::remote::transfer::HistoryTransfer;
use crate::errors::TwigError;

impl Repository {
    /// Copy a remote branch into `<branch>@<remote>`
    ///
    /// Commits the local database lacks are spliced after the active branch
    /// head. When `<branch>@<remote>` is checked out, the working tree follows
    /// it as with `reset`. Returns the name of the local branch that was
    /// created or advanced.
    pub fn fetch(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<BranchName> {
        let remote = self.open_named_remote(remote_name)?;

        let (remote_branch, remote_head) = remote
            .refs()
            .get(branch)
            .map(|(name, head)| (name.clone(), head.clone()))
            .ok_or(TwigError::UnknownRemoteBranch)?;

        let transfer = HistoryTransfer::new(remote.database());
        let missing = transfer.missing_commits(&remote_head, |oid| {
            self.database().has_commit(oid)
        })?;
        let local_head = self.head_oid()?;
        transfer.copy_into(self.database_mut(), &missing, Some(local_head))?;

        let tracking_branch = BranchName::for_remote(&remote_branch, remote_name)?;
        log::info!(
            "fetched {} into {tracking_branch}",
            remote_head.to_short_oid()
        );
        if self.refs().is_current_branch(tracking_branch.as_ref()) {
            self.move_active_head(remote_head)?;
        } else {
            self.refs_mut().set_head(&tracking_branch, remote_head);
        }

        Ok(tracking_branch)
    }
}
