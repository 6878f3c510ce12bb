use crate::areas::repository::Repository;
use crate::commands::porcelain::merge::{MergeOptions, MergeOutcome};

impl Repository {
    /// Fetch a remote branch and merge it into the active branch
    pub fn pull(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<MergeOutcome> {
        let tracking_branch = self.fetch(remote_name, branch)?;

        self.merge(tracking_branch.as_ref(), &MergeOptions::default())
    }
}
