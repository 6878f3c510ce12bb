use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Copies commits out of a source database
#[derive(new)]
pub struct HistoryTransfer<'s> {
    source: &'s Database,
}

impl<'s> HistoryTransfer<'s> {
    /// Commits of `head`'s chain the destination does not know yet
    ///
    /// The walk stops at the first commit `is_known` accepts. The result is
    /// ordered oldest first, ready to be copied.
    pub fn missing_commits(
        &self,
        head: &ObjectId,
        is_known: impl Fn(&ObjectId) -> bool,
    ) -> anyhow::Result<Vec<ObjectId>> {
        let mut missing = Vec::new();

        for entry in self.source.history(head) {
            let (oid, _) = entry?;
            if is_known(&oid) {
                break;
            }
            missing.push(oid);
        }
        missing.reverse();

        log::debug!(
            "{} commit(s) of {} are missing",
            missing.len(),
            head.to_short_oid()
        );

        Ok(missing)
    }

    /// Copy `commits` (oldest first) with the blobs they reference
    ///
    /// When `root_parent` is given, the oldest copied commit is attached to it
    /// instead of its original parent.
    pub fn copy_into(
        &self,
        destination: &mut Database,
        commits: &[ObjectId],
        root_parent: Option<ObjectId>,
    ) -> anyhow::Result<()> {
        for (position, oid) in commits.iter().enumerate() {
            let commit = self.source.load_commit(oid)?;

            for (_, blob_oid) in commit.tree().entries() {
                if !destination.has_blob(blob_oid) {
                    destination.put_blob(self.source.load_blob(blob_oid)?.clone());
                }
            }

            let commit = match (&root_parent, position) {
                (Some(parent), 0) => commit.reparented(Some(parent.clone())),
                _ => commit.clone(),
            };
            let stored = destination.store_commit(commit);

            log::debug!("copied commit {}", stored.to_short_oid());
        }

        Ok(())
    }
}
