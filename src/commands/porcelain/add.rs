use crate::areas::repository::Repository;
use crate::errors::TwigError;

impl Repository {
    pub fn add(&mut self, file_path: &str) -> anyhow::Result<()> {
        let path = self.relative_path(file_path)?;

        if !self.workspace().is_file(&path) {
            anyhow::bail!(TwigError::FileNotFound);
        }

        let blob = self.workspace().parse_blob(&path)?;
        let matches_head = self
            .head_commit()?
            .tree()
            .get(&path)
            .and_then(|oid| self.database().blob(oid))
            .is_some_and(|committed| committed.same_as(&blob));

        if matches_head {
            // identical to HEAD: nothing to stage, and any pending removal is undone
            self.index_mut().unstage_add(&path);
            self.index_mut().unstage_removal(&path);
            log::debug!("{path} matches HEAD, not staged");
        } else {
            let blob_id = self.database_mut().put_blob(blob);
            self.index_mut().stage_add(&path, blob_id);
            log::debug!("staged {path}");
        }

        Ok(())
    }
}
