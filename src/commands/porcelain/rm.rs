use crate::areas::repository::Repository;
use crate::errors::TwigError;

impl Repository {
    /// Unstage a file, and stop tracking it when HEAD tracks it
    pub fn rm(&mut self, file_path: &str) -> anyhow::Result<()> {
        let path = self.relative_path(file_path)?;
        let committed = self.head_commit()?.tree().get(&path).cloned();

        match committed {
            Some(oid) => {
                self.index_mut().stage_removal(&path, oid);
                self.workspace().remove_file(&path)?;
            }
            None => {
                if self.index_mut().unstage_add(&path).is_none() {
                    anyhow::bail!(TwigError::NothingToRemove);
                }
            }
        }

        Ok(())
    }
}
