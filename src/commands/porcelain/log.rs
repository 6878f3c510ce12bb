use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;

impl Repository {
    /// History of the active branch, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        let head = self.head_oid()?;

        for entry in self.database().history(&head) {
            let (commit_oid, commit) = entry?;
            self.show_commit(&commit_oid, commit)?;
        }

        Ok(())
    }

    /// Every commit ever made, in creation order
    pub fn global_log(&self) -> anyhow::Result<()> {
        for (commit_oid, commit) in self.database().commits() {
            self.show_commit(commit_oid, commit)?;
        }

        Ok(())
    }

    /// Ids of the commits with exactly the given message
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        for commit_oid in self.database().find_by_message(message)? {
            writeln!(self.writer(), "{commit_oid}")?;
        }

        Ok(())
    }

    fn show_commit(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "{}", format!("commit {commit_oid}").yellow())?;
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
