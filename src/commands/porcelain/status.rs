use crate::areas::repository::Repository;
use colored::Colorize;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let status = self.status_info()?;
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        for (branch, active) in status.branches() {
            if *active {
                writeln!(writer, "{}", format!("*{branch}").green())?;
            } else {
                writeln!(writer, "{branch}")?;
            }
        }

        writeln!(writer, "\n=== Staged Files ===")?;
        for file in status.staged_files() {
            writeln!(writer, "{}", file.green())?;
        }

        writeln!(writer, "\n=== Removed Files ===")?;
        for file in status.removed_files() {
            writeln!(writer, "{}", file.red())?;
        }

        writeln!(writer, "\n=== Modifications Not Staged For Commit ===")?;
        for change in status.changed_files() {
            writeln!(writer, "{change}")?;
        }

        writeln!(writer, "\n=== Untracked Files ===")?;
        for file in status.untracked_files() {
            writeln!(writer, "{}", file.red())?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
