use crate::areas::repository::Repository;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "Initialized empty twig repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
