use crate::areas::repository::Repository;

impl Repository {
    pub fn add_remote(&mut self, name: &str, path: &str) -> anyhow::Result<()> {
        // separators are normalized so a recorded path stays portable
        let path = path.replace(['/', '\\'], std::path::MAIN_SEPARATOR_STR);

        self.remotes_mut().add(name, &path)
    }

    pub fn rm_remote(&mut self, name: &str) -> anyhow::Result<()> {
        self.remotes_mut().remove(name)
    }
}
