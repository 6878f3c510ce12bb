use colored::Colorize;

/// Change of a working file that is not staged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
}

impl From<&WorkspaceChangeType> for &str {
    fn from(change: &WorkspaceChangeType) -> Self {
        match change {
            WorkspaceChangeType::Modified => "modified",
            WorkspaceChangeType::Deleted => "deleted",
        }
    }
}

/// A path with its unstaged change, rendered as `<path> (<change>)`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileChange {
    pub(crate) path: String,
    pub(crate) change: WorkspaceChangeType,
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = (&self.change).into();
        write!(f, "{}", format!("{} ({})", self.path, label).red())
    }
}
