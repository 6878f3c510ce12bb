use crate::artifacts::objects::object_id::ObjectId;

/// Way an untracked working file blocks a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictType {
    /// The file would be replaced by different content
    UntrackedOverwritten,
    /// The file would be deleted
    UntrackedRemoved,
}

impl ConflictType {
    pub fn get_conflict_type(incoming: Option<&ObjectId>) -> ConflictType {
        match incoming {
            Some(_) => ConflictType::UntrackedOverwritten,
            None => ConflictType::UntrackedRemoved,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ConflictType::UntrackedOverwritten => "would be overwritten",
            ConflictType::UntrackedRemoved => "would be removed",
        }
    }
}
