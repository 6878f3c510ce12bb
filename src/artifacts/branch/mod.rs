pub mod branch_name;

/// Names rejected by git's ref-name rules
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Separator between a branch and a remote in fetched branch names
pub const REMOTE_BRANCH_SEPARATOR: char = '@';
