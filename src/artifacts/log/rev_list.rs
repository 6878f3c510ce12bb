use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Parent-chain walk starting at a head commit
///
/// Yields `(digest, commit)` pairs head first. A parent link pointing outside
/// the database ends the walk with an error.
#[derive(Clone, new)]
pub struct RevList<'d> {
    database: &'d Database,
    current_commit_oid: Option<ObjectId>,
}

impl<'d> Iterator for RevList<'d> {
    type Item = anyhow::Result<(ObjectId, &'d Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.load_commit(&commit_oid) {
            Ok(commit) => {
                // move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::object::Object;

    #[test]
    fn dangling_parent_ends_the_walk_with_an_error() {
        let mut database = Database::default();
        let orphan = Commit::initial().reparented(Some(
            ObjectId::try_parse("f".repeat(40)).unwrap(),
        ));
        let oid = database.store_commit(orphan);

        let mut walk = database.history(&oid);

        assert_eq!(walk.next().unwrap().unwrap().0, oid);
        assert!(walk.next().unwrap().is_err());
        assert!(walk.next().is_none());
    }

    #[test]
    fn initial_commit_has_a_single_entry_history() {
        let mut database = Database::default();
        let oid = database.store_commit(Commit::initial());

        assert_eq!(oid, Commit::initial().object_id());
        assert_eq!(database.history(&oid).count(), 1);
    }
}
