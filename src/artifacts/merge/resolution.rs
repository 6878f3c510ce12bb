//! Three-way classification
//!
//! Every path of the split point, current and target trees is classified on
//! its own. A side "modified" a path when the split point tree is empty, or
//! when both the split point and that side hold the path with different
//! digests.
//!
//! | current | target | split point | outcome |
//! |---|---|---|---|
//! | absent | present | absent | take target |
//! | absent | present | present, target unmodified | stays deleted |
//! | absent | present | present, target modified | conflict |
//! | present | absent | present, current unmodified | remove |
//! | present | absent | present, current modified | conflict |
//! | present | absent | absent | keep |
//! | present | present | any | conflict when both modified it differently, or the split point lacks it and they differ; take target when only target modified it; keep otherwise |

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Check out the target's blob and stage it
    Take(ObjectId),
    /// Delete the path and stage its removal
    Remove,
    /// Write conflict markers around both sides and stage the result
    Conflict {
        current: Option<ObjectId>,
        target: Option<ObjectId>,
    },
    /// Leave the path as the current commit has it
    Keep,
}

/// Classify one path
///
/// `split_is_empty` is set when the split point tree tracks nothing, in which
/// case both sides count as having modified every path.
pub fn classify(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    target: Option<&ObjectId>,
    split_is_empty: bool,
) -> MergeAction {
    let modified = |side: Option<&ObjectId>| {
        split_is_empty || matches!((split, side), (Some(split), Some(side)) if split != side)
    };

    match (current, target) {
        (None, Some(target)) => match split {
            None => MergeAction::Take(target.clone()),
            Some(split) if split == target => MergeAction::Keep,
            Some(_) => MergeAction::Conflict {
                current: None,
                target: Some(target.clone()),
            },
        },
        (Some(current), None) => match split {
            None => MergeAction::Keep,
            Some(split) if split == current => MergeAction::Remove,
            Some(_) => MergeAction::Conflict {
                current: Some(current.clone()),
                target: None,
            },
        },
        (Some(current), Some(target)) => {
            let current_modified = modified(Some(current));
            let target_modified = modified(Some(target));
            let differ = current != target;

            if (current_modified && target_modified && differ) || (split.is_none() && differ) {
                MergeAction::Conflict {
                    current: Some(current.clone()),
                    target: Some(target.clone()),
                }
            } else if target_modified && !current_modified {
                MergeAction::Take(target.clone())
            } else {
                MergeAction::Keep
            }
        }
        (None, None) => MergeAction::Keep,
    }
}

/// Classify every path of the three trees, dropping paths left as they are
pub fn resolve(split: &Tree, current: &Tree, target: &Tree) -> BTreeMap<String, MergeAction> {
    let paths = split
        .paths()
        .chain(current.paths())
        .chain(target.paths())
        .collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .filter_map(|path| {
            let action = classify(
                split.get(path),
                current.get(path),
                target.get(path),
                split.is_empty(),
            );
            log::debug!("merge classifies {path} as {action:?}");

            (action != MergeAction::Keep).then(|| (path.clone(), action))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn oid(seed: char) -> ObjectId {
        ObjectId::try_parse(seed.to_string().repeat(40)).unwrap()
    }

    #[test]
    fn file_added_only_by_target_is_taken() {
        assert_eq!(
            classify(None, None, Some(&oid('b')), false),
            MergeAction::Take(oid('b'))
        );
    }

    #[test]
    fn file_deleted_by_current_and_untouched_by_target_stays_deleted() {
        assert_eq!(
            classify(Some(&oid('a')), None, Some(&oid('a')), false),
            MergeAction::Keep
        );
    }

    #[test]
    fn file_deleted_by_current_and_modified_by_target_conflicts() {
        assert_eq!(
            classify(Some(&oid('a')), None, Some(&oid('b')), false),
            MergeAction::Conflict {
                current: None,
                target: Some(oid('b')),
            }
        );
    }

    #[test]
    fn file_deleted_by_target_and_untouched_by_current_is_removed() {
        assert_eq!(
            classify(Some(&oid('a')), Some(&oid('a')), None, false),
            MergeAction::Remove
        );
    }

    #[test]
    fn file_deleted_by_target_and_modified_by_current_conflicts() {
        assert_eq!(
            classify(Some(&oid('a')), Some(&oid('c')), None, false),
            MergeAction::Conflict {
                current: Some(oid('c')),
                target: None,
            }
        );
    }

    #[test]
    fn file_added_only_by_current_is_kept() {
        assert_eq!(
            classify(None, Some(&oid('c')), None, false),
            MergeAction::Keep
        );
    }

    #[test]
    fn file_modified_only_by_target_is_taken() {
        assert_eq!(
            classify(Some(&oid('a')), Some(&oid('a')), Some(&oid('b')), false),
            MergeAction::Take(oid('b'))
        );
    }

    #[test]
    fn file_modified_only_by_current_is_kept() {
        assert_eq!(
            classify(Some(&oid('a')), Some(&oid('c')), Some(&oid('a')), false),
            MergeAction::Keep
        );
    }

    #[test]
    fn file_modified_the_same_way_is_kept() {
        assert_eq!(
            classify(Some(&oid('a')), Some(&oid('b')), Some(&oid('b')), false),
            MergeAction::Keep
        );
    }

    #[test]
    fn file_modified_differently_conflicts() {
        assert_eq!(
            classify(Some(&oid('a')), Some(&oid('b')), Some(&oid('c')), false),
            MergeAction::Conflict {
                current: Some(oid('b')),
                target: Some(oid('c')),
            }
        );
    }

    #[test]
    fn file_added_differently_on_both_sides_conflicts() {
        assert_eq!(
            classify(None, Some(&oid('b')), Some(&oid('c')), false),
            MergeAction::Conflict {
                current: Some(oid('b')),
                target: Some(oid('c')),
            }
        );
        assert_eq!(
            classify(None, Some(&oid('b')), Some(&oid('b')), true),
            MergeAction::Keep
        );
    }

    #[test]
    fn resolve_reports_only_paths_that_change() {
        let split = Tree::new(BTreeMap::from([
            ("kept.txt".to_string(), oid('a')),
            ("gone.txt".to_string(), oid('b')),
        ]));
        let current = split.clone();
        let target = Tree::new(BTreeMap::from([
            ("kept.txt".to_string(), oid('a')),
            ("new.txt".to_string(), oid('c')),
        ]));

        assert_eq!(
            resolve(&split, &current, &target),
            BTreeMap::from([
                ("gone.txt".to_string(), MergeAction::Remove),
                ("new.txt".to_string(), MergeAction::Take(oid('c'))),
            ])
        );
    }
}
