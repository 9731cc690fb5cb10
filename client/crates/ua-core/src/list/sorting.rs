use crate::{SortDirection, User};

use std::cmp::Ordering;

/// Compare two users by creation time. Unparseable timestamps order before
/// every parseable one.
pub fn compare_created_at(a: &User, b: &User, direction: SortDirection) -> Ordering {
    let ordering = a.created_at_millis().cmp(&b.created_at_millis());
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort by creation time.
pub fn sort_users(users: &mut [User], direction: SortDirection) {
    users.sort_by(|a, b| compare_created_at(a, b, direction));
}
