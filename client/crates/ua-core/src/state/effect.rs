use crate::{FetchRequest, NewUser, UserDraft};

/// An API call requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchRequest),
    Create(NewUser),
    Update { id: i64, draft: UserDraft },
    Delete { id: i64 },
}
