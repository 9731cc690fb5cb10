use crate::{ApiFailure, DateRange, DraftField, FetchOutcome, ListQuery, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything that can happen to the application: user input and the
/// results of effects the controller ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SearchChanged(String),
    /// `None` clears the date filter.
    DateRangeChanged(Option<DateRange>),
    /// Search and range replaced in one step, issuing a single fetch.
    QueryChanged(ListQuery),
    SortToggled,
    Refresh,
    FetchCompleted { seq: u64, outcome: FetchOutcome },

    OpenCreate,
    OpenEdit(User),
    OpenRemove(User),
    FieldEdited { field: DraftField, value: String },
    Cancel,
    Submit,

    /// `user_id` is the created, updated or removed user.
    MutationSucceeded {
        kind: MutationKind,
        user_id: i64,
    },
    MutationFailed {
        kind: MutationKind,
        failure: ApiFailure,
    },
}
