use crate::{ApiFailure, DateRange, ListQuery, SortDirection, User, sort_users};

/// A list fetch the controller should perform, tagged with its sequence id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: ListQuery,
}

pub type FetchOutcome = Result<Vec<User>, ApiFailure>;

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Newer request already issued; the result was dropped.
    Stale,
    /// List replaced with this many users.
    Applied(usize),
    /// Fetch failed; list cleared.
    Cleared,
}

/// The user list plus the filters that produced it.
///
/// Every query change issues a new [`FetchRequest`] with a higher sequence
/// id. Only the response to the latest id is applied, so a slow response to
/// an older query can never overwrite a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    users: Vec<User>,
    search: String,
    range: Option<DateRange>,
    sort: SortDirection,
    latest_seq: u64,
}

impl ListState {
    pub fn new(sort: SortDirection) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn range(&self) -> Option<&DateRange> {
        self.range.as_ref()
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.search.clone(), self.range)
    }

    /// New search text; keeps whatever date range is active.
    pub fn set_search(&mut self, search: impl Into<String>) -> FetchRequest {
        self.search = search.into();
        self.issue()
    }

    /// New date range (`None` clears the filter); keeps the search text.
    pub fn set_range(&mut self, range: Option<DateRange>) -> FetchRequest {
        self.range = range;
        self.issue()
    }

    /// Search text and range changed together.
    pub fn set_query(&mut self, query: ListQuery) -> FetchRequest {
        self.search = query.search;
        self.range = query.range;
        self.issue()
    }

    /// Refetch with the current query.
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue()
    }

    /// Flip the direction and re-sort what is loaded. No fetch.
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
        sort_users(&mut self.users, self.sort);
    }

    pub fn resolve(&mut self, seq: u64, outcome: FetchOutcome) -> Resolution {
        if !self.is_current(seq) {
            return Resolution::Stale;
        }

        match outcome {
            Ok(mut users) => {
                sort_users(&mut users, self.sort);
                let count = users.len();
                self.users = users;
                Resolution::Applied(count)
            }
            Err(_) => {
                self.users.clear();
                Resolution::Cleared
            }
        }
    }

    fn issue(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        FetchRequest {
            seq: self.latest_seq,
            query: self.query(),
        }
    }
}
