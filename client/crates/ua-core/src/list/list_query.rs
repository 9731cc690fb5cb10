use crate::DateRange;

/// Path segment that selects the date-filtered listing.
pub const DATE_SEGMENT: &str = "date";

/// What the user list is currently filtered by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub range: Option<DateRange>,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, range: Option<DateRange>) -> Self {
        Self {
            search: search.into(),
            range,
        }
    }

    /// Raw path segments below the users resource. The search segment is
    /// always last and may be empty, which yields a trailing slash.
    pub fn path_segments(&self) -> Vec<String> {
        let mut segments = Vec::with_capacity(3);
        if let Some(range) = &self.range {
            segments.push(DATE_SEGMENT.to_string());
            segments.push(range.path_segment());
        }
        segments.push(self.search.clone());
        segments
    }

    pub fn is_date_filtered(&self) -> bool {
        self.range.is_some()
    }
}

impl std::fmt::Display for ListQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segments().join("/"))
    }
}
