use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A user record as returned by the users API.
///
/// Timestamps are kept as the server sent them; [`User::created_at_millis`]
/// parses on demand for sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Creation time as milliseconds since the epoch, if the timestamp parses.
    pub fn created_at_millis(&self) -> Option<i64> {
        parse_timestamp_millis(&self.created_at)
    }
}

/// Parse an API timestamp. Offset-less timestamps are read as UTC.
pub fn parse_timestamp_millis(value: &str) -> Option<i64> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.timestamp_millis());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
}
