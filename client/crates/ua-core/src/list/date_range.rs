use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

/// Date format used in range path segments (`dd-MM-yyyy`).
pub const PATH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Formats accepted from user input, tried in order.
const INPUT_DATE_FORMATS: [&str; 2] = [PATH_DATE_FORMAT, "%Y-%m-%d"];

/// Separator between start and end in a range segment.
pub const RANGE_SEPARATOR: char = '+';

/// A creation-date filter: a single day, or a start and end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn single(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// `dd-MM-yyyy` or `dd-MM-yyyy+dd-MM-yyyy`.
    pub fn path_segment(&self) -> String {
        match self.end {
            Some(end) => format!(
                "{}{RANGE_SEPARATOR}{}",
                format_path_date(self.start),
                format_path_date(end)
            ),
            None => format_path_date(self.start),
        }
    }
}

pub fn format_path_date(date: NaiveDate) -> String {
    date.format(PATH_DATE_FORMAT).to_string()
}

/// Parse a date typed by the user, as `dd-MM-yyyy` or `yyyy-MM-dd`.
#[track_caller]
pub fn parse_input_date(value: &str) -> CoreResult<NaiveDate> {
    let trimmed = value.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CoreError::InvalidDate {
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
