use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range, as selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the endpoints if they arrive reversed.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if to < from {
            Self { from: to, to: from }
        } else {
            Self { from, to }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Number of days covered, endpoints inclusive.
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

/// Parse a "YYYY-MM-DD" date. Returns None for anything else.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
