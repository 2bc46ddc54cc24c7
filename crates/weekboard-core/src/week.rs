//! The Monday–Sunday week window and its navigation anchors.
//!
//! Schedule resolution always operates on one calendar week. Given an anchor
//! date (any day of the target week), [`WeekWindow::containing`] computes the
//! Monday-aligned window, and [`WeekWindow::previous_anchor`] /
//! [`WeekWindow::next_anchor`] provide the anchors for week-by-week
//! navigation, the schedule equivalent of prev/next page links.
//!
//! # Date convention
//!
//! Anchors travel as `dd-mm-yyyy` text, matching the date convention used by
//! the rest of the system. [`parse_anchor`] and [`format_anchor`] are the only
//! places that convention is interpreted.
//!
//! # Example
//!
//! ```ignore
//! use weekboard_core::week::{WeekWindow, parse_anchor};
//!
//! // 18-09-2025 is a Thursday; the window is 15-09-2025..21-09-2025.
//! let window = WeekWindow::containing(parse_anchor("18-09-2025")?);
//! assert_eq!(window.start.to_string(), "2025-09-15");
//! assert_eq!(window.end.to_string(), "2025-09-21");
//! ```

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ScheduleError;

/// The textual anchor date format used across the system (`dd-mm-yyyy`).
pub const ANCHOR_FORMAT: &str = "%d-%m-%Y";

/// Parse an anchor date in the `dd-mm-yyyy` convention.
///
/// A malformed anchor is a fatal input error; there is no silent default.
pub fn parse_anchor(input: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(input, ANCHOR_FORMAT)
        .map_err(|_| ScheduleError::InvalidDateFormat(input.to_string()))
}

/// Render a date in the `dd-mm-yyyy` convention.
pub fn format_anchor(date: NaiveDate) -> String {
    date.format(ANCHOR_FORMAT).to_string()
}

/// ISO weekday number of a date: 1 = Monday .. 7 = Sunday.
pub fn weekday_number(date: NaiveDate) -> i16 {
    date.weekday().number_from_monday() as i16
}

/// One Monday–Sunday calendar week, with the anchor date that selected it.
///
/// `start` is always a Monday and `end` the following Sunday; both bounds are
/// inclusive, and `start <= anchor <= end` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekWindow {
    /// The date originally requested (any day of the week).
    pub anchor: NaiveDate,
    /// Monday of the week.
    pub start: NaiveDate,
    /// Sunday of the week.
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Compute the Monday–Sunday window containing `anchor`.
    pub fn containing(anchor: NaiveDate) -> Self {
        // Monday is 1, Sunday is 7, so the offset back to Monday is 1 - weekday
        // (Sunday lands 6 days after its Monday, never in the following week).
        let weekday = i64::from(weekday_number(anchor));
        let start = anchor + chrono::Duration::days(1 - weekday);
        let end = start + chrono::Duration::days(6);
        Self { anchor, start, end }
    }

    /// Whether `date` falls inside the window (both bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The seven dates of the window, Monday first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(7)
    }

    /// Window start as a timestamp (Monday 00:00:00), for timestamp-keyed stores.
    pub fn start_at(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Window end as a timestamp (Sunday 23:59:59.999…), for timestamp-keyed stores.
    pub fn end_at(&self) -> NaiveDateTime {
        self.end
            .and_time(NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).expect("valid time"))
    }

    /// Anchor for the previous week (anchor - 7 days).
    pub fn previous_anchor(&self) -> NaiveDate {
        self.anchor - Days::new(7)
    }

    /// Anchor for the next week (anchor + 7 days).
    pub fn next_anchor(&self) -> NaiveDate {
        self.anchor + Days::new(7)
    }
}
