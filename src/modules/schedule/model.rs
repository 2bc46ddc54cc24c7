//! Schedule module DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use weekboard_models::Occurrence;

/// Query parameters for selecting the week to resolve.
///
/// The anchor may be any day of the target week, in the system-wide
/// `dd-mm-yyyy` convention. Callers that omit it typically default to today.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct WeekQuery {
    /// Anchor date (`dd-mm-yyyy`); any day of the requested week
    pub anchor: Option<String>,
}

impl WeekQuery {
    /// The anchor to resolve, falling back to `default` when absent.
    pub fn anchor_or(&self, default: NaiveDate) -> String {
        self.anchor
            .clone()
            .unwrap_or_else(|| weekboard_core::week::format_anchor(default))
    }
}

/// One user's fully resolved week.
///
/// The occurrence list is sorted by `(day_of_week, start_lesson)`; an empty
/// list is a valid "no classes this week" response. The navigation anchors
/// are pre-formatted in the `dd-mm-yyyy` convention so callers can build
/// previous/next week links without re-deriving dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedWeek {
    /// Ordered class/exam occurrences inside the window
    pub occurrences: Vec<Occurrence>,
    /// Monday of the resolved week
    #[serde(with = "weekboard_core::serde::day_month_year")]
    #[schema(value_type = String, example = "15-09-2025")]
    pub window_start: NaiveDate,
    /// Sunday of the resolved week
    #[serde(with = "weekboard_core::serde::day_month_year")]
    #[schema(value_type = String, example = "21-09-2025")]
    pub window_end: NaiveDate,
    /// The anchor date the week was selected by
    #[serde(with = "weekboard_core::serde::day_month_year")]
    #[schema(value_type = String, example = "18-09-2025")]
    pub anchor: NaiveDate,
    /// Pre-formatted anchor for the previous week (anchor - 7 days)
    pub previous_week_anchor: String,
    /// Pre-formatted anchor for the next week (anchor + 7 days)
    pub next_week_anchor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_query_prefers_explicit_anchor() {
        let query = WeekQuery {
            anchor: Some("18-09-2025".to_string()),
        };
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(query.anchor_or(today), "18-09-2025");
    }

    #[test]
    fn test_week_query_falls_back_to_default() {
        let query = WeekQuery { anchor: None };
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(query.anchor_or(today), "01-10-2025");
    }
}
