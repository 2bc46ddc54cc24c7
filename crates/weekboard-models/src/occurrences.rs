//! Computed occurrence models.
//!
//! An occurrence is one concrete class or exam session on one date, as seen
//! in a resolved week. Occurrences are created fresh on every resolution call
//! and discarded with the response; they hold no identity and are never
//! persisted.

use crate::value_types::LessonRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::templates::CompletionStatus;

/// What kind of session an occurrence represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccurrenceKind {
    Regular,
    Exam,
    Makeup,
}

/// The state an occurrence is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccurrenceStatus {
    Scheduled,
    Completed,
    Canceled,
    RoomChanged,
    LecturerChanged,
}

impl From<CompletionStatus> for OccurrenceStatus {
    fn from(status: CompletionStatus) -> Self {
        match status {
            CompletionStatus::Scheduled => Self::Scheduled,
            CompletionStatus::Completed => Self::Completed,
        }
    }
}

/// One concrete class/exam session visible in a resolved week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Occurrence {
    /// Subject display name
    pub subject_name: String,
    /// Class display name
    pub class_name: String,
    /// Lecturer display name (already reflecting any lecturer override)
    pub lecturer_name: String,
    /// Kind of session
    pub kind: OccurrenceKind,
    /// Display state
    pub status: OccurrenceStatus,
    /// Concrete calendar date of the session
    #[serde(with = "weekboard_core::serde::day_month_year")]
    #[schema(value_type = String, example = "16-09-2025")]
    pub date: NaiveDate,
    /// ISO weekday (1=Mon..7=Sun), derived from `date`
    pub day_of_week: i16,
    /// Room the session takes place in (already reflecting any room override)
    pub room: String,
    /// Lesson slots the session occupies
    #[serde(flatten)]
    pub lessons: LessonRange,
}
