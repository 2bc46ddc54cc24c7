//! Schedule template domain models.
//!
//! A template is one persisted timetable row per (user, course-section) slot:
//! either a weekly recurrence (`Regular`, one weekday inside a validity
//! range) or a single dated exam (`Exam`). Templates are read-only inputs to
//! resolution; display fields come pre-joined from the course section, the
//! way the persistence collaborator hands rows over.

use crate::ids::{CourseSectionId, TemplateId, UserId};
use crate::value_types::LessonRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use weekboard_core::week::{WeekWindow, weekday_number};

/// Whether a template recurs weekly or marks a single exam date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "template_kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateKind {
    /// Weekly recurrence on `day_of_week` across the validity range.
    Regular,
    /// A single session on `exam_date`.
    Exam,
}

/// Completion state recorded on the template itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "completion_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionStatus {
    Scheduled,
    Completed,
}

/// One timetable row, pre-joined with its course-section display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleTemplate {
    /// Unique identifier for the template row
    pub id: TemplateId,
    /// User (student or lecturer) this row belongs to
    pub user_id: UserId,
    /// Course section the row was derived from
    pub course_section_id: CourseSectionId,
    /// Recurrence kind of the row
    pub kind: TemplateKind,
    /// ISO weekday (1=Mon..7=Sun); present only for `Regular` rows
    pub day_of_week: Option<i16>,
    /// Exam date; present only for `Exam` rows
    pub exam_date: Option<NaiveDate>,
    /// First date (inclusive) on which the recurrence applies
    pub valid_from: NaiveDate,
    /// Last date (inclusive) on which the recurrence applies
    pub valid_to: NaiveDate,
    /// Room the session is normally held in
    pub room: String,
    /// Lesson slots the session occupies
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub lessons: LessonRange,
    /// Completion state of the row
    pub completion_status: CompletionStatus,
    /// Subject display name (from the course section)
    pub subject_name: String,
    /// Class display name (from the course section)
    pub class_name: String,
    /// Lecturer display name (from the course section)
    pub lecturer_name: String,
}

impl ScheduleTemplate {
    /// Whether this template's recurrence produces a session on `date`.
    ///
    /// For `Regular` rows the date must both match `day_of_week` and fall
    /// inside `valid_from..=valid_to`; the validity check is against the
    /// specific candidate date, since a recurrence may start or end mid-week.
    pub fn produces(&self, date: NaiveDate) -> bool {
        match self.kind {
            TemplateKind::Regular => {
                self.day_of_week == Some(weekday_number(date))
                    && self.valid_from <= date
                    && date <= self.valid_to
            }
            TemplateKind::Exam => self.exam_date == Some(date),
        }
    }

    /// The single date in `window` this template produces, if any.
    ///
    /// A weekday value matches at most one of the window's seven dates, so a
    /// `Regular` row never yields more than one baseline occurrence per week.
    pub fn baseline_date(&self, window: &WeekWindow) -> Option<NaiveDate> {
        window.days().find(|&date| self.produces(date))
    }
}
