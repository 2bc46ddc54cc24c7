//! Schedule exception domain models.
//!
//! An exception is a point-in-time deviation tied to exactly one template:
//! a cancellation, a make-up relocation, or a room/lecturer reassignment for
//! one specific `original_date` the template's recurrence would otherwise
//! produce.
//!
//! The persistence collaborator stores exceptions as one flat record with
//! many optional override columns ([`ExceptionRow`]). Resolution works on the
//! validated tagged form ([`ScheduleChange`]) instead, so per-variant
//! requirements (a make-up must carry its new date) are checked once at
//! construction rather than re-checked at every use site.

use crate::ids::{ExceptionId, TemplateId};
use crate::value_types::{LessonRange, ModelError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Discriminant column of an exception row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "exception_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExceptionType {
    Canceled,
    Makeup,
    RoomChanged,
    LecturerChanged,
}

/// An exception as persisted: one record, all override columns optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExceptionRow {
    /// Unique identifier for the exception
    pub id: ExceptionId,
    /// Template whose occurrence is overridden
    pub template_id: TemplateId,
    /// Kind of deviation
    pub exception_type: ExceptionType,
    /// The template occurrence date being overridden
    pub original_date: NaiveDate,
    /// Relocated date (make-ups only)
    pub new_date: Option<NaiveDate>,
    /// Replacement room, where relevant
    pub new_room: Option<String>,
    /// Replacement first lesson slot, where relevant
    pub new_start_lesson: Option<i16>,
    /// Replacement last lesson slot, where relevant
    pub new_end_lesson: Option<i16>,
    /// Replacement lecturer display name, where relevant
    pub new_lecturer_name: Option<String>,
}

/// The validated, closed set of deviations an exception can describe.
///
/// Optional fields fall back to the template's own values at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleChange {
    /// The session on `original_date` does not take place.
    Canceled,
    /// The session is canceled and re-held on `new_date`.
    Makeup {
        new_date: NaiveDate,
        new_room: Option<String>,
        new_lessons: Option<LessonRange>,
        new_lecturer: Option<String>,
    },
    /// The session takes place in a different room.
    RoomChanged { new_room: Option<String> },
    /// The session is taught by a different lecturer.
    LecturerChanged { new_lecturer: Option<String> },
}

/// A validated exception, ready for overlay resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleException {
    /// Unique identifier for the exception
    pub id: ExceptionId,
    /// Template whose occurrence is overridden
    pub template_id: TemplateId,
    /// The template occurrence date being overridden
    pub original_date: NaiveDate,
    /// The deviation applied to that date
    pub change: ScheduleChange,
}

impl TryFrom<ExceptionRow> for ScheduleException {
    type Error = ModelError;

    fn try_from(row: ExceptionRow) -> Result<Self, Self::Error> {
        let new_lessons = match (row.new_start_lesson, row.new_end_lesson) {
            (Some(start), Some(end)) => Some(LessonRange::new(start, end)?),
            (None, None) => None,
            _ => return Err(ModelError::PartialLessonOverride(row.id)),
        };

        let change = match row.exception_type {
            ExceptionType::Canceled => ScheduleChange::Canceled,
            ExceptionType::Makeup => ScheduleChange::Makeup {
                new_date: row.new_date.ok_or(ModelError::MissingNewDate(row.id))?,
                new_room: row.new_room,
                new_lessons,
                new_lecturer: row.new_lecturer_name,
            },
            ExceptionType::RoomChanged => ScheduleChange::RoomChanged {
                new_room: row.new_room,
            },
            ExceptionType::LecturerChanged => ScheduleChange::LecturerChanged {
                new_lecturer: row.new_lecturer_name,
            },
        };

        Ok(Self {
            id: row.id,
            template_id: row.template_id,
            original_date: row.original_date,
            change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(exception_type: ExceptionType) -> ExceptionRow {
        ExceptionRow {
            id: ExceptionId::from_u128(9),
            template_id: TemplateId::from_u128(1),
            exception_type,
            original_date: date(2025, 9, 16),
            new_date: None,
            new_room: None,
            new_start_lesson: None,
            new_end_lesson: None,
            new_lecturer_name: None,
        }
    }

    #[test]
    fn test_canceled_row_converts() {
        let exception = ScheduleException::try_from(row(ExceptionType::Canceled)).unwrap();
        assert_eq!(exception.change, ScheduleChange::Canceled);
        assert_eq!(exception.original_date, date(2025, 9, 16));
    }

    #[test]
    fn test_makeup_row_requires_new_date() {
        let result = ScheduleException::try_from(row(ExceptionType::Makeup));
        assert_eq!(
            result,
            Err(ModelError::MissingNewDate(ExceptionId::from_u128(9)))
        );
    }

    #[test]
    fn test_makeup_row_with_overrides_converts() {
        let mut makeup = row(ExceptionType::Makeup);
        makeup.new_date = Some(date(2025, 9, 18));
        makeup.new_room = Some("B2.05".to_string());
        makeup.new_start_lesson = Some(4);
        makeup.new_end_lesson = Some(6);

        let exception = ScheduleException::try_from(makeup).unwrap();
        assert_eq!(
            exception.change,
            ScheduleChange::Makeup {
                new_date: date(2025, 9, 18),
                new_room: Some("B2.05".to_string()),
                new_lessons: Some(LessonRange::new(4, 6).unwrap()),
                new_lecturer: None,
            }
        );
    }

    #[test]
    fn test_half_overridden_lesson_range_rejected() {
        let mut makeup = row(ExceptionType::Makeup);
        makeup.new_date = Some(date(2025, 9, 18));
        makeup.new_start_lesson = Some(4);

        let result = ScheduleException::try_from(makeup);
        assert_eq!(
            result,
            Err(ModelError::PartialLessonOverride(ExceptionId::from_u128(9)))
        );
    }

    #[test]
    fn test_room_change_without_room_still_converts() {
        // Tolerated at read time; resolution falls back to the template room.
        let exception = ScheduleException::try_from(row(ExceptionType::RoomChanged)).unwrap();
        assert_eq!(
            exception.change,
            ScheduleChange::RoomChanged { new_room: None }
        );
    }
}
