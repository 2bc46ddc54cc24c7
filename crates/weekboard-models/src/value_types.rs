//! Strongly-typed value types with validation for domain primitives.
//!
//! # Example
//!
//! ```ignore
//! use weekboard_models::value_types::LessonRange;
//!
//! let lessons = LessonRange::new(1, 3).unwrap();
//! assert_eq!(lessons.start(), 1);
//! assert_eq!(lessons.end(), 3);
//!
//! // Inverted ranges fail to construct
//! assert!(LessonRange::new(4, 2).is_err());
//! ```

use crate::ids::ExceptionId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Error type for model construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A lesson range whose start lies after its end.
    InvalidLessonRange(i16, i16),
    /// A make-up exception row without the required `new_date`.
    MissingNewDate(ExceptionId),
    /// An exception row overriding only one bound of the lesson range.
    PartialLessonOverride(ExceptionId),
}

impl std::error::Error for ModelError {}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLessonRange(start, end) => {
                write!(f, "Invalid lesson range: {} > {}", start, end)
            }
            Self::MissingNewDate(id) => {
                write!(f, "Make-up exception {} is missing its new date", id)
            }
            Self::PartialLessonOverride(id) => {
                write!(
                    f,
                    "Exception {} overrides only one bound of the lesson range",
                    id
                )
            }
        }
    }
}

/// A validated lesson-slot range within one day.
///
/// This type guarantees `start_lesson <= end_lesson`. Lessons are the
/// school's fixed daily slots (1st lesson, 2nd lesson, ...), so ordering
/// occurrences by `start()` inside a day matches the classroom timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, FromRow, ToSchema)]
pub struct LessonRange {
    start_lesson: i16,
    end_lesson: i16,
}

impl LessonRange {
    /// Create a new lesson range, validating that `start <= end`.
    pub fn new(start: i16, end: i16) -> Result<Self, ModelError> {
        if start > end {
            return Err(ModelError::InvalidLessonRange(start, end));
        }
        Ok(Self {
            start_lesson: start,
            end_lesson: end,
        })
    }

    /// First lesson slot of the range.
    #[inline]
    pub fn start(&self) -> i16 {
        self.start_lesson
    }

    /// Last lesson slot of the range (inclusive).
    #[inline]
    pub fn end(&self) -> i16 {
        self.end_lesson
    }
}

impl fmt::Display for LessonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_lesson, self.end_lesson)
    }
}

// Manual Deserialize so deserialized ranges go through validation.
impl<'de> Deserialize<'de> for LessonRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start_lesson: i16,
            end_lesson: i16,
        }

        let raw = Raw::deserialize(deserializer)?;
        LessonRange::new(raw.start_lesson, raw.end_lesson).map_err(serde::de::Error::custom)
    }
}
