//! # Weekboard Models
//!
//! Domain models and data contracts for the Weekboard schedule engine.
//!
//! This crate provides the data structures exchanged with the persistence
//! collaborator and produced by resolution:
//!
//! - [`ids`]: Strongly-typed ID newtypes over `Uuid`
//! - [`templates`]: Recurring/exam timetable rows
//! - [`exceptions`]: Point-in-time deviations, flat rows and validated variants
//! - [`occurrences`]: Computed, non-persisted session instances
//! - [`value_types`]: Validated domain primitives
//!
//! # Example
//!
//! ```ignore
//! use weekboard_models::{ExceptionRow, ScheduleException};
//!
//! // Rows come in flat from the store; resolution uses the validated form.
//! let exception = ScheduleException::try_from(row)?;
//! ```

pub mod exceptions;
pub mod ids;
pub mod occurrences;
pub mod templates;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use exceptions::{ExceptionRow, ExceptionType, ScheduleChange, ScheduleException};
pub use ids::{CourseSectionId, ExceptionId, TemplateId, UserId};
pub use occurrences::{Occurrence, OccurrenceKind, OccurrenceStatus};
pub use templates::{CompletionStatus, ScheduleTemplate, TemplateKind};
pub use value_types::{LessonRange, ModelError};
