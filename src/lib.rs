//! # Weekboard
//!
//! Weekly schedule resolution engine for school-management systems.
//!
//! Weekboard takes a user's recurring timetable templates, their schedule
//! exceptions (cancellations, make-ups, room and lecturer reassignments) and
//! exam calendar, and expands them into the concrete, ordered list of class
//! occurrences inside one Monday–Sunday week, with previous/next week
//! navigation anchors.
//!
//! Persistence, authentication and HTTP framing are collaborator concerns:
//! the engine consumes template/exception slices through the
//! [`modules::schedule::repository::ScheduleStore`] trait and returns plain
//! data, so it can be property-tested without a database.
//!
//! # Example
//!
//! ```ignore
//! use weekboard::modules::schedule::service::ScheduleService;
//!
//! let week = ScheduleService::resolve_week(&store, user_id, "18-09-2025").await?;
//! for occurrence in &week.occurrences {
//!     println!("{} {} {}", occurrence.date, occurrence.subject_name, occurrence.room);
//! }
//! ```

pub mod logging;
pub mod modules;

// Re-export the engine's surface at crate root
pub use modules::schedule::model::{ResolvedWeek, WeekQuery};
pub use modules::schedule::repository::ScheduleStore;
pub use modules::schedule::service::ScheduleService;
pub use weekboard_core::errors::ScheduleError;
