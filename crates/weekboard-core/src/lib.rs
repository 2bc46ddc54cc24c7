//! # Weekboard Core
//!
//! Core types, errors, and utilities for the Weekboard schedule engine.
//!
//! This crate provides foundational types used throughout Weekboard:
//!
//! - [`errors`]: Library error types surfaced to callers
//! - [`week`]: The Monday–Sunday week window and navigation anchors
//! - [`serde`]: Custom serde helpers for the `dd-mm-yyyy` date convention
//!
//! # Example
//!
//! ```ignore
//! use weekboard_core::week::{WeekWindow, parse_anchor};
//!
//! let anchor = parse_anchor("18-09-2025")?;
//! let window = WeekWindow::containing(anchor);
//!
//! assert!(window.contains(anchor));
//! ```

pub mod errors;
pub mod serde;
pub mod week;

// Re-export commonly used types at crate root
pub use errors::ScheduleError;
pub use week::{ANCHOR_FORMAT, WeekWindow, format_anchor, parse_anchor, weekday_number};
