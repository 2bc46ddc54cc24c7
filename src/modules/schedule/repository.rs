//! The persistence data contract consumed by resolution.
//!
//! Weekboard never queries a database itself; the surrounding application
//! implements [`ScheduleStore`] over its relational store (the models carry
//! `sqlx::FromRow` so rows map directly) and hands the engine the slices
//! overlapping one week window.

use async_trait::async_trait;
use chrono::NaiveDate;
use weekboard_models::{ExceptionRow, ScheduleTemplate, TemplateId, UserId};

/// Read-only access to templates and exceptions, keyed by window bounds.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Templates for `user_id` overlapping `[start, end]`.
    ///
    /// Overlap means `valid_from <= end AND valid_to >= start` for regular
    /// rows, or `exam_date` inside the window for exam rows. Returning an
    /// empty list is not an error; the user simply has no classes that week.
    async fn list_templates_overlapping(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<ScheduleTemplate>>;

    /// Exceptions for `template_ids` whose `original_date` lies in `[start, end]`.
    async fn list_exceptions_in_window(
        &self,
        template_ids: &[TemplateId],
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<ExceptionRow>>;
}
