//! Shared fixtures: an in-memory `ScheduleStore` and model builders.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use weekboard::ScheduleStore;
use weekboard_models::{
    CompletionStatus, CourseSectionId, ExceptionId, ExceptionRow, ExceptionType, LessonRange,
    ScheduleTemplate, TemplateId, TemplateKind, UserId,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A semester-long weekly template for the fixture user, lessons 1-3 in A1.01.
pub fn regular_template(id: u128, user: u128, day_of_week: i16) -> ScheduleTemplate {
    ScheduleTemplate {
        id: TemplateId::from_u128(id),
        user_id: UserId::from_u128(user),
        course_section_id: CourseSectionId::from_u128(id),
        kind: TemplateKind::Regular,
        day_of_week: Some(day_of_week),
        exam_date: None,
        valid_from: date(2025, 9, 1),
        valid_to: date(2025, 12, 20),
        room: "A1.01".to_string(),
        lessons: LessonRange::new(1, 3).unwrap(),
        completion_status: CompletionStatus::Scheduled,
        subject_name: "Algorithms".to_string(),
        class_name: "CS-2A".to_string(),
        lecturer_name: "Dr. Chen".to_string(),
    }
}

/// A single-date exam template for the fixture user.
pub fn exam_template(id: u128, user: u128, exam_date: NaiveDate) -> ScheduleTemplate {
    ScheduleTemplate {
        id: TemplateId::from_u128(id),
        user_id: UserId::from_u128(user),
        course_section_id: CourseSectionId::from_u128(id),
        kind: TemplateKind::Exam,
        day_of_week: None,
        exam_date: Some(exam_date),
        valid_from: exam_date,
        valid_to: exam_date,
        room: "HALL-1".to_string(),
        lessons: LessonRange::new(1, 2).unwrap(),
        completion_status: CompletionStatus::Scheduled,
        subject_name: "Algorithms".to_string(),
        class_name: "CS-2A".to_string(),
        lecturer_name: "Dr. Chen".to_string(),
    }
}

/// A bare exception row; override columns start out empty.
pub fn exception_row(
    id: u128,
    template: u128,
    exception_type: ExceptionType,
    original_date: NaiveDate,
) -> ExceptionRow {
    ExceptionRow {
        id: ExceptionId::from_u128(id),
        template_id: TemplateId::from_u128(template),
        exception_type,
        original_date,
        new_date: None,
        new_room: None,
        new_start_lesson: None,
        new_end_lesson: None,
        new_lecturer_name: None,
    }
}

/// In-memory store implementing the same window-bounded contract the
/// relational collaborator does.
#[derive(Default)]
pub struct InMemoryStore {
    pub templates: Vec<ScheduleTemplate>,
    pub exceptions: Vec<ExceptionRow>,
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn list_templates_overlapping(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<ScheduleTemplate>> {
        Ok(self
            .templates
            .iter()
            .filter(|t| t.user_id == user_id)
            .filter(|t| match t.kind {
                TemplateKind::Regular => t.valid_from <= end && t.valid_to >= start,
                TemplateKind::Exam => t.exam_date.is_some_and(|d| start <= d && d <= end),
            })
            .cloned()
            .collect())
    }

    async fn list_exceptions_in_window(
        &self,
        template_ids: &[TemplateId],
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<ExceptionRow>> {
        Ok(self
            .exceptions
            .iter()
            .filter(|e| template_ids.contains(&e.template_id))
            .filter(|e| start <= e.original_date && e.original_date <= end)
            .cloned()
            .collect())
    }
}
