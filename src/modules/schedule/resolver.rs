//! The pure resolution pipeline: baseline generation and exception overlay.
//!
//! [`resolve_window`] is a stateless, synchronous computation over the
//! template/exception slices already fetched for one week window. Each
//! invocation reads only its own slices and allocates its own occurrence
//! list, so concurrent resolutions for different users or weeks need no
//! coordination.
//!
//! The one ordering guarantee is causal: a template's baseline occurrence
//! and its exception-derived occurrence(s) for the same date never both
//! appear — for every date an in-window exception targets, the exception
//! wins and the baseline is suppressed.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::warn;
use weekboard_core::week::{WeekWindow, weekday_number};
use weekboard_models::{
    Occurrence, OccurrenceKind, OccurrenceStatus, ScheduleChange, ScheduleException,
    ScheduleTemplate, TemplateId, TemplateKind,
};

/// Expand `templates` into the week's occurrences and overlay `exceptions`.
///
/// Exceptions referencing a template not present in `templates`, or an
/// `original_date` the template's recurrence could not produce, are logged
/// and skipped; the rest of the week still resolves. Multiple exceptions
/// targeting the same `(template, original_date)` are applied independently
/// and all results emitted.
///
/// The result is sorted by `(day_of_week, start_lesson)`, ties in discovery
/// order.
pub fn resolve_window(
    window: &WeekWindow,
    templates: &[ScheduleTemplate],
    exceptions: &[ScheduleException],
) -> Vec<Occurrence> {
    let known_templates: HashSet<TemplateId> = templates.iter().map(|t| t.id).collect();

    let mut by_template: HashMap<TemplateId, Vec<&ScheduleException>> = HashMap::new();
    for exception in exceptions {
        if !known_templates.contains(&exception.template_id) {
            warn!(
                exception_id = %exception.id,
                template_id = %exception.template_id,
                "Skipping exception referencing a template outside the fetched set"
            );
            continue;
        }
        by_template
            .entry(exception.template_id)
            .or_default()
            .push(exception);
    }

    let mut occurrences = Vec::new();

    for template in templates {
        let baseline_date = template.baseline_date(window);
        let mut overridden_dates: Vec<NaiveDate> = Vec::new();

        for exception in by_template.get(&template.id).into_iter().flatten() {
            if !window.contains(exception.original_date) {
                continue;
            }
            if !template.produces(exception.original_date) {
                warn!(
                    exception_id = %exception.id,
                    template_id = %template.id,
                    original_date = %exception.original_date,
                    "Skipping exception whose original date the template never produces"
                );
                continue;
            }

            overridden_dates.push(exception.original_date);
            apply_exception(template, exception, window, &mut occurrences);
        }

        // Baseline survives only for dates no exception targeted.
        if let Some(date) = baseline_date {
            if !overridden_dates.contains(&date) {
                occurrences.push(baseline_occurrence(template, date));
            }
        }
    }

    occurrences.sort_by_key(|occurrence| (occurrence.day_of_week, occurrence.lessons.start()));
    occurrences
}

/// The unmodified occurrence a template produces on `date`.
fn baseline_occurrence(template: &ScheduleTemplate, date: NaiveDate) -> Occurrence {
    let kind = match template.kind {
        TemplateKind::Regular => OccurrenceKind::Regular,
        TemplateKind::Exam => OccurrenceKind::Exam,
    };
    occurrence_from(template, date, kind, template.completion_status.into())
}

/// Emit the occurrence(s) one exception produces inside the window.
fn apply_exception(
    template: &ScheduleTemplate,
    exception: &ScheduleException,
    window: &WeekWindow,
    out: &mut Vec<Occurrence>,
) {
    let original_kind = match template.kind {
        TemplateKind::Regular => OccurrenceKind::Regular,
        TemplateKind::Exam => OccurrenceKind::Exam,
    };

    match &exception.change {
        ScheduleChange::Canceled => {
            out.push(occurrence_from(
                template,
                exception.original_date,
                original_kind,
                OccurrenceStatus::Canceled,
            ));
        }
        ScheduleChange::Makeup {
            new_date,
            new_room,
            new_lessons,
            new_lecturer,
        } => {
            // The original session is canceled in this week regardless of
            // where the make-up lands.
            out.push(occurrence_from(
                template,
                exception.original_date,
                original_kind,
                OccurrenceStatus::Canceled,
            ));

            // The make-up itself is only visible in the week containing its
            // new date; in other weeks the user sees just the cancellation.
            if window.contains(*new_date) {
                let mut makeup = occurrence_from(
                    template,
                    *new_date,
                    OccurrenceKind::Makeup,
                    OccurrenceStatus::Scheduled,
                );
                if let Some(room) = new_room {
                    makeup.room = room.clone();
                }
                if let Some(lessons) = new_lessons {
                    makeup.lessons = *lessons;
                }
                if let Some(lecturer) = new_lecturer {
                    makeup.lecturer_name = lecturer.clone();
                }
                out.push(makeup);
            }
        }
        ScheduleChange::RoomChanged { new_room } => {
            let mut moved = occurrence_from(
                template,
                exception.original_date,
                original_kind,
                OccurrenceStatus::RoomChanged,
            );
            if let Some(room) = new_room {
                moved.room = room.clone();
            }
            out.push(moved);
        }
        ScheduleChange::LecturerChanged { new_lecturer } => {
            let mut reassigned = occurrence_from(
                template,
                exception.original_date,
                original_kind,
                OccurrenceStatus::LecturerChanged,
            );
            if let Some(lecturer) = new_lecturer {
                reassigned.lecturer_name = lecturer.clone();
            }
            out.push(reassigned);
        }
    }
}

fn occurrence_from(
    template: &ScheduleTemplate,
    date: NaiveDate,
    kind: OccurrenceKind,
    status: OccurrenceStatus,
) -> Occurrence {
    Occurrence {
        subject_name: template.subject_name.clone(),
        class_name: template.class_name.clone(),
        lecturer_name: template.lecturer_name.clone(),
        kind,
        status,
        date,
        day_of_week: weekday_number(date),
        room: template.room.clone(),
        lessons: template.lessons,
    }
}
