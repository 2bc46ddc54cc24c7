use tracing::{instrument, warn};

use weekboard_core::errors::ScheduleError;
use weekboard_core::week::{WeekWindow, format_anchor, parse_anchor};
use weekboard_models::{ScheduleException, TemplateId, UserId};

use crate::modules::schedule::model::ResolvedWeek;
use crate::modules::schedule::repository::ScheduleStore;
use crate::modules::schedule::resolver;

pub struct ScheduleService;

impl ScheduleService {
    /// Resolve one user's concrete schedule for the week containing `anchor`.
    ///
    /// `anchor` may be any day of the target week, in the `dd-mm-yyyy`
    /// convention; a malformed anchor fails with
    /// [`ScheduleError::InvalidDateFormat`] before anything is fetched. A
    /// user with no templates in the window gets an empty occurrence list
    /// with the window and navigation anchors still computed.
    #[instrument(skip(store))]
    pub async fn resolve_week<S>(
        store: &S,
        user_id: UserId,
        anchor: &str,
    ) -> Result<ResolvedWeek, ScheduleError>
    where
        S: ScheduleStore + ?Sized,
    {
        let anchor = parse_anchor(anchor)?;
        let window = WeekWindow::containing(anchor);

        let templates = store
            .list_templates_overlapping(user_id, window.start, window.end)
            .await?;

        let exception_rows = if templates.is_empty() {
            Vec::new()
        } else {
            let template_ids: Vec<TemplateId> = templates.iter().map(|t| t.id).collect();
            store
                .list_exceptions_in_window(&template_ids, window.start, window.end)
                .await?
        };

        // Rows that fail per-variant validation are a data-integrity concern,
        // not a fatal one; the rest of the week must still resolve.
        let exceptions: Vec<ScheduleException> = exception_rows
            .into_iter()
            .filter_map(|row| {
                let exception_id = row.id;
                match ScheduleException::try_from(row) {
                    Ok(exception) => Some(exception),
                    Err(err) => {
                        warn!(
                            exception_id = %exception_id,
                            error = %err,
                            "Skipping malformed schedule exception"
                        );
                        None
                    }
                }
            })
            .collect();

        let occurrences = resolver::resolve_window(&window, &templates, &exceptions);

        Ok(ResolvedWeek {
            occurrences,
            window_start: window.start,
            window_end: window.end,
            anchor: window.anchor,
            previous_week_anchor: format_anchor(window.previous_anchor()),
            next_week_anchor: format_anchor(window.next_anchor()),
        })
    }
}
