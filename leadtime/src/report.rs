//! Plain-text rendering of a resolved deadline.

use lt_leadtime::Deadline;
use lt_time::Date;

fn day(date: Date) -> String {
    format!("{date} ({})", date.weekday().short_name())
}

/// Render `result` the way an operator reads it: deadline first, then the
/// dates it was derived from, then any warnings.
pub fn render_text(result: &Deadline, calendar_name: &str) -> String {
    let warnings: String = result
        .advisories
        .iter()
        .map(|advisory| format!("warning: {advisory}\n"))
        .collect();
    format!(
        "Application must be received by {}\n\
         \x20 construction date:    {}\n\
         \x20 earliest usable date: {}\n\
         \x20 lead time: {} business days (equipment {} + registration {}), \
         weekends and {} holidays excluded\n\
         {warnings}",
        day(result.deadline),
        day(result.target_date),
        day(result.earliest_usable),
        result.total_lead_time_days,
        result.lead_time.equipment,
        result.lead_time.registration,
        calendar_name,
    )
}
