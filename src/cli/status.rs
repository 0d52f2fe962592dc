//! `backpract status` command implementation.

use crate::session::{SessionStore, SessionSummary};

/// Run the status command.
pub fn run(store: &SessionStore) {
    match store.summary() {
        Some(summary) => println!("{}", format_summary(&summary)),
        None => println!("No active session."),
    }
}

/// Render a summary as a few aligned lines.
fn format_summary(summary: &SessionSummary) -> String {
    let state = if summary.complete {
        "complete"
    } else {
        "in progress"
    };
    format!(
        "Course:    {}\nLesson:    {}\nProgress:  {}/{} ({}%, {state})\nDuration:  {} min",
        summary.technology,
        summary.current_lesson_id,
        summary.completed,
        summary.total,
        summary.progress,
        summary.duration_minutes,
    )
}
