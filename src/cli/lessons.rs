//! Lesson navigation commands: `goto`, `complete`, `uncomplete`, `lessons`.

use crate::error::{Error, Result};
use crate::session::SessionStore;

/// Run the goto command.
///
/// Tracking is best-effort: without a session nothing is recorded.
pub fn goto(store: &SessionStore, lesson_id: &str) {
    store.update_current_lesson(lesson_id);
    if store.has_active_session() {
        println!("Now on lesson {lesson_id}.");
    } else {
        println!("No active session; lesson {lesson_id} not tracked.");
    }
}

/// Run the complete command.
///
/// Marks the lesson in both completion records for the session's course.
///
/// # Errors
///
/// Returns an error if there is no active session.
pub fn complete(store: &SessionStore, lesson_id: &str) -> Result<()> {
    let message = complete_lesson(store, lesson_id)?;
    println!("{message}");
    Ok(())
}

fn complete_lesson(store: &SessionStore, lesson_id: &str) -> Result<String> {
    let technology = store
        .get_session()
        .map(|s| s.technology)
        .ok_or(Error::NoActiveSession)?;

    store.lessons().mark_lesson_completed(lesson_id, &technology);

    let Some(summary) = store.summary() else {
        return Ok(format!("Completed lesson {lesson_id}."));
    };
    let mut message = format!(
        "Completed lesson {lesson_id} ({}/{}, {}%).",
        summary.completed, summary.total, summary.progress
    );
    if summary.complete {
        message.push_str(&format!(
            "\nCourse complete in {} min.",
            summary.duration_minutes
        ));
    }
    Ok(message)
}

/// Run the uncomplete command.
pub fn uncomplete(store: &SessionStore, lesson_id: &str, technology: &str) {
    store.lessons().clear_lesson_completion(lesson_id, technology);
    println!("Cleared completion of {technology} lesson {lesson_id}.");
}

/// Run the lessons command.
pub fn list(store: &SessionStore, technology: &str) {
    let completed = store.lessons().completed_lessons(technology);
    if completed.is_empty() {
        println!("No completed {technology} lessons.");
        return;
    }
    for lesson_id in &completed {
        println!("{lesson_id}");
    }
}
