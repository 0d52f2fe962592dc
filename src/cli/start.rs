//! `backpract start` command implementation.

use crate::error::{Error, Result};
use crate::session::{Session, SessionStore};

/// Run the start command.
///
/// Refuses to abandon an unfinished course unless `force` is set.
///
/// # Errors
///
/// Returns an error if an unfinished session exists and `force` is false.
pub fn run(store: &SessionStore, technology: &str, lessons: u32, force: bool) -> Result<()> {
    let session = start(store, technology, lessons, force)?;
    println!(
        "Started {} course ({} lessons) at lesson {}.",
        session.technology, session.total_lessons, session.current_lesson_id
    );
    Ok(())
}

fn start(store: &SessionStore, technology: &str, lessons: u32, force: bool) -> Result<Session> {
    if !force {
        if let Some(existing) = store.get_session() {
            if !existing.is_complete() {
                return Err(Error::InvalidArgument(format!(
                    "a {} course is in progress ({}%); use --force to abandon it",
                    existing.technology,
                    existing.progress()
                )));
            }
        }
    }
    Ok(store.start_session(technology, lessons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use std::sync::Arc;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn starts_fresh_session() {
        let store = store();
        let session = start(&store, "rust", 6, false).unwrap();
        assert_eq!(session.total_lessons, 6);
        assert!(store.has_active_session());
    }

    #[test]
    fn refuses_to_abandon_unfinished_course() {
        let store = store();
        let first = store.start_session("python", 5);

        let err = start(&store, "go", 3, false).unwrap_err();
        assert!(err.to_string().contains("python"));
        assert_eq!(store.get_session().unwrap().session_id, first.session_id);
    }

    #[test]
    fn force_overwrites_unfinished_course() {
        let store = store();
        store.start_session("python", 5);
        start(&store, "go", 3, true).unwrap();
        assert_eq!(store.get_session().unwrap().technology, "go");
    }

    #[test]
    fn finished_course_can_be_replaced() {
        let store = store();
        store.start_session("python", 1);
        store.mark_lesson_completed("1-1");
        start(&store, "go", 3, false).unwrap();
        assert_eq!(store.get_session().unwrap().technology, "go");
    }
}
