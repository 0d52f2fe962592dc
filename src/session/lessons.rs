//! Per-lesson completion flags.
//!
//! A second completion record kept next to `Session::completed_lessons`:
//! one `"true"` flag per `(technology, lesson)` pair. Course navigation
//! reads these flags while progress reporting reads the session, so the
//! two are written together by [`LessonFlags::mark_lesson_completed`]
//! but never reconciled. Keep both.

use crate::session::store::{LESSON_COMPLETED_PREFIX, SessionStore};
use std::collections::BTreeSet;

/// Flag value marking a lesson as completed.
const COMPLETED: &str = "true";

/// Storage key of the flag for `lesson_id` in `technology`.
#[must_use]
pub fn flag_key(technology: &str, lesson_id: &str) -> String {
    format!("{LESSON_COMPLETED_PREFIX}{technology}-{lesson_id}")
}

/// View over the completion flags in a [`SessionStore`]'s backend.
#[derive(Debug, Clone, Copy)]
pub struct LessonFlags<'a> {
    store: &'a SessionStore,
}

impl<'a> LessonFlags<'a> {
    pub(crate) fn new(store: &'a SessionStore) -> Self {
        Self { store }
    }

    /// Whether the flag for this lesson is set.
    #[must_use]
    pub fn is_lesson_completed(&self, lesson_id: &str, technology: &str) -> bool {
        let key = flag_key(technology, lesson_id);
        self.store
            .or_default("is_lesson_completed", false, |backend| {
                Ok(backend.get(&key)?.as_deref() == Some(COMPLETED))
            })
    }

    /// Set the flag for this lesson and record it on the active session.
    pub fn mark_lesson_completed(&self, lesson_id: &str, technology: &str) {
        let key = flag_key(technology, lesson_id);
        self.store
            .or_default("mark_lesson_completed", (), |backend| {
                backend.set(&key, COMPLETED)
            });
        self.store.mark_lesson_completed(lesson_id);
    }

    /// Remove the flag for this lesson. The session record is untouched.
    pub fn clear_lesson_completion(&self, lesson_id: &str, technology: &str) {
        let key = flag_key(technology, lesson_id);
        self.store
            .or_default("clear_lesson_completion", (), |backend| backend.remove(&key));
    }

    /// Lesson ids flagged as completed for `technology`.
    ///
    /// Matching is by key prefix, so a technology whose name extends
    /// another's followed by `-` (`go` and `go-web`) shares its scan.
    #[must_use]
    pub fn completed_lessons(&self, technology: &str) -> BTreeSet<String> {
        let prefix = format!("{LESSON_COMPLETED_PREFIX}{technology}-");
        self.store
            .or_default("completed_lessons", BTreeSet::new(), |backend| {
                let mut lessons = BTreeSet::new();
                for key in backend.keys()? {
                    let Some(lesson_id) = key.strip_prefix(&prefix) else {
                        continue;
                    };
                    if backend.get(&key)?.as_deref() == Some(COMPLETED) {
                        lessons.insert(lesson_id.to_string());
                    }
                }
                Ok(lessons)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryBackend, UnavailableBackend};
    use std::sync::Arc;

    fn memory_store() -> (SessionStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (SessionStore::new(backend.clone()), backend)
    }

    #[test]
    fn flag_key_format() {
        assert_eq!(flag_key("python", "1-2"), "lesson-completed-python-1-2");
    }

    #[test]
    fn unflagged_lesson_is_not_completed() {
        let (store, _) = memory_store();
        assert!(!store.lessons().is_lesson_completed("1-1", "python"));
    }

    #[test]
    fn mark_sets_flag_and_session() {
        let (store, backend) = memory_store();
        store.start_session("python", 3);

        store.lessons().mark_lesson_completed("1-1", "python");

        assert!(store.lessons().is_lesson_completed("1-1", "python"));
        assert_eq!(
            backend.get("lesson-completed-python-1-1").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.get_session().unwrap().completed_lessons, vec!["1-1"]);
    }

    #[test]
    fn mark_without_session_still_sets_flag() {
        let (store, _) = memory_store();
        store.lessons().mark_lesson_completed("1-1", "python");
        assert!(store.lessons().is_lesson_completed("1-1", "python"));
        assert!(!store.has_active_session());
    }

    #[test]
    fn clear_lesson_completion_leaves_session_alone() {
        let (store, _) = memory_store();
        store.start_session("python", 3);
        let lessons = store.lessons();
        lessons.mark_lesson_completed("1-1", "python");

        lessons.clear_lesson_completion("1-1", "python");

        assert!(!lessons.is_lesson_completed("1-1", "python"));
        assert_eq!(store.get_session().unwrap().completed_lessons, vec!["1-1"]);
    }

    #[test]
    fn completed_lessons_filters_by_technology() {
        let (store, backend) = memory_store();
        let lessons = store.lessons();
        lessons.mark_lesson_completed("1-1", "python");
        lessons.mark_lesson_completed("2-3", "python");
        lessons.mark_lesson_completed("1-1", "rust");
        backend.set("lesson-completed-python-1-2", "false").unwrap();
        backend.set("backpract_session", "{}").unwrap();

        let python = lessons.completed_lessons("python");
        assert_eq!(
            python.into_iter().collect::<Vec<_>>(),
            vec!["1-1".to_string(), "2-3".to_string()]
        );
        assert_eq!(lessons.completed_lessons("rust").len(), 1);
        assert!(lessons.completed_lessons("go").is_empty());
    }

    #[test]
    fn clear_session_wipes_flags_of_every_technology() {
        let (store, _) = memory_store();
        store.start_session("python", 3);
        let lessons = store.lessons();
        lessons.mark_lesson_completed("1-1", "python");
        lessons.mark_lesson_completed("1-1", "java");

        store.clear_session();

        assert!(lessons.completed_lessons("python").is_empty());
        assert!(lessons.completed_lessons("java").is_empty());
        assert!(!lessons.is_lesson_completed("1-1", "java"));
    }

    #[test]
    fn unavailable_storage_degrades_to_defaults() {
        let store = SessionStore::new(Arc::new(UnavailableBackend));
        let lessons = store.lessons();
        lessons.mark_lesson_completed("1-1", "python");
        lessons.clear_lesson_completion("1-1", "python");
        assert!(!lessons.is_lesson_completed("1-1", "python"));
        assert!(lessons.completed_lessons("python").is_empty());
    }
}
