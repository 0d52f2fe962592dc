//! Single-slot session repository.
//!
//! Every public operation is infallible: storage failures and corrupted
//! records are logged and degrade to "no session", `false`, `0` or a
//! no-op, so the store is safe to drive from a shell that has no
//! persistent storage at all.

use crate::error::Result;
use crate::session::lessons::LessonFlags;
use crate::session::state::{Session, SessionSummary};
use crate::storage::KeyValueStore;
use chrono::Utc;
use std::sync::Arc;

/// Storage key of the active session.
pub const SESSION_KEY: &str = "backpract_session";

/// Storage key of the legacy progress blob. Only ever removed.
pub const PROGRESS_KEY: &str = "backpract_progress";

/// Prefix shared by every per-lesson completion flag.
pub const LESSON_COMPLETED_PREFIX: &str = "lesson-completed-";

/// Repository for the one active learning session.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Run a storage operation, logging and replacing any failure with `default`.
    pub(crate) fn or_default<T>(
        &self,
        operation: &'static str,
        default: T,
        f: impl FnOnce(&dyn KeyValueStore) -> Result<T>,
    ) -> T {
        match f(self.backend.as_ref()) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(operation, error = %e, "session storage failure");
                default
            }
        }
    }

    /// Whether a session record exists in storage.
    #[must_use]
    pub fn has_active_session(&self) -> bool {
        self.or_default("has_active_session", false, |backend| {
            Ok(backend.get(SESSION_KEY)?.is_some())
        })
    }

    /// Read the active session.
    ///
    /// Returns `None` if there is none or the stored record does not parse.
    #[must_use]
    pub fn get_session(&self) -> Option<Session> {
        self.or_default("get_session", None, |backend| {
            match backend.get(SESSION_KEY)? {
                Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
                None => Ok(None),
            }
        })
    }

    fn save(&self, operation: &'static str, session: &Session) {
        self.or_default(operation, (), |backend| {
            let raw = serde_json::to_string(session)?;
            backend.set(SESSION_KEY, &raw)
        });
    }

    /// Start a new session, replacing any existing one.
    ///
    /// The caller decides whether abandoning an in-progress course is
    /// acceptable.
    pub fn start_session(&self, technology: &str, total_lessons: u32) -> Session {
        let session = Session::new(technology, total_lessons);
        self.save("start_session", &session);
        tracing::debug!(
            session_id = %session.session_id,
            technology,
            total_lessons,
            "session started"
        );
        session
    }

    /// Move the session to `lesson_id`. No-op without a session.
    pub fn update_current_lesson(&self, lesson_id: &str) {
        if let Some(mut session) = self.get_session() {
            session.current_lesson_id = lesson_id.to_string();
            self.save("update_current_lesson", &session);
        }
    }

    /// Record `lesson_id` as completed. Idempotent; no-op without a session.
    pub fn mark_lesson_completed(&self, lesson_id: &str) {
        if let Some(mut session) = self.get_session() {
            if session.complete_lesson(lesson_id) {
                self.save("mark_lesson_completed", &session);
            }
        }
    }

    /// Whether the active session has completed its course.
    #[must_use]
    pub fn is_session_complete(&self) -> bool {
        self.get_session().is_some_and(|s| s.is_complete())
    }

    /// Completion percentage of the active session, 0 without one.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.get_session().map_or(0, |s| s.progress())
    }

    /// Minutes since the active session started, 0 without one.
    ///
    /// Evaluated against the wall clock on every call.
    #[must_use]
    pub fn session_duration_minutes(&self) -> u64 {
        self.get_session()
            .map_or(0, |s| s.duration_minutes_at(Utc::now()))
    }

    /// Display snapshot of the active session.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.get_session().map(|s| s.summary_at(Utc::now()))
    }

    /// Per-lesson completion flags sharing this store's backend.
    #[must_use]
    pub fn lessons(&self) -> LessonFlags<'_> {
        LessonFlags::new(self)
    }

    /// Remove the session, the legacy progress blob and every lesson
    /// completion flag of every technology.
    pub fn clear_session(&self) {
        self.or_default("clear_session", (), |backend| backend.remove(SESSION_KEY));
        self.or_default("clear_session", (), |backend| backend.remove(PROGRESS_KEY));

        let keys = self.or_default("clear_session", Vec::new(), |backend| backend.keys());
        let mut removed = 0_usize;
        for key in keys
            .iter()
            .filter(|k| k.starts_with(LESSON_COMPLETED_PREFIX))
        {
            self.or_default("clear_session", (), |backend| {
                backend.remove(key)?;
                removed += 1;
                Ok(())
            });
        }
        tracing::debug!(flags_removed = removed, "session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryBackend, UnavailableBackend};
    use chrono::Duration;

    fn memory_store() -> (SessionStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (SessionStore::new(backend.clone()), backend)
    }

    #[test]
    fn no_session_initially() {
        let (store, _) = memory_store();
        assert!(!store.has_active_session());
        assert!(store.get_session().is_none());
        assert!(!store.is_session_complete());
        assert_eq!(store.progress(), 0);
        assert_eq!(store.session_duration_minutes(), 0);
        assert!(store.summary().is_none());
    }

    #[test]
    fn start_session_persists() {
        let (store, backend) = memory_store();
        let session = store.start_session("python", 5);

        assert!(store.has_active_session());
        assert_eq!(store.get_session(), Some(session));
        assert!(backend.get(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn start_session_overwrites_previous() {
        let (store, _) = memory_store();
        let first = store.start_session("python", 5);
        store.mark_lesson_completed("1-1");

        let second = store.start_session("go", 3);
        let current = store.get_session().unwrap();

        assert_ne!(first.session_id, second.session_id);
        assert_eq!(current.technology, "go");
        assert!(current.completed_lessons.is_empty());
    }

    #[test]
    fn started_session_is_incomplete() {
        let (store, _) = memory_store();
        store.start_session("python", 3);
        assert!(!store.is_session_complete());
    }

    #[test]
    fn zero_lesson_session_is_complete() {
        let (store, _) = memory_store();
        store.start_session("python", 0);
        assert!(store.is_session_complete());
        assert_eq!(store.progress(), 0);
    }

    #[test]
    fn update_current_lesson() {
        let (store, _) = memory_store();
        store.start_session("python", 5);
        store.update_current_lesson("2-3");
        assert_eq!(store.get_session().unwrap().current_lesson_id, "2-3");
    }

    #[test]
    fn update_without_session_is_noop() {
        let (store, backend) = memory_store();
        store.update_current_lesson("2-3");
        store.mark_lesson_completed("2-3");
        assert!(backend.keys().unwrap().is_empty());
    }

    #[test]
    fn mark_lesson_completed_is_idempotent() {
        let (store, _) = memory_store();
        store.start_session("python", 4);
        store.mark_lesson_completed("1-1");
        store.mark_lesson_completed("1-1");
        store.mark_lesson_completed("1-2");
        assert_eq!(
            store.get_session().unwrap().completed_lessons,
            vec!["1-1", "1-2"]
        );
    }

    #[test]
    fn progress_after_three_of_four() {
        let (store, _) = memory_store();
        store.start_session("python", 4);
        for id in ["1-1", "1-2", "1-3"] {
            store.mark_lesson_completed(id);
        }
        assert_eq!(store.progress(), 75);
        assert!(!store.is_session_complete());

        store.mark_lesson_completed("1-4");
        assert!(store.is_session_complete());
    }

    #[test]
    fn duration_uses_stored_start_time() {
        let (store, backend) = memory_store();
        let mut session = store.start_session("python", 4);
        session.started_at = Utc::now() - Duration::minutes(17);
        backend
            .set(SESSION_KEY, &serde_json::to_string(&session).unwrap())
            .unwrap();

        assert_eq!(store.session_duration_minutes(), 17);
    }

    #[test]
    fn corrupted_session_reads_as_absent() {
        let (store, backend) = memory_store();
        backend.set(SESSION_KEY, "{ not json").unwrap();

        // The raw key exists, but it does not parse into a session.
        assert!(store.has_active_session());
        assert!(store.get_session().is_none());
        assert_eq!(store.progress(), 0);

        // Mutations leave the corrupted record alone.
        store.mark_lesson_completed("1-1");
        assert_eq!(backend.get(SESSION_KEY).unwrap().as_deref(), Some("{ not json"));
    }

    #[test]
    fn clear_session_removes_all_session_state() {
        let (store, backend) = memory_store();
        store.start_session("python", 4);
        backend.set(PROGRESS_KEY, "{}").unwrap();
        backend.set("lesson-completed-python-1-1", "true").unwrap();
        backend.set("lesson-completed-go-2-1", "true").unwrap();
        backend.set("theme", "dark").unwrap();

        store.clear_session();

        assert!(!store.has_active_session());
        assert_eq!(backend.keys().unwrap(), vec!["theme"]);
    }

    #[test]
    fn clear_session_without_session_succeeds() {
        let (store, _) = memory_store();
        store.clear_session();
        assert!(!store.has_active_session());
    }

    #[test]
    fn unavailable_storage_degrades_to_defaults() {
        let store = SessionStore::new(Arc::new(UnavailableBackend));

        let session = store.start_session("python", 3);
        assert_eq!(session.technology, "python");

        assert!(!store.has_active_session());
        assert!(store.get_session().is_none());
        store.update_current_lesson("1-2");
        store.mark_lesson_completed("1-2");
        assert!(!store.is_session_complete());
        assert_eq!(store.progress(), 0);
        assert_eq!(store.session_duration_minutes(), 0);
        store.clear_session();
    }

    #[test]
    fn clones_share_backend() {
        let (store, _) = memory_store();
        let other = store.clone();
        store.start_session("python", 2);
        assert!(other.has_active_session());
    }
}
