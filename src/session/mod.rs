//! Learner session tracking.

pub mod lessons;
pub mod state;
pub mod store;

pub use lessons::LessonFlags;
pub use state::{FIRST_LESSON_ID, Session, SessionSummary};
pub use store::{LESSON_COMPLETED_PREFIX, PROGRESS_KEY, SESSION_KEY, SessionStore};
