//! Session record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the first lesson of every course.
pub const FIRST_LESSON_ID: &str = "1-1";

/// One learner's attempt at one technology's course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique token generated at session start.
    pub session_id: String,

    /// Course/track key into the lesson catalog. Not validated.
    pub technology: String,

    /// When the session was started.
    pub started_at: DateTime<Utc>,

    /// Lesson currently being viewed.
    pub current_lesson_id: String,

    /// Lessons finished so far, in completion order, without duplicates.
    #[serde(default)]
    pub completed_lessons: Vec<String>,

    /// Number of lessons required to finish the course.
    pub total_lessons: u32,
}

impl Session {
    /// Create a fresh session positioned on the first lesson.
    #[must_use]
    pub fn new(technology: &str, total_lessons: u32) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            technology: technology.to_string(),
            started_at: Utc::now(),
            current_lesson_id: FIRST_LESSON_ID.to_string(),
            completed_lessons: Vec::new(),
            total_lessons,
        }
    }

    /// Record a completed lesson.
    ///
    /// Returns `false` if the lesson was already recorded.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> bool {
        if self.completed_lessons.iter().any(|id| id == lesson_id) {
            return false;
        }
        self.completed_lessons.push(lesson_id.to_string());
        true
    }

    /// Number of distinct completed lessons.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_lessons.len()
    }

    /// Whether enough lessons are completed to finish the course.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_count() as u64 >= u64::from(self.total_lessons)
    }

    /// Completion percentage, rounded half-up and capped at 100.
    ///
    /// A course with zero lessons reports 0.
    #[must_use]
    pub fn progress(&self) -> u8 {
        let total = u64::from(self.total_lessons);
        if total == 0 {
            return 0;
        }
        let done = self.completed_count() as u64;
        let percent = (done * 200 + total) / (total * 2);
        u8::try_from(percent.min(100)).unwrap_or(100)
    }

    /// Whole minutes elapsed between `started_at` and `now`, rounded half-up.
    #[must_use]
    pub fn duration_minutes_at(&self, now: DateTime<Utc>) -> u64 {
        let elapsed_ms = (now - self.started_at).num_milliseconds();
        u64::try_from(elapsed_ms).map_or(0, |ms| (ms + 30_000) / 60_000)
    }

    /// Display snapshot of this session at `now`.
    #[must_use]
    pub fn summary_at(&self, now: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            technology: self.technology.clone(),
            current_lesson_id: self.current_lesson_id.clone(),
            completed: self.completed_count(),
            total: self.total_lessons,
            progress: self.progress(),
            duration_minutes: self.duration_minutes_at(now),
            complete: self.is_complete(),
        }
    }
}

/// Summary information for the active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Course being taken.
    pub technology: String,

    /// Lesson currently being viewed.
    pub current_lesson_id: String,

    /// Number of completed lessons.
    pub completed: usize,

    /// Number of lessons in the course.
    pub total: u32,

    /// Completion percentage.
    pub progress: u8,

    /// Minutes since the session started.
    pub duration_minutes: u64,

    /// Whether the course is finished.
    pub complete: bool,
}
