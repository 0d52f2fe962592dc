//! backpract - backend practice lessons.
//!
//! Tracks a learner's progress through a technology course and runs their
//! code snippets on a remote sandboxed execution service.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod session;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use executor::{ExecutionClient, format_execution_result};
pub use session::{LessonFlags, Session, SessionStore};
