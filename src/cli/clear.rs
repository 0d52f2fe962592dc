//! `backpract clear` command implementation.

use crate::session::SessionStore;

/// Run the clear command.
///
/// Removes the session and every lesson flag, for all courses.
pub fn run(store: &SessionStore) {
    let had_session = store.has_active_session();
    store.clear_session();
    if had_session {
        println!("Session cleared.");
    } else {
        println!("No active session; lesson progress cleared.");
    }
}
