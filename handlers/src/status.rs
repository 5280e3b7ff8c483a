//! Status note: free text appended to every text reply, read once at startup.

use std::path::Path;

use tracing::{info, warn};

/// File read at startup, relative to the working directory.
pub const DEFAULT_STATUS_FILE: &str = "aqi-status";

/// Whole contents of `path`, unmodified. A missing or unreadable file yields an empty note.
pub fn load_status_note(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => {
            let note = String::from_utf8_lossy(&bytes).into_owned();
            info!(path = %path.display(), bytes = bytes.len(), "status note loaded");
            note
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "status note unavailable, using empty note");
            String::new()
        }
    }
}
