//! Session file location.
//!
//! The default session file is `~/.config/spotapi/session.json` on every
//! platform. Callers can always pass an explicit path instead.

use std::path::PathBuf;

use crate::error::{Result, SessionError};

/// Per-user directory holding the session file, relative to home
const CONFIG_DIR: &str = ".config";

/// Application name used for the config directory path
const APP_NAME: &str = "spotapi";

/// Session file name in the config directory
const SESSION_FILE: &str = "session.json";

pub fn default_session_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(SessionError::NoHomeDir)?;
    Ok(home_dir.join(CONFIG_DIR).join(APP_NAME).join(SESSION_FILE))
}

/// An explicit path wins over the per-user default.
pub fn resolve_session_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => default_session_path(),
    }
}
