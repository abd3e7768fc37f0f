use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No session file found at {}. Run `spotsession setup <sp_dc> <sp_key>` first.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Session '{identifier}' not found. Available sessions: {}", format_available(.available))]
    UnknownSession {
        identifier: String,
        available: Vec<String>,
    },

    #[error("Session '{identifier}' not found.")]
    NotSaved { identifier: String },

    #[error("Session '{identifier}' has no usable sp_dc/sp_key cookies")]
    MalformedRecord { identifier: String },

    #[error("Failed to parse session file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to access session file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode sessions: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Could not find home directory")]
    NoHomeDir,

    #[error("Failed to build client: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SessionError::Io {
            path: path.into(),
            source,
        }
    }
}

fn format_available(available: &[String]) -> String {
    let quoted: Vec<String> = available.iter().map(|id| format!("'{}'", id)).collect();
    format!("[{}]", quoted.join(", "))
}
