use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info, warn};

use super::record::{SessionRecord, StoredEntry};
use crate::api::{ClientConfig, ClientFactory};
use crate::config;
use crate::error::{Result, SessionError};

/// Identifier used when the caller does not name a session
pub const DEFAULT_IDENTIFIER: &str = "default";

/// Indentation of the written session file
const INDENT: &[u8] = b"    ";

/// Named cookie sessions backed by a single JSON file.
///
/// No locking: two writers racing on the same file can lose an update.
pub struct SessionStore<F> {
    path: PathBuf,
    factory: F,
}

impl<F: ClientFactory> SessionStore<F> {
    /// Store at the per-user default location
    pub fn new(factory: F) -> Result<Self> {
        Ok(Self::at(config::default_session_path()?, factory))
    }

    pub fn at(path: impl Into<PathBuf>, factory: F) -> Self {
        Self {
            path: path.into(),
            factory,
        }
    }

    /// Same factory, different file. Used for one-off path overrides.
    pub fn with_path(&self, path: impl Into<PathBuf>) -> SessionStore<&F> {
        SessionStore::at(path, &self.factory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Save a cookie pair under `identifier`, replacing any previous entry
    /// with that identifier, then load it back as a client.
    ///
    /// An unreadable or corrupt existing file is discarded, never reported.
    pub fn save(&self, identifier: Option<&str>, sp_dc: &str, sp_key: &str) -> Result<F::Client> {
        let identifier = identifier.unwrap_or(DEFAULT_IDENTIFIER);
        let record = SessionRecord::new(identifier, sp_dc, sp_key);

        let mut entries = self.read_existing();
        entries.retain(|entry| !entry.matches(identifier));
        entries.push(StoredEntry::from(record));
        self.write_entries(&entries)?;

        info!("Session '{}' saved to: {}", identifier, self.path.display());

        self.load(Some(identifier))
    }

    /// Load a session with a silent client configuration
    pub fn load(&self, identifier: Option<&str>) -> Result<F::Client> {
        self.load_with(identifier, &ClientConfig::default())
    }

    pub fn load_with(&self, identifier: Option<&str>, config: &ClientConfig) -> Result<F::Client> {
        let record = self.record(identifier)?;
        self.factory
            .build_client(&record, config)
            .map_err(|e| SessionError::Client(Box::new(e)))
    }

    /// Look up the stored record without building a client.
    /// The first entry wins if a hand-edited file repeats an identifier.
    pub fn record(&self, identifier: Option<&str>) -> Result<SessionRecord> {
        let identifier = identifier.unwrap_or(DEFAULT_IDENTIFIER);
        let entries = self.read_entries()?;

        match entries.iter().find(|entry| entry.matches(identifier)) {
            Some(entry) => {
                debug!(identifier, "Found session");
                entry.to_record()
            }
            None => Err(SessionError::UnknownSession {
                identifier: identifier.to_string(),
                available: entries.iter().map(StoredEntry::display_identifier).collect(),
            }),
        }
    }

    /// Identifiers in file order; empty when the file does not exist.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let entries = self.read_entries()?;
        Ok(entries.iter().map(StoredEntry::display_identifier).collect())
    }

    /// Remove every entry named `identifier` and rewrite the file.
    pub fn remove(&self, identifier: &str) -> Result<()> {
        let entries = self.read_entries()?;
        let before = entries.len();
        let remaining: Vec<StoredEntry> = entries
            .into_iter()
            .filter(|entry| !entry.matches(identifier))
            .collect();

        if remaining.len() == before {
            return Err(SessionError::NotSaved {
                identifier: identifier.to_string(),
            });
        }

        self.write_entries(&remaining)?;
        info!("Session '{}' removed from {}.", identifier, self.path.display());
        Ok(())
    }

    /// Read and parse the session file; a missing file is an error.
    fn read_entries(&self) -> Result<Vec<StoredEntry>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SessionError::NotFound {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(SessionError::io(&self.path, e)),
        };

        let entries: Vec<StoredEntry> =
            serde_json::from_str(&contents).map_err(|source| SessionError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = entries.len(), "Read session file");
        Ok(entries)
    }

    /// Existing entries for `save`. Anything unusable counts as no sessions.
    fn read_existing(&self) -> Vec<StoredEntry> {
        match self.read_entries() {
            Ok(entries) => entries,
            Err(SessionError::NotFound { .. }) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session file");
                Vec::new()
            }
        }
    }

    fn write_entries(&self, entries: &[StoredEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::io(parent, e))?;
        }

        let mut contents = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut contents, PrettyFormatter::with_indent(INDENT));
        entries
            .serialize(&mut serializer)
            .map_err(SessionError::Encode)?;

        std::fs::write(&self.path, contents).map_err(|e| SessionError::io(&self.path, e))?;
        debug!(path = %self.path.display(), count = entries.len(), "Wrote session file");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
