use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SessionError};

/// Placeholder reported by `list` for entries without an identifier
pub(crate) const MISSING_IDENTIFIER: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cookies {
    pub sp_dc: String,
    pub sp_key: String,
}

/// One stored credential set, as handed to a [`crate::ClientFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub identifier: String,
    /// Always empty for cookie sessions
    pub password: String,
    pub cookies: Cookies,
}

impl SessionRecord {
    /// Build a record from raw cookie values, trimming surrounding whitespace.
    pub fn new(identifier: impl Into<String>, sp_dc: &str, sp_key: &str) -> Self {
        Self {
            identifier: identifier.into(),
            password: String::new(),
            cookies: Cookies {
                sp_dc: sp_dc.trim().to_string(),
                sp_key: sp_key.trim().to_string(),
            },
        }
    }
}

/// On-disk form of a record: any JSON object.
///
/// Kept as a raw map so hand-edited entries (odd value types, extra keys)
/// are written back exactly as read, key order included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct StoredEntry(Map<String, Value>);

impl StoredEntry {
    /// String identifier, if the entry has one
    fn identifier(&self) -> Option<&str> {
        self.0.get("identifier").and_then(Value::as_str)
    }

    pub fn matches(&self, identifier: &str) -> bool {
        self.identifier() == Some(identifier)
    }

    /// Identifier as shown to users; non-string values are shown as JSON.
    pub fn display_identifier(&self) -> String {
        match self.0.get("identifier") {
            Some(Value::String(identifier)) => identifier.clone(),
            Some(other) => other.to_string(),
            None => MISSING_IDENTIFIER.to_string(),
        }
    }

    pub fn to_record(&self) -> Result<SessionRecord> {
        let identifier = self.display_identifier();
        let cookies = self
            .0
            .get("cookies")
            .cloned()
            .and_then(|value| serde_json::from_value::<Cookies>(value).ok())
            .ok_or_else(|| SessionError::MalformedRecord {
                identifier: identifier.clone(),
            })?;

        Ok(SessionRecord {
            identifier,
            password: self
                .0
                .get("password")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            cookies,
        })
    }
}

impl From<SessionRecord> for StoredEntry {
    fn from(record: SessionRecord) -> Self {
        let mut entry = Map::new();
        entry.insert("identifier".to_string(), Value::from(record.identifier));
        entry.insert("password".to_string(), Value::from(record.password));
        entry.insert(
            "cookies".to_string(),
            serde_json::json!({
                "sp_dc": record.cookies.sp_dc,
                "sp_key": record.cookies.sp_key,
            }),
        );
        Self(entry)
    }
}
