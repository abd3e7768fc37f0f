//! Core library for spotsession.
//!
//! Stores Spotify `sp_dc` / `sp_key` cookie pairs under user-chosen
//! identifiers in a single JSON file and turns a stored entry back into an
//! authenticated client.
//!
//! - `auth`: the session file and its records
//! - `api`: the client factory seam, client configuration and the default
//!   cookie-backed client
//! - `config`: session file location

pub mod api;
pub mod auth;
pub mod config;
pub mod error;

pub use api::{
    ClientConfig, ClientError, ClientFactory, ClientLogger, CookieClientFactory, NoopLogger,
    SpotifyClient, TracingLogger,
};
pub use auth::{Cookies, SessionRecord, SessionStore, DEFAULT_IDENTIFIER};
pub use config::{default_session_path, resolve_session_path};
pub use error::{Result, SessionError};
