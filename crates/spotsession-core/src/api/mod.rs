//! Turning stored cookies into an authenticated client.
//!
//! `ClientFactory` is the only thing the session store knows about clients.
//! `CookieClientFactory` is the stock implementation, producing a
//! `SpotifyClient` whose HTTP client carries the session cookies.

pub mod client;
pub mod error;
pub mod logger;

pub use client::{ClientConfig, ClientFactory, CookieClientFactory, SpotifyClient};
pub use error::ClientError;
pub use logger::{ClientLogger, NoopLogger, TracingLogger};
