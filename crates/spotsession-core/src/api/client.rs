use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client};
use tracing::Level;

use super::logger::{ClientLogger, NoopLogger};
use super::ClientError;
use crate::auth::{Cookies, SessionRecord};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Browser user agent; the web player endpoints reject unknown agents.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Settings handed to a [`ClientFactory`] alongside the stored record.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub logger: Arc<dyn ClientLogger>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            logger: Arc::new(NoopLogger),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_logger(mut self, logger: impl ClientLogger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }
}

/// Builds an authenticated client from a stored record.
pub trait ClientFactory {
    type Client;
    type Error: std::error::Error + Send + Sync + 'static;

    fn build_client(
        &self,
        record: &SessionRecord,
        config: &ClientConfig,
    ) -> Result<Self::Client, Self::Error>;
}

impl<F: ClientFactory + ?Sized> ClientFactory for &F {
    type Client = F::Client;
    type Error = F::Error;

    fn build_client(
        &self,
        record: &SessionRecord,
        config: &ClientConfig,
    ) -> Result<Self::Client, Self::Error> {
        (**self).build_client(record, config)
    }
}

/// A session's cookies attached to an HTTP client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    identifier: String,
    cookies: Cookies,
    http: Client,
}

impl SpotifyClient {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn cookies(&self) -> &Cookies {
        &self.cookies
    }

    /// HTTP client sending the session cookies with every request
    pub fn http(&self) -> &Client {
        &self.http
    }
}

/// Value for the `Cookie` header
fn cookie_header(cookies: &Cookies) -> String {
    format!("sp_dc={}; sp_key={}", cookies.sp_dc, cookies.sp_key)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CookieClientFactory;

impl ClientFactory for CookieClientFactory {
    type Client = SpotifyClient;
    type Error = ClientError;

    fn build_client(
        &self,
        record: &SessionRecord,
        config: &ClientConfig,
    ) -> Result<SpotifyClient, ClientError> {
        let cookies = &record.cookies;
        if cookies.sp_dc.is_empty() {
            return Err(ClientError::MissingCookie("sp_dc"));
        }
        if cookies.sp_key.is_empty() {
            return Err(ClientError::MissingCookie("sp_key"));
        }

        let mut cookie = header::HeaderValue::from_str(&cookie_header(cookies))?;
        cookie.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::COOKIE, cookie);

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        config.logger.log(
            Level::DEBUG,
            &format!("Built client for session '{}'", record.identifier),
        );

        Ok(SpotifyClient {
            identifier: record.identifier.clone(),
            cookies: cookies.clone(),
            http,
        })
    }
}
