use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing cookie: {0}")]
    MissingCookie(&'static str),

    #[error("Cookie value is not a valid header: {0}")]
    InvalidCookie(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
