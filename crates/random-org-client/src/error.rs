use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandomOrgError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Either the cached quota is negative or random.org refused the request for quota reasons.
    #[error("Quota exhausted (last known quota: {})", .quota.map(|q| q.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    QuotaExhausted { quota: Option<i64> },

    #[error("random.org error: {0}")]
    Service(String),

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RandomOrgError>;
