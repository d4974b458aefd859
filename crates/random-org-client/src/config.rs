//! Client config: agent string, service endpoint, timeout, quota tracking. Loaded from env.

use std::env;

use crate::error::{RandomOrgError, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.random.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// RANDOM_ORG_AGENT; sent as User-Agent so random.org can contact the caller (an email address by convention)
    pub agent: String,
    /// RANDOM_ORG_BASE_URL
    pub base_url: String,
    /// RANDOM_ORG_TIMEOUT_SECS
    pub timeout_secs: u64,
    /// RANDOM_ORG_TRACK_QUOTA; when set, every data request is followed by a quota lookup
    pub track_quota: bool,
    /// LOG_FILE
    pub log_file: Option<String>,
}

impl ClientConfig {
    /// Config with defaults for everything but the agent string.
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            track_quota: true,
            log_file: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_track_quota(mut self, track_quota: bool) -> Self {
        self.track_quota = track_quota;
        self
    }

    /// Load from environment variables. `agent` overrides RANDOM_ORG_AGENT if provided.
    pub fn from_env(agent: Option<String>) -> Result<Self> {
        let agent = match agent {
            Some(agent) => agent,
            None => env::var("RANDOM_ORG_AGENT").map_err(|_| {
                RandomOrgError::Config(
                    "RANDOM_ORG_AGENT not set (use your email address so random.org can reach you)"
                        .to_string(),
                )
            })?,
        };
        let base_url =
            env::var("RANDOM_ORG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("RANDOM_ORG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let track_quota = env::var("RANDOM_ORG_TRACK_QUOTA")
            .ok()
            .map(|s| parse_flag(&s))
            .unwrap_or(true);
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            agent,
            base_url,
            timeout_secs,
            track_quota,
            log_file,
        })
    }

    /// Validate config (agent must be non-empty, base_url must be a valid http(s) URL).
    pub fn validate(&self) -> Result<()> {
        if self.agent.trim().is_empty() {
            return Err(RandomOrgError::Config(
                "agent string must not be empty".to_string(),
            ));
        }
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            RandomOrgError::Config(format!(
                "RANDOM_ORG_BASE_URL is not a valid URL: {} ({})",
                self.base_url, e
            ))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(RandomOrgError::Config(format!(
                "RANDOM_ORG_BASE_URL must use http or https: {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(RandomOrgError::Config(
                "RANDOM_ORG_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
