//! HTTP client for random.org. Sends plain-text queries, parses the values, and keeps the
//! statistics of the last successful query together with the last quota seen.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{RandomOrgError, Result};
use crate::params::DEFAULT_INTEGER_RANGE;
use crate::request::Request;
use crate::response;
use crate::source::RandomSource;
use crate::types::{QueryInfo, StringCharset};

/// random.org client.
///
/// Data requests are refused locally once the last observed quota is negative; random.org asks
/// clients to stop querying until the allowance is topped up again.
#[derive(Debug)]
pub struct RandomOrgClient {
    http: Client,
    base_url: Url,
    agent: String,
    track_quota: bool,
    last_query: Option<QueryInfo>,
    last_quota: Option<i64>,
}

/// Raw outcome of one HTTP round trip.
struct Exchange {
    url: Url,
    query_time: DateTime<Local>,
    result_time: DateTime<Local>,
    elapsed_ms: u64,
    body: String,
}

impl RandomOrgClient {
    /// Builds a client from a validated config.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| RandomOrgError::Config(format!("invalid base URL: {}", e)))?;
        let http = Client::builder()
            .user_agent(config.agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            agent = %config.agent,
            base_url = %base_url,
            track_quota = config.track_quota,
            "random.org client created"
        );

        Ok(Self {
            http,
            base_url,
            agent: config.agent,
            track_quota: config.track_quota,
            last_query: None,
            last_quota: None,
        })
    }

    /// Builds a client for the public random.org endpoint with default settings.
    pub fn with_agent(agent: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(agent))
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Last quota value observed, either from `get_quota` or from tracking after a data request.
    pub fn last_quota(&self) -> Option<i64> {
        self.last_quota
    }

    async fn send(&self, request: &Request) -> Result<Exchange> {
        request.validate()?;

        if request.consumes_quota() {
            if let Some(quota) = self.last_quota.filter(|q| *q < 0) {
                warn!(
                    query_type = %request.query_type(),
                    quota = quota,
                    "Refusing request: quota exhausted"
                );
                return Err(RandomOrgError::QuotaExhausted { quota: Some(quota) });
            }
        }

        let url = request.to_url(&self.base_url)?;
        info!(query_type = %request.query_type(), url = %url, "random.org request");

        let query_time = Local::now();
        let started = Instant::now();
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let result_time = Local::now();

        debug!(
            query_type = %request.query_type(),
            status = status.as_u16(),
            elapsed_ms = elapsed_ms,
            body_len = body.len(),
            "random.org response"
        );

        if let Err(e) = response::check_body(status, &body) {
            warn!(query_type = %request.query_type(), error = %e, "random.org request failed");
            return Err(e);
        }

        Ok(Exchange {
            url,
            query_time,
            result_time,
            elapsed_ms,
            body,
        })
    }

    /// Quota lookup after a data request. Failures are logged and leave the quota unknown.
    async fn lookup_quota(&mut self) -> Option<i64> {
        let looked_up = match self.send(&Request::Quota).await {
            Ok(exchange) => response::parse_quota(&exchange.body),
            Err(e) => Err(e),
        };
        match looked_up {
            Ok(quota) => {
                self.last_quota = Some(quota);
                Some(quota)
            }
            Err(e) => {
                warn!(error = %e, "Quota lookup after query failed");
                None
            }
        }
    }

    fn record(&mut self, request: &Request, exchange: Exchange, quota: Option<i64>) {
        info!(
            query_type = %request.query_type(),
            elapsed_ms = exchange.elapsed_ms,
            quota = ?quota,
            "random.org query done"
        );
        self.last_query = Some(QueryInfo {
            query_type: request.query_type(),
            query: exchange.url.to_string(),
            query_time: exchange.query_time,
            result: exchange.body,
            result_time: exchange.result_time,
            elapsed: exchange.elapsed_ms,
            quota,
        });
    }

    /// Sends a data request, parses its body, then records statistics (and the quota, if tracked).
    async fn run<T, F>(&mut self, request: Request, parse: F) -> Result<T>
    where
        F: FnOnce(&str) -> Result<T> + Send,
        T: Send,
    {
        let exchange = self.send(&request).await?;
        let values = parse(&exchange.body)?;
        let quota = if self.track_quota {
            self.lookup_quota().await
        } else {
            None
        };
        self.record(&request, exchange, quota);
        Ok(values)
    }
}

fn check_strings(values: &[String], length: usize, accepts: impl Fn(char) -> bool) -> Result<()> {
    for value in values {
        if value.chars().count() != length {
            return Err(RandomOrgError::MalformedResponse(format!(
                "expected strings of length {}, got {:?}",
                length, value
            )));
        }
        if let Some(c) = value.chars().find(|c| !accepts(*c)) {
            return Err(RandomOrgError::MalformedResponse(format!(
                "unexpected character {:?} in {:?}",
                c, value
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl RandomSource for RandomOrgClient {
    async fn get_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.run(Request::Bytes { count }, |body| {
            response::parse_hex_bytes(body, count)
        })
        .await
    }

    async fn get_floats(&mut self, count: usize, decimals: u32) -> Result<Vec<f64>> {
        self.run(Request::DecimalFractions { count, decimals }, |body| {
            let values: Vec<f64> = response::parse_values(body, count)?;
            match values.iter().find(|v| !(0.0..1.0).contains(*v)) {
                Some(v) => Err(RandomOrgError::MalformedResponse(format!(
                    "fraction {} outside [0, 1)",
                    v
                ))),
                None => Ok(values),
            }
        })
        .await
    }

    async fn get_integers(&mut self, count: usize, range: Option<(i64, i64)>) -> Result<Vec<i64>> {
        let (min, max) = range.unwrap_or(DEFAULT_INTEGER_RANGE);
        self.run(Request::Integers { count, min, max }, |body| {
            let values = response::parse_values(body, count)?;
            response::check_range(&values, min, max)?;
            Ok(values)
        })
        .await
    }

    async fn get_passwords(&mut self, count: usize, length: usize) -> Result<Vec<String>> {
        self.run(Request::Passwords { count, length }, |body| {
            let values = response::parse_strings(body, count)?;
            check_strings(&values, length, |c| c.is_ascii_graphic())?;
            Ok(values)
        })
        .await
    }

    async fn get_quota(&mut self) -> Result<i64> {
        let request = Request::Quota;
        let exchange = self.send(&request).await?;
        let quota = response::parse_quota(&exchange.body)?;
        self.last_quota = Some(quota);
        self.record(&request, exchange, Some(quota));
        Ok(quota)
    }

    async fn get_sequence(&mut self, min: i64, max: i64) -> Result<Vec<i64>> {
        let request = Request::Sequence { min, max };
        let expected = request.expected_len();
        self.run(request, |body| {
            let values = response::parse_values(body, expected)?;
            response::check_permutation(&values, min, max)?;
            Ok(values)
        })
        .await
    }

    async fn get_strings(
        &mut self,
        count: usize,
        length: usize,
        charset: StringCharset,
    ) -> Result<Vec<String>> {
        self.run(
            Request::Strings {
                count,
                length,
                charset,
            },
            |body| {
                let values = response::parse_strings(body, count)?;
                check_strings(&values, length, |c| charset.contains(c))?;
                Ok(values)
            },
        )
        .await
    }

    fn query_info(&self) -> Option<&QueryInfo> {
        self.last_query.as_ref()
    }
}
