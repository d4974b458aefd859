//! # random.org client
//!
//! Async client for the random.org HTTP interface: bytes, decimal fractions, integers, passwords,
//! sequences and strings, plus quota lookups. After each successful query the client exposes a
//! [`QueryInfo`] record (request URL, raw result, timestamps, round-trip time, remaining quota).
//!
//! ## Example
//!
//! ```rust,no_run
//! use random_org_client::{RandomOrgClient, RandomSource};
//!
//! async fn example() -> random_org_client::Result<()> {
//!     // Put your own address here so people at random.org can reach you about your requests
//!     let mut random = RandomOrgClient::with_agent("myaddress@someserver.com")?;
//!     let values = random.get_integers(10, Some((1, 100))).await?;
//!     println!("{:?}", values);
//!     if let Some(info) = random.query_info() {
//!         println!("{} ms, quota {:?}", info.elapsed, info.quota);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`ClientConfig::from_env`] reads `RANDOM_ORG_AGENT`, `RANDOM_ORG_BASE_URL`,
//! `RANDOM_ORG_TIMEOUT_SECS`, `RANDOM_ORG_TRACK_QUOTA` and `LOG_FILE`.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod params;
pub mod request;
pub mod response;
pub mod source;
pub mod types;

pub use client::RandomOrgClient;
pub use config::ClientConfig;
pub use error::{RandomOrgError, Result};
pub use logger::init_tracing;
pub use source::RandomSource;
pub use types::{QueryInfo, QueryType, StringCharset};
