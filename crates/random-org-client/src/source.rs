use async_trait::async_trait;

use crate::error::Result;
use crate::types::{QueryInfo, StringCharset};

/// Source of true random values with per-query statistics.
///
/// Every successful data call replaces the record returned by [`RandomSource::query_info`].
#[async_trait]
pub trait RandomSource: Send {
    /// `count` random bytes.
    async fn get_bytes(&mut self, count: usize) -> Result<Vec<u8>>;

    /// `count` fractions in `[0, 1)` with `decimals` decimal places.
    async fn get_floats(&mut self, count: usize, decimals: u32) -> Result<Vec<f64>>;

    /// `count` integers in `range` (inclusive); `None` uses the widest range the service allows.
    async fn get_integers(&mut self, count: usize, range: Option<(i64, i64)>) -> Result<Vec<i64>>;

    /// `count` passwords of `length` characters.
    async fn get_passwords(&mut self, count: usize, length: usize) -> Result<Vec<String>>;

    /// Remaining quota in bits. Does not consume quota.
    async fn get_quota(&mut self) -> Result<i64>;

    /// Every integer of `[min, max]` in random order.
    async fn get_sequence(&mut self, min: i64, max: i64) -> Result<Vec<i64>>;

    /// `count` strings of `length` characters drawn from `charset`.
    async fn get_strings(
        &mut self,
        count: usize,
        length: usize,
        charset: StringCharset,
    ) -> Result<Vec<String>>;

    /// Statistics for the most recent successful query.
    fn query_info(&self) -> Option<&QueryInfo>;
}
