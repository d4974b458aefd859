//! Parsing of random.org plain-text responses.

use std::collections::HashSet;
use std::str::FromStr;

use reqwest::StatusCode;

use crate::error::{RandomOrgError, Result};

const ERROR_PREFIX: &str = "Error:";

/// Maps a raw response to a service or status error when random.org refused the request.
///
/// random.org reports failures as a plain-text body starting with `Error:`, usually with status 503.
pub fn check_body(status: StatusCode, body: &str) -> Result<()> {
    let trimmed = body.trim();
    if let Some(message) = trimmed.strip_prefix(ERROR_PREFIX) {
        let message = message.trim().to_string();
        if message.to_ascii_lowercase().contains("quota") {
            return Err(RandomOrgError::QuotaExhausted { quota: None });
        }
        return Err(RandomOrgError::Service(message));
    }
    if !status.is_success() {
        return Err(RandomOrgError::Status {
            status: status.as_u16(),
            body: trimmed.to_string(),
        });
    }
    Ok(())
}

/// Non-empty trimmed lines of a plain-text body.
pub fn lines(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn expect_len<T>(values: Vec<T>, expected: usize) -> Result<Vec<T>> {
    if values.len() != expected {
        return Err(RandomOrgError::MalformedResponse(format!(
            "expected {} values, got {}",
            expected,
            values.len()
        )));
    }
    Ok(values)
}

/// Parses one value per line.
pub fn parse_values<T>(body: &str, expected: usize) -> Result<Vec<T>>
where
    T: FromStr,
{
    let values = lines(body)
        .into_iter()
        .map(|line| {
            line.parse::<T>().map_err(|_| {
                RandomOrgError::MalformedResponse(format!("unparseable value: {:?}", line))
            })
        })
        .collect::<Result<Vec<T>>>()?;
    expect_len(values, expected)
}

/// Returns the lines as owned strings.
pub fn parse_strings(body: &str, expected: usize) -> Result<Vec<String>> {
    let values = lines(body).into_iter().map(str::to_string).collect();
    expect_len(values, expected)
}

/// Parses hexadecimal byte pairs separated by any whitespace.
pub fn parse_hex_bytes(body: &str, expected: usize) -> Result<Vec<u8>> {
    let bytes = body
        .split_whitespace()
        .map(|token| {
            u8::from_str_radix(token, 16).map_err(|_| {
                RandomOrgError::MalformedResponse(format!("invalid hex byte: {:?}", token))
            })
        })
        .collect::<Result<Vec<u8>>>()?;
    expect_len(bytes, expected)
}

/// Parses a single integer (quota responses).
pub fn parse_quota(body: &str) -> Result<i64> {
    parse_values::<i64>(body, 1)?
        .into_iter()
        .next()
        .ok_or_else(|| RandomOrgError::MalformedResponse("empty quota response".to_string()))
}

/// Checks that `values` holds every integer of `[min, max]` exactly once.
pub fn check_permutation(values: &[i64], min: i64, max: i64) -> Result<()> {
    let mut seen = HashSet::with_capacity(values.len());
    for &value in values {
        if value < min || value > max {
            return Err(RandomOrgError::MalformedResponse(format!(
                "sequence value {} outside [{}, {}]",
                value, min, max
            )));
        }
        if !seen.insert(value) {
            return Err(RandomOrgError::MalformedResponse(format!(
                "sequence value {} repeated",
                value
            )));
        }
    }
    let expected = usize::try_from(max - min + 1).unwrap_or(0);
    if seen.len() != expected {
        return Err(RandomOrgError::MalformedResponse(format!(
            "sequence holds {} of {} values",
            seen.len(),
            expected
        )));
    }
    Ok(())
}

/// Checks that every returned value lies within `[min, max]`.
pub fn check_range(values: &[i64], min: i64, max: i64) -> Result<()> {
    match values.iter().find(|v| **v < min || **v > max) {
        Some(v) => Err(RandomOrgError::MalformedResponse(format!(
            "value {} outside [{}, {}]",
            v, min, max
        ))),
        None => Ok(()),
    }
}
