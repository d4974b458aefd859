//! Argument limits enforced by random.org's HTTP interface. Checked before any request is sent.

use crate::error::{RandomOrgError, Result};

/// Smallest value accepted for integer and sequence bounds.
pub const MIN_VALUE: i64 = -1_000_000_000;
/// Largest value accepted for integer and sequence bounds.
pub const MAX_VALUE: i64 = 1_000_000_000;
/// Range used by `get_integers` when the caller gives none.
pub const DEFAULT_INTEGER_RANGE: (i64, i64) = (MIN_VALUE, MAX_VALUE);

pub const MAX_INTEGERS: usize = 10_000;
pub const MAX_SEQUENCE_LEN: i64 = 10_000;
pub const MAX_STRINGS: usize = 10_000;
pub const MAX_STRING_LEN: usize = 20;
pub const MAX_FRACTIONS: usize = 10_000;
pub const MAX_DECIMALS: u32 = 20;
pub const MAX_PASSWORDS: usize = 100;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 24;
pub const MAX_BYTES: usize = 16_384;

fn check_between<T>(name: &str, value: T, low: T, high: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < low || value > high {
        return Err(RandomOrgError::InvalidArgument(format!(
            "{} must be between {} and {} (got {})",
            name, low, high, value
        )));
    }
    Ok(())
}

fn check_bounds(min: i64, max: i64) -> Result<()> {
    check_between("min", min, MIN_VALUE, MAX_VALUE)?;
    check_between("max", max, MIN_VALUE, MAX_VALUE)?;
    if min > max {
        return Err(RandomOrgError::InvalidArgument(format!(
            "min ({}) must not be greater than max ({})",
            min, max
        )));
    }
    Ok(())
}

pub fn check_integers(count: usize, min: i64, max: i64) -> Result<()> {
    check_between("count", count, 1, MAX_INTEGERS)?;
    check_bounds(min, max)
}

pub fn check_sequence(min: i64, max: i64) -> Result<()> {
    check_bounds(min, max)?;
    let len = max - min + 1;
    if len > MAX_SEQUENCE_LEN {
        return Err(RandomOrgError::InvalidArgument(format!(
            "sequence may hold at most {} values (got {})",
            MAX_SEQUENCE_LEN, len
        )));
    }
    Ok(())
}

pub fn check_strings(count: usize, length: usize) -> Result<()> {
    check_between("count", count, 1, MAX_STRINGS)?;
    check_between("length", length, 1, MAX_STRING_LEN)
}

pub fn check_fractions(count: usize, decimals: u32) -> Result<()> {
    check_between("count", count, 1, MAX_FRACTIONS)?;
    check_between("decimals", decimals, 1, MAX_DECIMALS)
}

pub fn check_passwords(count: usize, length: usize) -> Result<()> {
    check_between("count", count, 1, MAX_PASSWORDS)?;
    check_between("length", length, MIN_PASSWORD_LEN, MAX_PASSWORD_LEN)
}

pub fn check_bytes(count: usize) -> Result<()> {
    check_between("count", count, 1, MAX_BYTES)
}
