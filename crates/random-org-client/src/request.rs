//! Request descriptions and their mapping onto random.org URLs.

use reqwest::Url;

use crate::error::{RandomOrgError, Result};
use crate::params;
use crate::types::{QueryType, StringCharset};

/// One call to the random.org HTTP interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Bytes { count: usize },
    DecimalFractions { count: usize, decimals: u32 },
    Integers { count: usize, min: i64, max: i64 },
    Passwords { count: usize, length: usize },
    Quota,
    Sequence { min: i64, max: i64 },
    Strings { count: usize, length: usize, charset: StringCharset },
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

impl Request {
    pub fn query_type(&self) -> QueryType {
        match self {
            Request::Bytes { .. } => QueryType::Bytes,
            Request::DecimalFractions { .. } => QueryType::DecimalFractions,
            Request::Integers { .. } => QueryType::Integers,
            Request::Passwords { .. } => QueryType::Passwords,
            Request::Quota => QueryType::Quota,
            Request::Sequence { .. } => QueryType::Sequences,
            Request::Strings { .. } => QueryType::Strings,
        }
    }

    /// Quota lookups are free; everything else draws on the caller's allowance.
    pub fn consumes_quota(&self) -> bool {
        !matches!(self, Request::Quota)
    }

    /// Number of values the response must contain.
    pub fn expected_len(&self) -> usize {
        match self {
            Request::Bytes { count }
            | Request::DecimalFractions { count, .. }
            | Request::Integers { count, .. }
            | Request::Passwords { count, .. }
            | Request::Strings { count, .. } => *count,
            Request::Quota => 1,
            Request::Sequence { min, max } => max
                .checked_sub(*min)
                .and_then(|span| span.checked_add(1))
                .and_then(|len| usize::try_from(len).ok())
                .unwrap_or(0),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Request::Bytes { count } => params::check_bytes(count),
            Request::DecimalFractions { count, decimals } => {
                params::check_fractions(count, decimals)
            }
            Request::Integers { count, min, max } => params::check_integers(count, min, max),
            Request::Passwords { count, length } => params::check_passwords(count, length),
            Request::Quota => Ok(()),
            Request::Sequence { min, max } => params::check_sequence(min, max),
            Request::Strings { count, length, .. } => params::check_strings(count, length),
        }
    }

    fn path(&self) -> &'static str {
        match self {
            Request::Bytes { .. } => "cgi-bin/randbyte",
            Request::DecimalFractions { .. } => "decimal-fractions/",
            Request::Integers { .. } => "integers/",
            Request::Passwords { .. } => "passwords/",
            Request::Quota => "quota/",
            Request::Sequence { .. } => "sequences/",
            Request::Strings { .. } => "strings/",
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let plain = ("format", "plain".to_string());
        let fresh = ("rnd", "new".to_string());
        match *self {
            Request::Bytes { count } => vec![
                ("nbytes", count.to_string()),
                ("format", "h".to_string()),
            ],
            Request::DecimalFractions { count, decimals } => vec![
                ("num", count.to_string()),
                ("dec", decimals.to_string()),
                ("col", "1".to_string()),
                plain,
                fresh,
            ],
            Request::Integers { count, min, max } => vec![
                ("num", count.to_string()),
                ("min", min.to_string()),
                ("max", max.to_string()),
                ("col", "1".to_string()),
                ("base", "10".to_string()),
                plain,
                fresh,
            ],
            Request::Passwords { count, length } => vec![
                ("num", count.to_string()),
                ("len", length.to_string()),
                plain,
                fresh,
            ],
            Request::Quota => vec![plain],
            Request::Sequence { min, max } => vec![
                ("min", min.to_string()),
                ("max", max.to_string()),
                ("col", "1".to_string()),
                plain,
                fresh,
            ],
            Request::Strings {
                count,
                length,
                charset,
            } => vec![
                ("num", count.to_string()),
                ("len", length.to_string()),
                ("digits", on_off(charset.digits()).to_string()),
                ("upperalpha", on_off(charset.upper()).to_string()),
                ("loweralpha", on_off(charset.lower()).to_string()),
                ("unique", "off".to_string()),
                plain,
                fresh,
            ],
        }
    }

    /// Full request URL relative to `base`. A base with a path prefix is kept as a directory.
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base.join(self.path()).map_err(|e| {
            RandomOrgError::Config(format!("cannot build URL from {}: {}", base, e))
        })?;
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.query_pairs());
        Ok(url)
    }
}
