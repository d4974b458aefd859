//! Query statistics record and request vocabulary shared by the client and its callers.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of query sent to random.org. Displays as the resource name used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryType {
    Bytes,
    DecimalFractions,
    Integers,
    Passwords,
    Quota,
    Sequences,
    Strings,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Bytes => "bytes",
            QueryType::DecimalFractions => "decimal-fractions",
            QueryType::Integers => "integers",
            QueryType::Passwords => "passwords",
            QueryType::Quota => "quota",
            QueryType::Sequences => "sequences",
            QueryType::Strings => "strings",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character classes allowed in generated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringCharset {
    Digits,
    Lower,
    Upper,
    Alphanumeric,
}

impl StringCharset {
    pub const ALL: [StringCharset; 4] = [
        StringCharset::Digits,
        StringCharset::Lower,
        StringCharset::Upper,
        StringCharset::Alphanumeric,
    ];

    pub fn digits(&self) -> bool {
        matches!(self, StringCharset::Digits | StringCharset::Alphanumeric)
    }

    pub fn lower(&self) -> bool {
        matches!(self, StringCharset::Lower | StringCharset::Alphanumeric)
    }

    pub fn upper(&self) -> bool {
        matches!(self, StringCharset::Upper | StringCharset::Alphanumeric)
    }

    /// Whether `c` belongs to this class.
    pub fn contains(&self, c: char) -> bool {
        (self.digits() && c.is_ascii_digit())
            || (self.lower() && c.is_ascii_lowercase())
            || (self.upper() && c.is_ascii_uppercase())
    }

    /// Human-readable label, e.g. "digits only".
    pub fn label(&self) -> &'static str {
        match self {
            StringCharset::Digits => "digits only",
            StringCharset::Lower => "lowercase letters only",
            StringCharset::Upper => "uppercase letters only",
            StringCharset::Alphanumeric => "alphanumeric characters",
        }
    }
}

/// Snapshot of the most recent successful query.
///
/// Replaced after every successful request; a failed request leaves the previous snapshot untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryInfo {
    #[serde(rename = "type")]
    pub query_type: QueryType,
    /// Full request URL.
    pub query: String,
    #[serde(rename = "query-time")]
    pub query_time: DateTime<Local>,
    /// Raw response body.
    pub result: String,
    #[serde(rename = "result-time")]
    pub result_time: DateTime<Local>,
    /// Round-trip time in milliseconds.
    pub elapsed: u64,
    /// Remaining quota in bits after the query, when known.
    pub quota: Option<i64>,
}
