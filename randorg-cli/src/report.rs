//! Output formatting: value lines and the query statistics block, as text or JSON.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use random_org_client::QueryInfo;
use serde::Serialize;
use serde_json::json;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Joins values as a single tab-indented, comma-separated line.
pub fn format_values<T: Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("\t{}", joined)
}

/// Renders the statistics block for the last query.
pub fn format_statistics(info: &QueryInfo) -> String {
    let quota = info
        .quota
        .map(|q| q.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    let mut out = String::new();
    out.push('\n');
    out.push_str("Query statistics :\n");
    out.push_str("~~~~~~~~~~~~~~~~\n");
    out.push_str(&format!("\tType            : {}\n", info.query_type));
    out.push_str(&format!("\tQuery           : {}\n", info.query));
    out.push_str(&format!(
        "\tQuery time      : {}\n",
        info.query_time.format(TIME_FORMAT)
    ));
    out.push_str(&format!("\tResult          : {}\n", info.result.trim_end()));
    out.push_str(&format!(
        "\tResult time     : {}\n",
        info.result_time.format(TIME_FORMAT)
    ));
    out.push_str(&format!("\tElapsed (ms)    : {}\n", info.elapsed));
    out.push_str(&format!("\tQuota (in bits) : {}\n", quota));
    out
}

/// Writes command output either as human-readable text or as one JSON object per query.
pub struct Reporter<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints one query: heading and values, followed by its statistics when known.
    pub fn query<T>(&mut self, heading: &str, values: &[T], info: Option<&QueryInfo>) -> Result<()>
    where
        T: Display + Serialize,
    {
        if self.json {
            let line = json!({
                "heading": heading,
                "values": values,
                "query_info": info,
            });
            writeln!(self.out, "{}", line)?;
            return Ok(());
        }

        writeln!(self.out, "{} :", heading)?;
        writeln!(self.out, "{}", format_values(values))?;
        if let Some(info) = info {
            write!(self.out, "{}", format_statistics(info))?;
        }
        Ok(())
    }

    pub fn quota(&mut self, quota: i64) -> Result<()> {
        if self.json {
            writeln!(self.out, "{}", json!({ "quota": quota }))?;
        } else {
            writeln!(self.out, "Your current quota in bits is : {}", quota)?;
        }
        Ok(())
    }

    /// Blank line between consecutive queries of one command (text mode only).
    pub fn separator(&mut self) -> Result<()> {
        if !self.json {
            writeln!(self.out)?;
        }
        Ok(())
    }
}
