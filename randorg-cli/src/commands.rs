//! Command execution: one or more queries against a [`RandomSource`], each reported with its statistics.

use std::io::Write;

use anyhow::{Context, Result};
use random_org_client::{RandomSource, StringCharset};
use tracing::info;

use crate::cli::Commands;
use crate::report::Reporter;

/// Runs `command` against `source`, writing values and statistics through `reporter`.
pub async fn execute<W: Write>(
    command: &Commands,
    source: &mut dyn RandomSource,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    info!(command = ?command, "step: executing command");

    match *command {
        Commands::Bytes { count } => {
            let values = source
                .get_bytes(count)
                .await
                .context("Fetch random bytes")?;
            reporter.query(
                &format!("Getting {} random bytes", count),
                &values,
                source.query_info(),
            )?;
        }
        Commands::Floats { count, decimals } => {
            let values = source
                .get_floats(count, decimals)
                .await
                .context("Fetch random decimal fractions")?;
            reporter.query(
                &format!(
                    "Getting {} random float values with {} decimals",
                    count, decimals
                ),
                &values,
                source.query_info(),
            )?;
        }
        Commands::Integers { count, min, max } => {
            let values = source
                .get_integers(count, Some((min, max)))
                .await
                .context("Fetch random integers in range")?;
            reporter.query(
                &format!(
                    "Getting {} random integer values between {} and {}",
                    count, min, max
                ),
                &values,
                source.query_info(),
            )?;

            reporter.separator()?;

            let values = source
                .get_integers(count, None)
                .await
                .context("Fetch random integers without range")?;
            reporter.query(
                &format!(
                    "Getting {} random integer values without range limits",
                    count
                ),
                &values,
                source.query_info(),
            )?;
        }
        Commands::Passwords { count, length } => {
            let values = source
                .get_passwords(count, length)
                .await
                .context("Fetch random passwords")?;
            reporter.query(
                &format!(
                    "Getting {} random passwords of length {}",
                    count, length
                ),
                &values,
                source.query_info(),
            )?;
        }
        Commands::Quota => {
            let quota = source.get_quota().await.context("Fetch quota")?;
            reporter.quota(quota)?;
        }
        Commands::Sequence { min, max } => {
            let values = source
                .get_sequence(min, max)
                .await
                .context("Fetch random sequence")?;
            reporter.query(
                &format!(
                    "Getting a random sequence of all integer values between {} and {}",
                    min, max
                ),
                &values,
                source.query_info(),
            )?;
        }
        Commands::Strings {
            count,
            length,
            charset,
        } => {
            let charsets: Vec<StringCharset> = match charset {
                Some(charset) => vec![charset.into()],
                None => StringCharset::ALL.to_vec(),
            };
            for (index, charset) in charsets.into_iter().enumerate() {
                if index > 0 {
                    reporter.separator()?;
                }
                let values = source
                    .get_strings(count, length, charset)
                    .await
                    .with_context(|| format!("Fetch random strings ({})", charset.label()))?;
                reporter.query(
                    &format!(
                        "{}) Getting {} random strings of length {} ({})",
                        index + 1,
                        count,
                        length,
                        charset.label()
                    ),
                    &values,
                    source.query_info(),
                )?;
            }
        }
    }

    Ok(())
}
