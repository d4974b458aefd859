//! CLI parser and config loading.

use clap::{Parser, Subcommand, ValueEnum};
use random_org_client::{ClientConfig, StringCharset};

#[derive(Parser, Debug)]
#[command(name = "randorg")]
#[command(about = "Fetch true random values from random.org and show query statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Contact address sent as User-Agent (overrides RANDOM_ORG_AGENT).
    #[arg(short, long, global = true)]
    pub agent: Option<String>,

    /// Print one JSON object per query instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Random bytes.
    Bytes {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
    /// Random decimal fractions in [0, 1).
    Floats {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        #[arg(short, long, default_value_t = 3)]
        decimals: u32,
    },
    /// Random integers: once within [min, max], then once without range limits.
    Integers {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        max: i64,
    },
    /// Random passwords.
    Passwords {
        #[arg(short, long, default_value_t = 3)]
        count: usize,
        #[arg(short, long, default_value_t = 19)]
        length: usize,
    },
    /// Remaining quota (in bits) for this IP address. Does not consume quota.
    Quota,
    /// Every integer of [min, max] in random order.
    Sequence {
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        max: i64,
    },
    /// Random strings; runs every character class unless --charset is given.
    Strings {
        #[arg(short, long, default_value_t = 3)]
        count: usize,
        #[arg(short, long, default_value_t = 8)]
        length: usize,
        #[arg(long, value_enum)]
        charset: Option<Charset>,
    },
}

/// Character class selector for `strings`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Digits,
    Lower,
    Upper,
    Alphanumeric,
}

impl From<Charset> for StringCharset {
    fn from(charset: Charset) -> Self {
        match charset {
            Charset::Digits => StringCharset::Digits,
            Charset::Lower => StringCharset::Lower,
            Charset::Upper => StringCharset::Upper,
            Charset::Alphanumeric => StringCharset::Alphanumeric,
        }
    }
}

/// Load ClientConfig from environment. If `agent` is provided it overrides RANDOM_ORG_AGENT.
pub fn load_config(agent: Option<String>) -> anyhow::Result<ClientConfig> {
    let config = ClientConfig::from_env(agent)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_example_literals() {
        let cli = Cli::try_parse_from(["randorg", "integers"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Integers {
                count: 10,
                min: 1,
                max: 100
            }
        );

        let cli = Cli::try_parse_from(["randorg", "passwords"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Passwords {
                count: 3,
                length: 19
            }
        );

        let cli = Cli::try_parse_from(["randorg", "strings"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Strings {
                count: 3,
                length: 8,
                charset: None
            }
        );
    }

    #[test]
    fn global_flags_and_negative_bounds() {
        let cli = Cli::try_parse_from([
            "randorg",
            "sequence",
            "--min",
            "-5",
            "--max",
            "5",
            "--json",
            "--agent",
            "me@example.com",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.agent.as_deref(), Some("me@example.com"));
        assert_eq!(cli.command, Commands::Sequence { min: -5, max: 5 });
    }

    #[test]
    fn charset_value_enum() {
        let cli =
            Cli::try_parse_from(["randorg", "strings", "--charset", "alphanumeric"]).unwrap();
        match cli.command {
            Commands::Strings { charset, .. } => {
                assert_eq!(charset.map(StringCharset::from), Some(StringCharset::Alphanumeric))
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["randorg", "strings", "--charset", "hex"]).is_err());
    }
}
