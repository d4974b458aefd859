//! Tests for [`randorg_cli::execute`] using an in-memory [`RandomSource`].
//!
//! The fake source returns deterministic values and builds a query info record per call, so the
//! text and JSON reports can be checked without touching the network.

use async_trait::async_trait;
use chrono::Local;
use random_org_client::{
    QueryInfo, QueryType, RandomOrgError, RandomSource, Result, StringCharset,
};
use randorg_cli::{execute, Charset, Commands, Reporter};

/// Deterministic source that records which calls were made.
#[derive(Default)]
struct FakeSource {
    calls: Vec<String>,
    last: Option<QueryInfo>,
    quota: i64,
}

impl FakeSource {
    fn with_quota(quota: i64) -> Self {
        Self {
            quota,
            ..Self::default()
        }
    }

    fn record(&mut self, query_type: QueryType, query: String, result: String) {
        let now = Local::now();
        self.last = Some(QueryInfo {
            query_type,
            query,
            query_time: now,
            result,
            result_time: now,
            elapsed: 7,
            quota: Some(self.quota),
        });
    }
}

#[async_trait]
impl RandomSource for FakeSource {
    async fn get_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.calls.push(format!("bytes({count})"));
        let values: Vec<u8> = (0..count).map(|i| (i * 3) as u8).collect();
        self.record(QueryType::Bytes, format!("bytes?n={count}"), String::new());
        Ok(values)
    }

    async fn get_floats(&mut self, count: usize, decimals: u32) -> Result<Vec<f64>> {
        self.calls.push(format!("floats({count},{decimals})"));
        self.record(QueryType::DecimalFractions, "fractions".into(), String::new());
        Ok(vec![0.5; count])
    }

    async fn get_integers(&mut self, count: usize, range: Option<(i64, i64)>) -> Result<Vec<i64>> {
        self.calls.push(format!("integers({count},{range:?})"));
        let (min, _) = range.unwrap_or((-1_000_000_000, 1_000_000_000));
        self.record(QueryType::Integers, format!("integers?min={min}"), String::new());
        Ok(vec![min; count])
    }

    async fn get_passwords(&mut self, count: usize, length: usize) -> Result<Vec<String>> {
        self.calls.push(format!("passwords({count},{length})"));
        self.record(QueryType::Passwords, "passwords".into(), String::new());
        Ok(vec!["x".repeat(length); count])
    }

    async fn get_quota(&mut self) -> Result<i64> {
        self.calls.push("quota".to_string());
        Ok(self.quota)
    }

    async fn get_sequence(&mut self, min: i64, max: i64) -> Result<Vec<i64>> {
        self.calls.push(format!("sequence({min},{max})"));
        if min > max {
            return Err(RandomOrgError::InvalidArgument("min > max".into()));
        }
        self.record(QueryType::Sequences, "sequences".into(), String::new());
        Ok((min..=max).rev().collect())
    }

    async fn get_strings(
        &mut self,
        count: usize,
        length: usize,
        charset: StringCharset,
    ) -> Result<Vec<String>> {
        self.calls.push(format!("strings({count},{length},{charset:?})"));
        let c = match charset {
            StringCharset::Digits => '1',
            StringCharset::Lower => 'a',
            StringCharset::Upper => 'A',
            StringCharset::Alphanumeric => 'z',
        };
        self.record(QueryType::Strings, "strings".into(), String::new());
        Ok(vec![c.to_string().repeat(length); count])
    }

    fn query_info(&self) -> Option<&QueryInfo> {
        self.last.as_ref()
    }
}

async fn run_text(command: Commands, source: &mut FakeSource) -> String {
    let mut reporter = Reporter::new(Vec::new(), false);
    execute(&command, source, &mut reporter).await.unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

/// **Test: integers runs a ranged query, then an unranged one, each with statistics.**
#[tokio::test]
async fn integers_runs_two_queries() {
    let mut source = FakeSource::with_quota(1000);
    let out = run_text(
        Commands::Integers {
            count: 3,
            min: 1,
            max: 100,
        },
        &mut source,
    )
    .await;

    assert_eq!(
        source.calls,
        vec!["integers(3,Some((1, 100)))", "integers(3,None)"]
    );
    assert!(out.starts_with("Getting 3 random integer values between 1 and 100 :\n\t1, 1, 1\n"));
    assert!(out.contains("Getting 3 random integer values without range limits :\n"));
    assert_eq!(out.matches("Query statistics :").count(), 2);
    assert!(out.contains("\tQuota (in bits) : 1000\n"));
}

/// **Test: strings without --charset runs every character class in order.**
#[tokio::test]
async fn strings_runs_all_charsets() {
    let mut source = FakeSource::default();
    let out = run_text(
        Commands::Strings {
            count: 2,
            length: 4,
            charset: None,
        },
        &mut source,
    )
    .await;

    assert_eq!(
        source.calls,
        vec![
            "strings(2,4,Digits)",
            "strings(2,4,Lower)",
            "strings(2,4,Upper)",
            "strings(2,4,Alphanumeric)"
        ]
    );
    assert!(out.contains("1) Getting 2 random strings of length 4 (digits only) :\n\t1111, 1111\n"));
    assert!(out.contains("\n\n4) Getting 2 random strings of length 4 (alphanumeric characters) :\n"));
}

/// **Test: strings with --charset runs only the selected class.**
#[tokio::test]
async fn strings_with_charset_runs_once() {
    let mut source = FakeSource::default();
    let out = run_text(
        Commands::Strings {
            count: 1,
            length: 3,
            charset: Some(Charset::Upper),
        },
        &mut source,
    )
    .await;

    assert_eq!(source.calls, vec!["strings(1,3,Upper)"]);
    assert!(out.starts_with("1) Getting 1 random strings of length 3 (uppercase letters only) :\n\tAAA\n"));
}

/// **Test: quota prints a single line and no statistics.**
#[tokio::test]
async fn quota_prints_single_line() {
    let mut source = FakeSource::with_quota(-250);
    let out = run_text(Commands::Quota, &mut source).await;
    assert_eq!(out, "Your current quota in bits is : -250\n");
}

/// **Test: bytes, floats, passwords and sequence headings.**
#[tokio::test]
async fn single_query_commands() {
    let mut source = FakeSource::default();

    let out = run_text(Commands::Bytes { count: 3 }, &mut source).await;
    assert!(out.starts_with("Getting 3 random bytes :\n\t0, 3, 6\n"));

    let out = run_text(
        Commands::Floats {
            count: 2,
            decimals: 3,
        },
        &mut source,
    )
    .await;
    assert!(out.starts_with("Getting 2 random float values with 3 decimals :\n\t0.5, 0.5\n"));

    let out = run_text(
        Commands::Passwords {
            count: 1,
            length: 6,
        },
        &mut source,
    )
    .await;
    assert!(out.starts_with("Getting 1 random passwords of length 6 :\n\txxxxxx\n"));

    let out = run_text(Commands::Sequence { min: 1, max: 3 }, &mut source).await;
    assert!(out.starts_with(
        "Getting a random sequence of all integer values between 1 and 3 :\n\t3, 2, 1\n"
    ));
    assert!(out.contains("\tType            : sequences\n"));
}

/// **Test: source errors propagate with context.**
#[tokio::test]
async fn source_error_propagates() {
    let mut source = FakeSource::default();
    let mut reporter = Reporter::new(Vec::new(), false);
    let err = execute(&Commands::Sequence { min: 5, max: 1 }, &mut source, &mut reporter)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Fetch random sequence"));
    assert!(err.root_cause().to_string().contains("min > max"));
    assert!(reporter.into_inner().is_empty());
}

/// **Test: JSON mode writes one object per query.**
#[tokio::test]
async fn json_mode_integers() {
    let mut source = FakeSource::with_quota(5);
    let mut reporter = Reporter::new(Vec::new(), true);
    execute(
        &Commands::Integers {
            count: 2,
            min: 1,
            max: 6,
        },
        &mut source,
        &mut reporter,
    )
    .await
    .unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    let objects: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["values"], serde_json::json!([1, 1]));
    assert_eq!(objects[1]["query_info"]["query"], "integers?min=-1000000000");
    assert_eq!(objects[1]["query_info"]["quota"], 5);
}
