//! randorg CLI: fetch random bytes, fractions, integers, passwords, sequences or strings from
//! random.org and print each result with its query statistics. Config from env and optional CLI args.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use random_org_client::{init_tracing, RandomOrgClient};
use randorg_cli::{execute, load_config, Cli, Reporter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_config(cli.agent.clone())
        .context("Load client config (RANDOM_ORG_AGENT or --agent is required)")?;
    init_tracing("warn", config.log_file.as_deref())?;

    let mut client = RandomOrgClient::new(config).context("Create random.org client")?;
    let mut reporter = Reporter::new(io::stdout().lock(), cli.json);

    execute(&cli.command, &mut client, &mut reporter).await
}
