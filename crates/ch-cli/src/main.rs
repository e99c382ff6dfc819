// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use ch_cli::{Cli, Commands, Parser};

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        server_url,
        logging,
        command,
    } = Cli::parse();

    logging.init("ch-cli")?;

    match command {
        Commands::Session { subcommand } => subcommand.run(&server_url).await,
    }
}
