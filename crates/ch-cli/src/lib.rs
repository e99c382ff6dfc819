// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use ch_logging::CliLoggingArgs;
use clap::Subcommand;

pub mod session;

pub use clap::Parser;

#[derive(clap::Parser)]
#[command(
    name = "ch",
    about = "code-harbor CLI",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Base URL of the code-harbor service
    #[arg(
        long,
        env = "CH_SERVER_URL",
        default_value = "https://api.codeharbor.dev",
        global = true
    )]
    pub server_url: String,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Work with remote development sessions
    Session {
        #[command(subcommand)]
        subcommand: session::SessionCommands,
    },
}
