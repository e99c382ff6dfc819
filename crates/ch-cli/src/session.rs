// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Session subcommands

use anyhow::{Context, Result};
use ch_launch::{open_in_vscode, SystemOpener, VsCodeLaunch};
use ch_rest_api_contract::{validation, SessionFilter};
use ch_rest_client::{AuthConfig, RestClient};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum SessionCommands {
    Code(CodeArgs),
}

impl SessionCommands {
    pub async fn run(self, server_url: &str) -> Result<()> {
        match self {
            SessionCommands::Code(args) => args.run(server_url).await,
        }
    }
}

/// Filter flags shared by commands that address a single session
#[derive(Args, Clone, Debug, Default)]
pub struct SessionFilterArgs {
    /// Name of the session
    #[arg(short = 's', long = "session")]
    pub session: Option<String>,

    /// Filter by repository, as owner/name
    #[arg(short = 'R', long = "repo")]
    pub repo: Option<String>,

    /// Filter by repository owner
    #[arg(long = "repo-owner")]
    pub repo_owner: Option<String>,
}

impl From<SessionFilterArgs> for SessionFilter {
    fn from(args: SessionFilterArgs) -> Self {
        SessionFilter {
            name: args.session,
            repository: args.repo,
            owner: args.repo_owner,
        }
    }
}

/// Arguments for the `session code` command
#[derive(Args, Debug)]
#[command(about = "Open a session in Visual Studio Code")]
pub struct CodeArgs {
    #[command(flatten)]
    pub filter: SessionFilterArgs,

    /// Use the Insiders version of Visual Studio Code
    #[arg(long)]
    pub insiders: bool,

    /// Use the web version of Visual Studio Code
    #[arg(short = 'w', long)]
    pub web: bool,
}

impl CodeArgs {
    /// Run the code command
    pub async fn run(self, server_url: &str) -> Result<()> {
        let filter = SessionFilter::from(self.filter);
        // Invalid flag combinations are rejected before any lookup starts.
        validation::validate_session_filter(&filter)?;

        let client = RestClient::from_url(server_url, AuthConfig::from_env())
            .with_context(|| format!("invalid server URL: {}", server_url))?;

        let launch = VsCodeLaunch {
            insiders: self.insiders,
            web: self.web,
        };

        let url = open_in_vscode(&client, &SystemOpener, &filter, launch).await?;
        tracing::info!(url = %url, "opened Visual Studio Code");

        Ok(())
    }
}
