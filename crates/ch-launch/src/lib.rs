// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! LaunchTarget resolver
//!
//! Resolves a remote development session via a lookup collaborator and
//! opens it in Visual Studio Code, either through the native deep-link
//! scheme or the web interface. The CLI binds flags to [`VsCodeLaunch`] and
//! calls [`open_in_vscode`]; everything else stays behind the
//! `SessionLookup` and [`UrlOpener`] seams.

pub mod opener;
pub mod vscode;

pub use opener::{SystemOpener, UrlOpener};
pub use vscode::{destination_url, VsCodeLaunch};

use ch_client_api::{SessionLookup, SessionLookupError};
use ch_rest_api_contract::SessionFilter;
use thiserror::Error;

/// Errors from resolving and opening a session
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Resolution failures pass through unchanged
    #[error(transparent)]
    Lookup(#[from] SessionLookupError),

    /// The session's stored web URL could not be parsed
    #[error(transparent)]
    InvalidWebUrl(#[from] url::ParseError),

    /// The OS-level open call failed
    #[error("error opening Visual Studio Code")]
    Open(#[source] std::io::Error),
}

/// Resolve `filter` to exactly one session and open it in Visual Studio Code
///
/// Returns the destination URL that was opened. A single linear sequence
/// with no retries: the first failure aborts and surfaces to the caller, and
/// the opener is never invoked unless a destination was computed.
pub async fn open_in_vscode<L, O>(
    lookup: &L,
    opener: &O,
    filter: &SessionFilter,
    launch: VsCodeLaunch,
) -> Result<String, LaunchError>
where
    L: SessionLookup + ?Sized,
    O: UrlOpener + ?Sized,
{
    let session = lookup.resolve_session(filter).await?;
    let url = vscode::destination_url(&session, launch)?;
    tracing::debug!(session = %session.name, url = %url, "opening Visual Studio Code");
    opener.open(&url).map_err(LaunchError::Open)?;
    Ok(url)
}
