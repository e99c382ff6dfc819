// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Session lookup trait seam
//!
//! Components that need to resolve a session (the VS Code launcher, future
//! attach/ssh commands) depend on this trait instead of a concrete client,
//! so tests and alternative transports can substitute their own
//! implementation.

use async_trait::async_trait;
use ch_rest_api_contract::{Session, SessionFilter};
use thiserror::Error;

/// Errors surfaced by a session lookup collaborator
///
/// `NotFound` and `Ambiguous` are the collaborator's exactly-one contract;
/// everything else is collapsed into the transport-shaped variants.
#[derive(Debug, Error)]
pub enum SessionLookupError {
    #[error("no session matches the given filters")]
    NotFound,

    #[error("{count} sessions match the given filters")]
    Ambiguous { count: usize },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("session lookup failed: {0}")]
    Server(String),
}

pub type SessionLookupResult<T> = Result<T, SessionLookupError>;

/// Resolves selection criteria to exactly one session
///
/// Implementations must return [`SessionLookupError::NotFound`] for zero
/// matches and [`SessionLookupError::Ambiguous`] for more than one; callers
/// never see a partial result. Cancellation is cooperative: dropping the
/// returned future abandons any in-flight request.
#[async_trait]
pub trait SessionLookup {
    async fn resolve_session(&self, filter: &SessionFilter) -> SessionLookupResult<Session>;
}
