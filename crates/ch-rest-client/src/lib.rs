// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST API client for the code-harbor service
//!
//! This crate provides the HTTP client used to resolve remote development
//! sessions. It is deliberately small so that third-party software can talk
//! to the session API without additional baggage; it implements the
//! `SessionLookup` trait for compatibility with the rest of the workspace.

pub mod auth;
pub mod client;
pub mod error;

pub use auth::*;
pub use client::*;
pub use error::*;

use async_trait::async_trait;
use ch_client_api::{SessionLookup, SessionLookupError, SessionLookupResult};
use ch_rest_api_contract::{Session, SessionFilter};
use reqwest::StatusCode;

#[async_trait]
impl SessionLookup for client::RestClient {
    async fn resolve_session(&self, filter: &SessionFilter) -> SessionLookupResult<Session> {
        match RestClient::resolve_session(self, filter).await {
            Ok(session) => Ok(session),
            Err(RestClientError::NoMatch) => Err(SessionLookupError::NotFound),
            Err(RestClientError::Ambiguous { count }) => {
                Err(SessionLookupError::Ambiguous { count })
            }
            Err(RestClientError::Auth(message)) => Err(SessionLookupError::Auth(message)),
            Err(RestClientError::ServerError { status, details })
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                Err(SessionLookupError::Auth(details.detail))
            }
            Err(other) => Err(SessionLookupError::Server(other.to_string())),
        }
    }
}
