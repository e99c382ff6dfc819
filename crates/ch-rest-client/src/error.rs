// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the REST client

use ch_rest_api_contract::ProblemDetails;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the code-harbor service
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("server returned {status}: {}", details.detail)]
    ServerError {
        status: StatusCode,
        details: ProblemDetails,
    },

    #[error("no session matches the given filters")]
    NoMatch,

    #[error("{count} sessions match the given filters")]
    Ambiguous { count: usize },

    #[error("unexpected response from server: {0}")]
    UnexpectedResponse(String),
}

pub type RestClientResult<T> = Result<T, RestClientError>;
