// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Core API types for the session endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiContractError;

/// Lifecycle state of a remote development session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Provisioning,
    Available,
    Unavailable,
    Stopped,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Provisioning => write!(f, "provisioning"),
            SessionStatus::Available => write!(f, "available"),
            SessionStatus::Unavailable => write!(f, "unavailable"),
            SessionStatus::Stopped => write!(f, "stopped"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = ApiContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provisioning" => Ok(SessionStatus::Provisioning),
            "available" => Ok(SessionStatus::Available),
            "unavailable" => Ok(SessionStatus::Unavailable),
            "stopped" => Ok(SessionStatus::Stopped),
            other => Err(ApiContractError::InvalidSessionStatus(other.to_string())),
        }
    }
}

/// Session information
///
/// A session is addressable by its unique `name`; `web_url` is the browser
/// entry point the service assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// Unique, user-addressable session name
    pub name: String,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Repository the session was created from, as `owner/name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub status: SessionStatus,
    /// Browser entry point for the session. Kept as an opaque string; it is
    /// only parsed at the one site that rewrites its query string.
    #[serde(rename = "webUrl")]
    pub web_url: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "lastUsedAt", skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

/// Session list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub items: Vec<Session>,
    #[serde(rename = "nextPage", skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    pub total: Option<u32>,
}

/// Selection criteria for resolving a session
///
/// The filter is opaque to callers of the lookup collaborator: its fields are
/// passed through to the service as query parameters. Combination rules live
/// in [`crate::validation::validate_session_filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SessionFilter {
    /// Exact session name
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Repository as `owner/name`
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Repository owner
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl SessionFilter {
    /// Filter that matches a single session by its unique name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.repository.is_none() && self.owner.is_none()
    }
}

/// Problem+JSON error response format as per RFC 7807
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub detail: String,
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty", default)]
    pub errors: std::collections::HashMap<String, Vec<String>>,
}
