// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Authentication configuration for the REST client
//!
//! Token acquisition (device flows, keychains) is out of scope here; the
//! client only consumes a token that is already available, normally via the
//! `CODE_HARBOR_TOKEN` environment variable.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use thiserror::Error;

/// Environment variable holding the service bearer token
pub const TOKEN_ENV_VAR: &str = "CODE_HARBOR_TOKEN";

/// Errors building authentication headers
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid bearer token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    bearer_token: Option<String>,
}

impl AuthConfig {
    /// Authenticate with an explicit bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
        }
    }

    /// Read the bearer token from the environment, if present
    pub fn from_env() -> Self {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => {
                tracing::debug!("using bearer token from {}", TOKEN_ENV_VAR);
                Self::bearer(token)
            }
            _ => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Build the request headers for this configuration
    ///
    /// The authorization value is marked sensitive so it never shows up in
    /// debug output of the request.
    pub fn headers(&self) -> Result<HeaderMap, AuthError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.bearer_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unauthenticated() {
        let auth = AuthConfig::default();
        assert!(!auth.is_authenticated());
        assert!(auth.headers().unwrap().is_empty());
    }

    #[test]
    fn test_bearer_header_is_sensitive() {
        let auth = AuthConfig::bearer("tok-123");
        let headers = auth.headers().unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn test_control_characters_rejected() {
        let auth = AuthConfig::bearer("tok\n123");
        assert!(auth.headers().is_err());
    }
}
