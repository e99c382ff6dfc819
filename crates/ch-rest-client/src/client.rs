// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main REST API client implementation

use ch_rest_api_contract::{Session, SessionFilter, SessionListResponse};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::AuthConfig;
use crate::error::{RestClientError, RestClientResult};

/// REST API client for the code-harbor service
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_url: Url,
    auth: AuthConfig,
}

impl RestClient {
    /// Create a new REST client
    pub fn new(base_url: Url, auth: AuthConfig) -> Self {
        let http_client = HttpClient::builder()
            .user_agent(concat!("ch-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url,
            auth,
        }
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str, auth: AuthConfig) -> RestClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self::new(base_url, auth))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the authentication config
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// List sessions with optional filtering
    pub async fn list_sessions(
        &self,
        filter: Option<&SessionFilter>,
    ) -> RestClientResult<SessionListResponse> {
        let mut url = self.base_url.join("/api/v1/sessions")?;

        if let Some(filter) = filter {
            let query_params = build_query_params(filter);
            if !query_params.is_empty() {
                url.set_query(Some(&query_params));
            }
        }

        self.get(url.as_ref()).await
    }

    /// Get a specific session by its unique name
    pub async fn get_session(&self, name: &str) -> RestClientResult<Session> {
        let mut url = self.base_url.join("/api/v1/sessions")?;
        url.path_segments_mut()
            .map_err(|_| RestClientError::UnexpectedResponse("base URL cannot be a base".to_string()))?
            .push(name);
        self.get(url.as_ref()).await
    }

    /// Resolve selection criteria to exactly one session
    ///
    /// A name filter addresses the session directly; anything else goes
    /// through the list endpoint and must match exactly one item. Zero
    /// matches is [`RestClientError::NoMatch`], more than one is
    /// [`RestClientError::Ambiguous`] — there is no tie-break.
    pub async fn resolve_session(&self, filter: &SessionFilter) -> RestClientResult<Session> {
        if let Some(name) = &filter.name {
            return match self.get_session(name).await {
                Err(RestClientError::ServerError { status, .. })
                    if status == StatusCode::NOT_FOUND =>
                {
                    Err(RestClientError::NoMatch)
                }
                other => other,
            };
        }

        let response = self.list_sessions(Some(filter)).await?;
        tracing::debug!(matches = response.items.len(), "session lookup completed");
        single_match(response.items)
    }

    // Private helper methods

    async fn get<T: DeserializeOwned>(&self, path: &str) -> RestClientResult<T> {
        self.request(Method::GET, path).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> RestClientResult<T> {
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            self.base_url.join(path)?.to_string()
        };

        let mut request = self.http_client.request(method, &url);

        // Add authentication headers
        let auth_headers = self.auth.headers().map_err(|e| RestClientError::Auth(e.to_string()))?;
        request = request.headers(auth_headers);

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> RestClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(RestClientError::from)
        } else {
            let text = response.text().await?;
            match serde_json::from_str::<ch_rest_api_contract::ProblemDetails>(&text) {
                Ok(problem) => Err(RestClientError::ServerError {
                    status,
                    details: problem,
                }),
                Err(_) => Err(RestClientError::UnexpectedResponse(text)),
            }
        }
    }
}

/// Build the query string for a session filter
fn build_query_params(filter: &SessionFilter) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    if let Some(name) = &filter.name {
        serializer.append_pair("name", name);
    }
    if let Some(repository) = &filter.repository {
        serializer.append_pair("repository", repository);
    }
    if let Some(owner) = &filter.owner {
        serializer.append_pair("owner", owner);
    }
    serializer.finish()
}

/// Enforce the exactly-one contract on a list result
fn single_match(mut items: Vec<Session>) -> RestClientResult<Session> {
    match items.len() {
        0 => Err(RestClientError::NoMatch),
        1 => Ok(items.remove(0)),
        count => Err(RestClientError::Ambiguous { count }),
    }
}
