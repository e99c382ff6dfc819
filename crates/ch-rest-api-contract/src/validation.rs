// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Validation helpers for API contract types

use crate::error::ApiContractError;
use crate::types::*;
use validator::Validate;

/// Validate a session filter before it is handed to the lookup collaborator
///
/// A session name already identifies exactly one session, so combining it
/// with repository filters is rejected up front rather than producing a
/// lookup that can never narrow further.
pub fn validate_session_filter(filter: &SessionFilter) -> Result<(), ApiContractError> {
    filter.validate()?;

    if filter.name.is_some() {
        if filter.repository.is_some() {
            return Err(ApiContractError::ConflictingFilters(
                "a session name cannot be combined with a repository filter".to_string(),
            ));
        }
        if filter.owner.is_some() {
            return Err(ApiContractError::ConflictingFilters(
                "a session name cannot be combined with a repository owner filter".to_string(),
            ));
        }
    }

    if let Some(repository) = &filter.repository {
        validate_repository_name(repository)?;
    }

    Ok(())
}

/// Validate that a repository filter is in `owner/name` form
pub fn validate_repository_name(repository: &str) -> Result<(), ApiContractError> {
    let mut parts = repository.splitn(2, '/');
    match (parts.next(), parts.next()) {
        (Some(owner), Some(name))
            if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
        {
            Ok(())
        }
        _ => Err(ApiContractError::InvalidRepositoryFilter(format!(
            "expected owner/name, got {}",
            repository
        ))),
    }
}

/// Validate URL format
pub fn validate_url(url_str: &str) -> Result<(), ApiContractError> {
    url::Url::parse(url_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_session_filter_by_name() {
        let filter = SessionFilter::by_name("fuzzy-disco-abc123");
        assert!(validate_session_filter(&filter).is_ok());
    }

    #[test]
    fn test_validate_session_filter_repository_only() {
        let filter = SessionFilter {
            repository: Some("acme/storefront".to_string()),
            ..Default::default()
        };
        assert!(validate_session_filter(&filter).is_ok());
    }

    #[test]
    fn test_validate_session_filter_name_and_repository_conflict() {
        let filter = SessionFilter {
            name: Some("fuzzy-disco-abc123".to_string()),
            repository: Some("acme/storefront".to_string()),
            ..Default::default()
        };
        let err = validate_session_filter(&filter).unwrap_err();
        assert!(matches!(err, ApiContractError::ConflictingFilters(_)));
    }

    #[test]
    fn test_validate_session_filter_name_and_owner_conflict() {
        let filter = SessionFilter {
            name: Some("fuzzy-disco-abc123".to_string()),
            owner: Some("acme".to_string()),
            ..Default::default()
        };
        let err = validate_session_filter(&filter).unwrap_err();
        assert!(matches!(err, ApiContractError::ConflictingFilters(_)));
    }

    #[test]
    fn test_validate_session_filter_empty_name_rejected() {
        let filter = SessionFilter {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_session_filter(&filter).is_err());
    }

    #[test]
    fn test_validate_repository_name_valid() {
        assert!(validate_repository_name("acme/storefront").is_ok());
    }

    #[test]
    fn test_validate_repository_name_missing_owner() {
        assert!(validate_repository_name("/storefront").is_err());
        assert!(validate_repository_name("storefront").is_err());
        assert!(validate_repository_name("acme/").is_err());
        assert!(validate_repository_name("acme/store/front").is_err());
    }

    #[test]
    fn test_session_deserializes_wire_form() {
        let json = r#"{
            "id": "01J9ZD3W9Q",
            "name": "fuzzy-disco-abc123",
            "displayName": "storefront checkout fix",
            "repository": "acme/storefront",
            "status": "available",
            "webUrl": "https://fuzzy-disco-abc123.sessions.codeharbor.dev?tier=standard"
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.name, "fuzzy-disco-abc123");
        assert_eq!(session.status, SessionStatus::Available);
        assert_eq!(session.display_name.as_deref(), Some("storefront checkout fix"));
        assert!(session.created_at.is_none());
    }

    #[test]
    fn test_session_status_from_str() {
        assert_eq!(
            "available".parse::<SessionStatus>().unwrap(),
            SessionStatus::Available
        );
        assert!(matches!(
            "sleeping".parse::<SessionStatus>().unwrap_err(),
            ApiContractError::InvalidSessionStatus(_)
        ));
    }

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails {
            problem_type: "https://docs.codeharbor.dev/errors/not-found".to_string(),
            title: "Session not found".to_string(),
            status: Some(404),
            detail: "no session named fuzzy-disco-abc123".to_string(),
            errors: std::collections::HashMap::new(),
        };

        let json = serde_json::to_string(&problem).unwrap();
        let deserialized: ProblemDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(problem, deserialized);
    }
}
