// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Destination URL construction for Visual Studio Code

use ch_rest_api_contract::Session;
use url::Url;

use crate::LaunchError;

/// Fixed authority handled by the Codespaces extension on the client side
const CONNECT_AUTHORITY: &str = "github.codespaces/connect";

/// How to open a resolved session
#[derive(Debug, Clone, Copy, Default)]
pub struct VsCodeLaunch {
    /// Use the Insiders release channel
    pub insiders: bool,
    /// Open the web interface instead of the native application
    pub web: bool,
}

/// Compute the destination URL for a session
///
/// Native mode builds a custom-scheme deep link carrying the session name.
/// Web mode reuses the URL the service stored for the session, untouched
/// unless the Insiders channel has to be spliced into its query string —
/// which is the only place the stored URL is ever parsed.
pub fn destination_url(session: &Session, launch: VsCodeLaunch) -> Result<String, LaunchError> {
    if !launch.web {
        return Ok(protocol_url(&session.name, launch.insiders));
    }

    if !launch.insiders {
        return Ok(session.web_url.clone());
    }

    let mut url = Url::parse(&session.web_url)?;
    set_channel(&mut url, "insiders");
    Ok(url.into())
}

/// Deep link for the native VS Code application
fn protocol_url(session_name: &str, insiders: bool) -> String {
    let scheme = if insiders { "vscode-insiders" } else { "vscode" };
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", session_name)
        .finish();
    format!("{}://{}?{}", scheme, CONNECT_AUTHORITY, query)
}

/// Set the `vscodeChannel` query parameter, overwriting any existing value
fn set_channel(url: &mut Url, channel: &str) {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "vscodeChannel")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (key, value) in &retained {
        pairs.append_pair(key, value);
    }
    pairs.append_pair("vscodeChannel", channel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ch_rest_api_contract::SessionStatus;

    fn session(name: &str, web_url: &str) -> Session {
        Session {
            id: "01J9ZD3W9Q".to_string(),
            name: name.to_string(),
            display_name: None,
            repository: Some("acme/storefront".to_string()),
            status: SessionStatus::Available,
            web_url: web_url.to_string(),
            created_at: None,
            last_used_at: None,
        }
    }

    fn native(insiders: bool) -> VsCodeLaunch {
        VsCodeLaunch {
            insiders,
            web: false,
        }
    }

    fn web(insiders: bool) -> VsCodeLaunch {
        VsCodeLaunch {
            insiders,
            web: true,
        }
    }

    #[test]
    fn test_native_scheme_selection() {
        let session = session("fuzzy-disco", "https://example.com/cs");

        let stable = destination_url(&session, native(false)).unwrap();
        assert!(stable.starts_with("vscode://github.codespaces/connect?"));

        let insiders = destination_url(&session, native(true)).unwrap();
        assert!(insiders.starts_with("vscode-insiders://github.codespaces/connect?"));
    }

    #[test]
    fn test_native_url_for_name_with_space() {
        let session = session("my codespace", "https://example.com/cs");
        let url = destination_url(&session, native(false)).unwrap();
        assert_eq!(url, "vscode://github.codespaces/connect?name=my+codespace");
    }

    #[test]
    fn test_native_name_round_trips_through_encoding() {
        let names = [
            "my codespace",
            "a&b=c",
            "feature/checkout",
            "caf\u{e9}-\u{2615}",
            "50%+done?",
        ];

        for name in names {
            let session = session(name, "https://example.com/cs");
            let raw = destination_url(&session, native(false)).unwrap();

            let parsed = Url::parse(&raw).unwrap();
            let decoded: Vec<(String, String)> = parsed
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            assert_eq!(decoded, vec![("name".to_string(), name.to_string())]);
        }
    }

    #[test]
    fn test_web_url_passed_through_unmodified() {
        let stored = "https://example.com/cs?foo=bar&baz=%20qux";
        let session = session("fuzzy-disco", stored);
        let url = destination_url(&session, web(false)).unwrap();
        assert_eq!(url, stored);
    }

    #[test]
    fn test_web_url_not_parsed_when_channel_unchanged() {
        // The stored URL is opaque unless the channel has to be rewritten,
        // so a malformed URL is only an error in insiders mode.
        let session = session("fuzzy-disco", "not a url");
        assert_eq!(destination_url(&session, web(false)).unwrap(), "not a url");
    }

    #[test]
    fn test_web_insiders_appends_channel() {
        let session = session("fuzzy-disco", "https://example.com/cs?foo=bar");
        let url = destination_url(&session, web(true)).unwrap();
        assert_eq!(url, "https://example.com/cs?foo=bar&vscodeChannel=insiders");
    }

    #[test]
    fn test_web_insiders_sets_channel_on_bare_url() {
        let session = session("fuzzy-disco", "https://example.com/cs");
        let url = destination_url(&session, web(true)).unwrap();
        assert_eq!(url, "https://example.com/cs?vscodeChannel=insiders");
    }

    #[test]
    fn test_web_insiders_overwrites_existing_channel() {
        let session = session(
            "fuzzy-disco",
            "https://example.com/cs?vscodeChannel=stable&foo=bar",
        );
        let url = destination_url(&session, web(true)).unwrap();

        assert_eq!(url.matches("vscodeChannel").count(), 1);
        assert_eq!(url, "https://example.com/cs?foo=bar&vscodeChannel=insiders");
    }

    #[test]
    fn test_web_insiders_rejects_malformed_stored_url() {
        let session = session("fuzzy-disco", "not a url");
        let err = destination_url(&session, web(true)).unwrap_err();
        assert!(matches!(err, LaunchError::InvalidWebUrl(_)));
    }
}
