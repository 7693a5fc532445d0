//! Token cookie storage and claim decoding.
//!
//! The claims decoded here are a UI hint only: the signature is never
//! verified and nothing in this module is an authorization boundary. All
//! authorization is enforced by the server, which revalidates the bearer
//! token on every request.

use base64::Engine;
use hbnb_api::TOKEN_COOKIE_NAME;
use serde::Deserialize;
use wasm_bindgen::JsCast;

const COOKIE_MAX_AGE_SECONDS: u32 = 24 * 60 * 60;

/// Claims carried in the token payload, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// The raw bearer token together with whatever claims could be decoded
/// from it. A token with no decodable claims is still sent to the server,
/// it just unlocks no admin/owner affordances in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub raw: String,
    pub claims: Option<Claims>,
}

impl SessionToken {
    pub fn new(raw: String) -> Self {
        let claims = decode_claims(&raw);
        Self { raw, claims }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.claims.as_ref()?.sub.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.claims.as_ref().is_some_and(|c| c.is_admin)
    }
}

/// Reads the token cookie, if any.
pub fn load() -> Option<SessionToken> {
    let cookies = html_document().cookie().ok()?;
    cookie_value(&cookies, TOKEN_COOKIE_NAME).map(SessionToken::new)
}

/// Persists the token as a cookie for 24 hours.
pub fn store(raw: &str) {
    set_cookie(&format!(
        "{TOKEN_COOKIE_NAME}={raw}; path=/; max-age={COOKIE_MAX_AGE_SECONDS}; SameSite=Lax"
    ));
}

/// Expires the token cookie immediately.
pub fn clear() {
    set_cookie(&format!(
        "{TOKEN_COOKIE_NAME}=; path=/; max-age=0; SameSite=Lax"
    ));
}

fn html_document() -> web_sys::HtmlDocument {
    leptos::prelude::document().unchecked_into()
}

fn set_cookie(cookie: &str) {
    if let Err(err) = html_document().set_cookie(cookie) {
        tracing::error!("Failed to write cookie: {err:?}");
    }
}

/// Finds the value for `name` in a `document.cookie` string. Matches the
/// name exactly, so e.g. a `mytoken` cookie never shadows `token`.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Decodes the claims from the payload segment of a JWT. Returns `None` on
/// any kind of malformed input rather than erroring, since a bad token only
/// means the UI stays in its least-privileged state.
fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode("signature")
        )
    }

    #[test]
    fn finds_cookie_by_exact_name() {
        assert_eq!(
            cookie_value("token=abc; other=1", "token").as_deref(),
            Some("abc")
        );
        assert_eq!(
            cookie_value("other=1; token=abc", "token").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn prefixed_name_does_not_match() {
        assert_eq!(cookie_value("mytoken=abc; x=1", "token"), None);
        assert_eq!(
            cookie_value("mytoken=abc; token=real", "token").as_deref(),
            Some("real")
        );
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(cookie_value("", "token"), None);
        assert_eq!(cookie_value("a=1; b=2", "token"), None);
    }

    #[test]
    fn empty_value_is_found() {
        assert_eq!(cookie_value("token=; a=1", "token").as_deref(), Some(""));
    }

    #[test]
    fn decodes_subject_and_admin_flag() {
        let token = token_with_payload(r#"{"sub":"user-1","is_admin":true,"exp":1}"#);
        let claims = decode_claims(&token).expect("failed to decode claims");
        assert_eq!(claims.sub.as_deref(), Some("user-1"));
        assert!(claims.is_admin);
    }

    #[test]
    fn missing_admin_claim_defaults_to_false() {
        let token = token_with_payload(r#"{"sub":"user-1"}"#);
        let claims = decode_claims(&token).expect("failed to decode claims");
        assert!(!claims.is_admin);
    }

    #[test]
    fn malformed_token_has_no_claims() {
        assert_eq!(decode_claims(""), None);
        assert_eq!(decode_claims("garbage"), None);
        assert_eq!(decode_claims("a.%%%.c"), None);
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert_eq!(decode_claims(&not_json), None);
    }

    #[test]
    fn session_token_without_subject_has_no_user_id() {
        let token = SessionToken::new(token_with_payload(r#"{"is_admin":true}"#));
        assert_eq!(token.user_id(), None);
        assert!(token.is_admin());

        let undecodable = SessionToken::new("garbage".to_string());
        assert_eq!(undecodable.user_id(), None);
        assert!(!undecodable.is_admin());
    }
}
