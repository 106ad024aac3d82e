//! Verification helpers for incoming monday.com webhook requests.
//!
//! - [`challenge_response`]: answers the URL verification handshake monday
//!   sends when a webhook is created
//! - [`verify_authorization`]: validates the HS256 JWT monday places in the
//!   `Authorization` header of app webhook calls

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::webhooks::WebhookError;

/// HTTP header carrying the signed token on app webhook calls.
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Claims carried by the webhook authorization token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookClaims {
    /// The account that triggered the event.
    pub account_id: Option<i64>,
    /// The user that triggered the event.
    pub user_id: Option<i64>,
    /// The webhook URL the token was issued for.
    pub aud: Option<String>,
    /// Issued-at timestamp.
    pub iat: Option<i64>,
    /// Expiry timestamp.
    pub exp: Option<i64>,
    /// A short-lived API token scoped to the triggering user.
    pub short_lived_token: Option<String>,
}

/// Builds the response body for monday's webhook URL verification.
///
/// monday posts `{"challenge": "<value>"}` to a new webhook URL and expects the
/// same object back.
///
/// # Errors
///
/// - [`WebhookError::InvalidPayload`] if `body` is not JSON
/// - [`WebhookError::MissingChallenge`] if there is no string `challenge`
///
/// # Example
///
/// ```rust
/// use monday_api::webhooks::challenge_response;
///
/// let reply = challenge_response(br#"{"challenge":"3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P"}"#).unwrap();
/// assert_eq!(reply["challenge"], "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P");
/// ```
pub fn challenge_response(body: &[u8]) -> Result<Value, WebhookError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| WebhookError::InvalidPayload {
            reason: e.to_string(),
        })?;

    let challenge = payload
        .get("challenge")
        .and_then(Value::as_str)
        .ok_or(WebhookError::MissingChallenge)?;

    Ok(json!({ "challenge": challenge }))
}

/// Verifies the `Authorization` header of an app webhook call.
///
/// The header value may be the bare token or carry a `Bearer ` prefix. The
/// token must carry an unexpired `exp` claim. When `audience` is given, the
/// token's `aud` claim must match it.
///
/// # Errors
///
/// - [`WebhookError::MissingAuthorization`] if the header value is empty
/// - [`WebhookError::InvalidAuthorization`] if the signature or audience check
///   fails, or `exp` is missing or in the past
pub fn verify_authorization(
    header_value: &str,
    signing_secret: &str,
    audience: Option<&str>,
) -> Result<WebhookClaims, WebhookError> {
    let token = match header_value.trim() {
        "Bearer" => "",
        value => value.strip_prefix("Bearer ").unwrap_or(value).trim(),
    };

    if token.is_empty() {
        return Err(WebhookError::MissingAuthorization);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp"]);
    match audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }

    let key = DecodingKey::from_secret(signing_secret.as_bytes());
    let token_data = decode::<WebhookClaims>(token, &key, &validation).map_err(|e| {
        WebhookError::InvalidAuthorization {
            reason: e.to_string(),
        }
    })?;

    Ok(token_data.claims)
}
