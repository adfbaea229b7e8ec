//! One-shot flash messages
//!
//! Messages that must survive a redirect travel in the `fyyur_flash`
//! cookie as `base64url(json) "." hex(hmac_sha256(secret, payload))`. The
//! middleware verifies the cookie, exposes its messages to handlers through
//! the [`Flashes`] extractor and clears the cookie once a page has been
//! rendered.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use hmac::{digest::InvalidLength, Hmac, Mac};
use sha2::Sha256;
use std::convert::Infallible;
use thiserror::Error;
use tracing::{debug, warn};

use crate::AppState;

/// Cookie carrying pending messages
pub const FLASH_COOKIE: &str = "fyyur_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

impl FlashLevel {
    /// CSS class suffix for the alert box
    pub fn css(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Error => "danger",
        }
    }
}

/// A message shown once at the top of the next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

/// Messages carried in by the request's flash cookie
///
/// Empty when there was no cookie or it failed verification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashes(pub Vec<Flash>);

impl Flashes {
    /// Incoming messages followed by `extra`
    pub fn with(mut self, extra: Flash) -> Vec<Flash> {
        self.0.push(extra);
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flashes
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Flashes>().cloned().unwrap_or_default())
    }
}

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error)]
pub enum FlashError {
    #[error("Failed to serialize flash messages: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid signing key: {0}")]
    Key(#[from] InvalidLength),
}

fn mac(secret: &str, payload: &str) -> Result<HmacSha256, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(payload.as_bytes());
    Ok(mac)
}

/// Signed cookie value for `flashes`
pub fn encode(secret: &str, flashes: &[Flash]) -> Result<String, FlashError> {
    let json = serde_json::to_vec(flashes)?;
    let payload = URL_SAFE_NO_PAD.encode(json);
    let sig = hex::encode(mac(secret, &payload)?.finalize().into_bytes());
    Ok(format!("{}.{}", payload, sig))
}

/// Verify and decode a cookie value; `None` when tampered or malformed
pub fn decode(secret: &str, value: &str) -> Option<Vec<Flash>> {
    let (payload, sig) = value.rsplit_once('.')?;
    let sig = hex::decode(sig).ok()?;
    mac(secret, payload).ok()?.verify_slice(&sig).ok()?;
    let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&json).ok()
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

fn sets_flash_cookie(response: &Response) -> bool {
    let prefix = format!("{}=", FLASH_COOKIE);
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .any(|h| h.starts_with(&prefix))
}

fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("fyyur_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// 303 redirect to `location` carrying `flashes` to the next page
pub fn redirect_with_flash(secret: &str, location: &str, flashes: &[Flash]) -> Response {
    let mut response = Redirect::to(location).into_response();

    let cookie = encode(secret, flashes)
        .map(|value| format!("{}={}; Path=/; HttpOnly; SameSite=Lax", FLASH_COOKIE, value));
    match cookie.as_deref().map(HeaderValue::from_str) {
        Ok(Ok(header)) => {
            response.headers_mut().append(SET_COOKIE, header);
        }
        Ok(Err(e)) => warn!("Flash cookie is not a valid header value: {}", e),
        Err(e) => warn!("Failed to encode flash messages: {}", e),
    }

    response
}

/// Decode the flash cookie into request extensions and clear it after use
///
/// The cookie is left alone on redirects so the messages reach the page
/// the client lands on.
pub async fn flash_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let raw = cookie_value(request.headers(), FLASH_COOKIE);
    let had_cookie = raw.is_some();

    let flashes = match raw {
        Some(raw) => decode(&state.config.secret_key, &raw).unwrap_or_else(|| {
            warn!("Ignoring flash cookie that failed verification");
            Vec::new()
        }),
        None => Vec::new(),
    };
    if !flashes.is_empty() {
        debug!("Request carries {} flash message(s)", flashes.len());
    }
    request.extensions_mut().insert(Flashes(flashes));

    let mut response = next.run(request).await;

    if had_cookie && !response.status().is_redirection() && !sets_flash_cookie(&response) {
        response.headers_mut().append(SET_COOKIE, clear_cookie());
    }
    response
}
