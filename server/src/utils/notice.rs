//! One-shot banners shown to the user after a write.
//!
//! A notice produced by a handler that answers directly travels in the
//! response envelope. A notice produced by a handler that redirects is queued
//! in the `flash` cookie and consumed by the next page through the [`Flash`]
//! extractor.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::warn;

const FLASH_COOKIE: &str = "flash";
const CLEAR_FLASH_COOKIE: &str = "flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    fn to_cookie(&self) -> Option<HeaderValue> {
        let encoded = serde_urlencoded::to_string(self).ok()?;
        HeaderValue::from_str(&format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE, encoded
        ))
        .ok()
    }

    fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, value)| *name == FLASH_COOKIE && !value.is_empty())
            .and_then(|(_, value)| serde_urlencoded::from_str(value).ok())
    }
}

/// The notice queued by the previous response, if any.
#[derive(Debug, Clone, Default)]
pub struct Flash(pub Option<Notice>);

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash(Notice::from_headers(&parts.headers)))
    }
}

impl Flash {
    /// Attaches a cookie removal to `response` when a notice was consumed.
    pub fn consume(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.0.is_some() {
            response
                .headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(CLEAR_FLASH_COOKIE));
        }
        response
    }
}

/// `303 See Other` to `uri`, queueing `notice` for the page it lands on.
pub fn redirect_with_notice(uri: &str, notice: Notice) -> Response {
    let mut response = Redirect::to(uri).into_response();
    match notice.to_cookie() {
        Some(cookie) => {
            response.headers_mut().insert(SET_COOKIE, cookie);
        }
        None => warn!(message = %notice.message, "Dropping notice that cannot be stored in a cookie"),
    }
    response
}
