//! Response decoding.
//!
//! The admin API answers in three shapes: JSON for listings and status
//! objects, bare text for versions and similar values, and a short HTML
//! status line for most mutations. Each endpoint declares which one it
//! expects through [`ResponseShape`].
//!
//! Checks run in a fixed order:
//!
//! 1. a JSON body with `"status": "invalid"` becomes [`MiabError::Api`],
//!    whatever the status code;
//! 2. any other non-2xx response becomes [`MiabError::Http`];
//! 3. the body is decoded according to the expected shape.

use mailinabox_core::{MiabError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::transport::RawResponse;

/// Status tag marking a logical failure
pub const INVALID_STATUS: &str = "invalid";

/// Body shape an endpoint responds with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    /// Structured JSON
    Json,
    /// Bare text; trailing whitespace is dropped
    PlainText,
    /// A human readable line, possibly wrapped in minimal markup
    HtmlStatusLine,
}

/// Successfully decoded body
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Parsed JSON document
    Json(Value),
    /// Cleaned up text
    Text(String),
}

impl Decoded {
    /// Deserialize a JSON body into `T`
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Json(value) => {
                T::deserialize(&value).map_err(|e| MiabError::decode(e, &value.to_string()))
            }
            Self::Text(text) => Err(MiabError::decode("expected a JSON body", &text)),
        }
    }

    /// Take the body as text
    ///
    /// A JSON string is unwrapped, any other JSON value is rendered back
    /// to its compact text form.
    pub fn into_text(self) -> Result<String> {
        match self {
            Self::Text(text) | Self::Json(Value::String(text)) => Ok(text),
            Self::Json(value) => Ok(value.to_string()),
        }
    }
}

/// Decode a raw response according to the expected shape
pub fn decode(response: &RawResponse, shape: ResponseShape) -> Result<Decoded> {
    let text = std::str::from_utf8(&response.body);

    if let Some(err) = text.ok().and_then(sentinel) {
        warn!(status = response.status, error = %err, "admin API reported a failure");
        return Err(err);
    }

    if !response.is_success() {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        warn!(status = response.status, "admin API returned an error status");
        return Err(MiabError::Http {
            code: response.status,
            body,
        });
    }

    let body = text.map_err(|e| {
        MiabError::decode(
            format!("body is not UTF-8: {e}"),
            &String::from_utf8_lossy(&response.body),
        )
    })?;

    match shape {
        ResponseShape::Json => serde_json::from_str(body).map(Decoded::Json).map_err(|e| {
            debug!(error = %e, "response is not valid JSON");
            MiabError::decode(e, body)
        }),
        ResponseShape::PlainText => Ok(Decoded::Text(body.trim_end().to_string())),
        ResponseShape::HtmlStatusLine => Ok(Decoded::Text(status_line(body))),
    }
}

/// Fields of a failure body
#[derive(Deserialize)]
struct Failure {
    status: Option<String>,
    msg: Option<String>,
    reason: Option<String>,
}

/// Detect `{"status": "invalid", "msg"|"reason": "..."}`
fn sentinel(body: &str) -> Option<MiabError> {
    if !body.trim_start().starts_with('{') {
        return None;
    }

    let failure: Failure = serde_json::from_str(body).ok()?;
    if failure.status.as_deref() != Some(INVALID_STATUS) {
        return None;
    }

    let reason = failure.msg.or(failure.reason).unwrap_or_default();
    Some(MiabError::api(INVALID_STATUS, &reason))
}

/// Extract the text of a short HTML status line
///
/// Tags are dropped (`<br>` becomes a newline), basic entities are
/// unescaped and surrounding whitespace is trimmed.
pub fn status_line(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        let opens_tag = c == '<'
            && chars
                .peek()
                .is_some_and(|n| n.is_ascii_alphabetic() || matches!(n, '/' | '!' | '?'));

        if !opens_tag {
            out.push(c);
            continue;
        }

        let mut tag = String::new();
        for t in chars.by_ref() {
            if t == '>' {
                break;
            }
            tag.push(t);
        }

        let name = tag
            .trim_start_matches('/')
            .split(|ch: char| ch.is_whitespace() || ch == '/')
            .next()
            .unwrap_or_default();
        if name.eq_ignore_ascii_case("br") {
            out.push('\n');
        }
    }

    unescape(&out).trim().to_string()
}

fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
