//! Failure classification for calls to the records API.
//!
//! Users only ever see the fixed alert for the attempted operation; the
//! classification exists for the console log.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// `fetch` itself rejected (offline, CORS, DNS).
    Network(String),
    /// The server answered outside the accepted status range.
    Status { status: u16, body: String },
    /// The body did not match the expected entity shape.
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Recover the classification from a `JsValue` produced by the client.
    pub fn from_js(value: &JsValue) -> ApiError {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        parse_message(&text)
    }
}

const NETWORK_PREFIX: &str = "network error: ";
const DECODE_PREFIX: &str = "decode error: ";

/// Inverse of `Display`. Text from anywhere else (a rejected `fetch`) is a
/// network error.
fn parse_message(text: &str) -> ApiError {
    if let Some(status) = parse_status_message(text) {
        return status;
    }
    if let Some(msg) = text.strip_prefix(NETWORK_PREFIX) {
        return ApiError::Network(msg.to_string());
    }
    if let Some(msg) = text.strip_prefix(DECODE_PREFIX) {
        return ApiError::Decode(msg.to_string());
    }
    ApiError::Network(text.to_string())
}

fn parse_status_message(text: &str) -> Option<ApiError> {
    let rest = text.strip_prefix("HTTP ")?;
    let (code, body) = rest.split_once(':').unwrap_or((rest, ""));
    let status = code.trim().parse::<u16>().ok()?;
    Some(ApiError::Status {
        status,
        body: body.trim().to_string(),
    })
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "{}{}", NETWORK_PREFIX, msg),
            ApiError::Status { status, body } if body.is_empty() => write!(f, "HTTP {}", status),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "{}{}", DECODE_PREFIX, msg),
        }
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip_for_status() {
        let err = ApiError::Status {
            status: 404,
            body: "not found".into(),
        };
        let text = err.to_string();
        assert_eq!(text, "HTTP 404: not found");
        assert_eq!(parse_status_message(&text), Some(err));
    }

    #[test]
    fn status_without_body() {
        let err = ApiError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP 500");
        assert_eq!(parse_status_message("HTTP 500"), Some(err));
    }

    #[test]
    fn non_status_text_is_not_a_status() {
        assert_eq!(parse_status_message("network error: offline"), None);
    }

    #[test]
    fn wrapped_errors_keep_their_kind() {
        let offline = ApiError::Network("offline".into());
        assert_eq!(parse_message(&offline.to_string()), offline);
        assert_eq!(offline.to_string(), "network error: offline");

        let bad_body = ApiError::Decode("expected value at line 1".into());
        assert_eq!(parse_message(&bad_body.to_string()), bad_body);

        // Raw fetch rejections carry no prefix
        assert_eq!(
            parse_message("TypeError: Failed to fetch"),
            ApiError::Network("TypeError: Failed to fetch".into())
        );
    }

    #[test]
    fn not_found_detection() {
        let err = ApiError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!ApiError::Network("x".into()).is_not_found());
    }
}
