//! One HTTP round-trip per call.
//!
//! An [`Endpoint`] describes a single API operation: its path under the
//! base URL, the HTTP method, and whether the call must be signed.
//! [`send`] performs the round-trip and hands back the decoded JSON
//! body, after [`decode_body`] has checked it for the service's error
//! envelope. There are no retries; one call is one attempt.

use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::errors::{BitstampError, Result};

/// HTTP method for an endpoint. The API uses nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Outgoing request parameters. GET encodes them as the query string,
/// POST as a form body.
pub type Params = Vec<(&'static str, String)>;

/// Descriptor for one API operation.
///
/// Paths are relative to the configured base URL and keep their
/// trailing slash; the service 301-redirects slashless paths, which
/// drops POST bodies.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: String,
    pub method: Method,
    pub private: bool,
}

impl Endpoint {
    /// Public endpoint fetched with GET.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            private: false,
        }
    }

    /// Public endpoint fetched with POST.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Post,
            private: false,
        }
    }

    /// Endpoint requiring credentials. Signed calls are always POSTs.
    pub fn signed(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Post,
            private: true,
        }
    }
}

/// Perform the round-trip for `endpoint` and decode the response body.
///
/// Parameter values are never logged; for signed calls they carry the
/// key, signature, and nonce.
pub async fn send(
    client: &Client,
    base_url: &str,
    endpoint: &Endpoint,
    params: &Params,
) -> Result<Value> {
    let url = format!("{base_url}{}", endpoint.path);
    debug!(
        "transport.send method={} url={} params={}",
        endpoint.method.as_str(),
        url,
        params.len()
    );
    let request = match endpoint.method {
        Method::Get => client.get(&url).query(params),
        Method::Post => client.post(&url).form(params),
    };
    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    debug!(
        "transport.send status={} body_len={}",
        status,
        text.len()
    );
    decode_body(status, &text)
}

/// Decode a response body, detecting the service's error envelope.
///
/// Any JSON object carrying an `error` key is a failure regardless of
/// HTTP status; its value is surfaced verbatim. The service signals
/// failure through the envelope, not the status line, so the status is
/// used only as diagnostic context when the body is not JSON at all.
pub(crate) fn decode_body(status: StatusCode, text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        BitstampError::Json(format!(
            "HTTP {status}: failed to decode response: {e}; body: {}",
            snippet(text)
        ))
    })?;
    if let Some(detail) = value.get("error") {
        return Err(BitstampError::Api {
            detail: detail.clone(),
        });
    }
    Ok(value)
}

const SNIPPET_LEN: usize = 500;

/// Leading slice of a non-JSON body for error messages, cut back to a
/// char boundary so multi-byte bodies cannot panic the error path.
fn snippet(text: &str) -> &str {
    let mut end = text.len().min(SNIPPET_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn detects_error_envelope_with_string_detail() {
        let err = decode_body(StatusCode::OK, r#"{"error": "Invalid nonce"}"#).unwrap_err();
        match err {
            BitstampError::Api { detail } => assert_eq!(detail, json!("Invalid nonce")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn detects_error_envelope_with_structured_detail() {
        let body = r#"{"error": {"amount": ["Not enough funds"]}}"#;
        let err = decode_body(StatusCode::OK, body).unwrap_err();
        match err {
            BitstampError::Api { detail } => {
                assert_eq!(detail, json!({"amount": ["Not enough funds"]}));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn detects_envelope_regardless_of_http_status() {
        let err = decode_body(StatusCode::FORBIDDEN, r#"{"error": "API key not found"}"#)
            .unwrap_err();
        assert!(matches!(err, BitstampError::Api { .. }));
    }

    #[test]
    fn object_without_error_key_passes_through() {
        let value = decode_body(StatusCode::OK, r#"{"last": "100.5"}"#).unwrap();
        assert_eq!(value, json!({"last": "100.5"}));
    }

    #[test]
    fn array_body_passes_through() {
        let value = decode_body(StatusCode::OK, r#"[{"total": "1.0"}]"#).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn non_json_body_is_a_json_error_with_status() {
        let err = decode_body(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        match err {
            BitstampError::Json(message) => {
                assert!(message.contains("502"));
                assert!(message.contains("bad gateway"));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_multibyte_body_is_truncated_on_a_char_boundary() {
        // With the leading ASCII byte, every even index after it falls
        // inside one of the two-byte characters.
        let body = format!("a{}", "é".repeat(300));
        assert!(!body.is_char_boundary(500));
        let err = decode_body(StatusCode::BAD_GATEWAY, &body).unwrap_err();
        match err {
            BitstampError::Json(message) => {
                assert!(message.contains("502"));
                assert!(message.contains('é'));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn descriptor_constructors_set_method_and_privacy() {
        let endpoint = Endpoint::signed("cancel_order/");
        assert_eq!(endpoint.method, Method::Post);
        assert!(endpoint.private);

        let endpoint = Endpoint::get("ticker/btceur/");
        assert_eq!(endpoint.method, Method::Get);
        assert!(!endpoint.private);

        let endpoint = Endpoint::post("some_public_post/");
        assert_eq!(endpoint.method, Method::Post);
        assert!(!endpoint.private);
    }
}
