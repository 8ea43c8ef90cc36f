//! The backend's uniform response wrapper.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiError, ApiResult};

/// `{ error, status, message, payload }` as sent by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub error: bool,
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub payload: T,
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            error: false,
            status: 200,
            message: "OK".to_string(),
            payload,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    error: bool,
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    payload: Value,
}

/// Turn an HTTP status and body into the payload or an [`ApiError`].
///
/// - 2xx, `error: false`: decode `payload` as `T`
/// - 2xx, `error: true`: [`ApiError::Backend`]
/// - non-2xx, JSON body: [`ApiError::Backend`] carrying the parsed body
/// - non-2xx, anything else: [`ApiError::Status`] with the raw text
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ApiResult<T> {
    if !status.is_success() {
        return Err(match serde_json::from_slice::<Value>(body) {
            Ok(parsed) => {
                let message = parsed
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
                ApiError::Backend {
                    status: status.as_u16(),
                    message,
                    body: parsed,
                }
            }
            Err(_) => ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(body).into_owned(),
            },
        });
    }

    let raw: RawEnvelope = serde_json::from_slice(body)
        .map_err(|e| ApiError::Decode(format!("response is not an envelope: {e}")))?;

    if raw.error {
        return Err(ApiError::Backend {
            status: raw.status.unwrap_or(status.as_u16()),
            message: raw.message.clone(),
            body: serde_json::json!({
                "error": true,
                "status": raw.status,
                "message": raw.message,
                "payload": raw.payload,
            }),
        });
    }

    serde_json::from_value(raw.payload)
        .map_err(|e| ApiError::Decode(format!("unexpected payload shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_payload() {
        let body = br#"{"error":false,"status":200,"message":"ok","payload":{"n":3}}"#;
        let v: Value = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(v["n"], 3);
    }

    #[test]
    fn missing_payload_decodes_as_unit() {
        let body = br#"{"error":false,"status":200,"message":"deleted"}"#;
        let _: () = decode_response(StatusCode::OK, body).unwrap();
    }

    #[test]
    fn error_flag_on_2xx_is_a_backend_error() {
        let body = br#"{"error":true,"status":409,"message":"email taken","payload":null}"#;
        let err = decode_response::<Value>(StatusCode::OK, body).unwrap_err();
        match err {
            ApiError::Backend { status, message, .. } => {
                assert_eq!(status, 409);
                assert_eq!(message, "email taken");
            }
            other => panic!("expected Backend, got {other:?}"),
        }
    }

    #[test]
    fn non_2xx_json_body_is_parsed() {
        let body = br#"{"error":true,"status":401,"message":"jwt expired"}"#;
        let err = decode_response::<Value>(StatusCode::UNAUTHORIZED, body).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "backend error (401): jwt expired");
    }

    #[test]
    fn non_2xx_garbage_body_is_raw() {
        let err = decode_response::<Value>(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>")
            .unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 502);
                assert!(body.contains("bad gateway"));
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn wrong_payload_shape_is_decode_error() {
        let body = br#"{"error":false,"status":200,"message":"ok","payload":"text"}"#;
        let err = decode_response::<Vec<u32>>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
