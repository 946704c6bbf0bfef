use serde::Serialize;

use crate::error::EncodeError;

/// Message carried by the payload [`encode`] returns when serialization fails.
pub const ENCODE_FAILURE: &str = "failed to encode render output";

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
    detail: String,
}

pub fn try_encode<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes `value` as JSON. A failure is logged and replaced by a well-formed
/// `{"error": .., "detail": ..}` object, so callers always get a payload.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> String {
    match try_encode(value) {
        Ok(json) => json,
        Err(err) => {
            log::error!("{err}");
            error_payload(&err)
        }
    }
}

fn error_payload(err: &EncodeError) -> String {
    let payload = ErrorPayload {
        error: ENCODE_FAILURE,
        detail: err.0.to_string(),
    };
    serde_json::to_string(&payload)
        .unwrap_or_else(|_| format!("{{\"error\":\"{ENCODE_FAILURE}\"}}"))
}
