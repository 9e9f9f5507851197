//! Adapters from HTTP client failures into [`Failure`].
//!
//! The classifier only understands [`Failure`]; this module is where the
//! shapes produced by `reqwest`, or by a serialized client error, are
//! recognised.

use std::error::Error as StdError;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::app::classify;
use crate::domain::{DomainError, Failure};

// ============================================================================
// REQWEST ADAPTERS
// ============================================================================

impl From<&reqwest::Error> for Failure {
    fn from(err: &reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Failure::transport(status.as_u16(), None, err.to_string()),
            None => Failure::generic(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        Failure::from(&err)
    }
}

impl Failure {
    /// Build a failure from any error, looking through its source chain for a
    /// `reqwest` error that carries a status.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut current: Option<&(dyn StdError + 'static)> = Some(err);
        while let Some(e) = current {
            if let Some(req_err) = e.downcast_ref::<reqwest::Error>() {
                if let Some(status) = req_err.status() {
                    return Failure::transport(status.as_u16(), None, err.to_string());
                }
            }
            current = e.source();
        }
        Failure::generic(err.to_string())
    }
}

/// Error body returned by the Helius REST endpoints
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Turn an unsuccessful response into a [`Failure`], reading the body for an
/// `error` field. Body read or parse failures are not fatal.
pub async fn failure_from_response(response: reqwest::Response) -> Failure {
    let status = response.status().as_u16();
    let message = format!("Request failed with status code {}", status);

    let body_error = match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(e) => {
                debug!(status = %status, error = %e, "Error body is not JSON, using status message");
                None
            }
        },
        Err(e) => {
            debug!(status = %status, error = %e, "Failed to read error body");
            None
        }
    };

    Failure::transport(status, body_error, message)
}

/// Pass successful responses through; classify everything else.
///
/// # Examples
/// ```no_run
/// # async fn run() -> Result<(), helius_errors::DomainError> {
/// let response = reqwest::get("https://api.helius.xyz/v0/webhooks?api-key=KEY")
///     .await
///     .map_err(|e| helius_errors::classify(&e, Some("getAllWebhooks")))?;
/// let response = helius_errors::classify_response(response, Some("getAllWebhooks")).await?;
/// # let _ = response;
/// # Ok(())
/// # }
/// ```
pub async fn classify_response(
    response: reqwest::Response,
    operation: Option<&str>,
) -> Result<reqwest::Response, DomainError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let failure = failure_from_response(response).await;
    Err(classify(failure, operation))
}

// ============================================================================
// JSON ADAPTER
// ============================================================================

/// Recognise a serialized client failure of the form
/// `{"message": "...", "response": {"status": 429, "data": {"error": "..."}}}`.
///
/// `body` is accepted in place of `data`. A `status` that is not a whole
/// number in the `u16` range does not count as a response; `429.0` counts,
/// `4.29` and `-1` do not.
///
/// Without a top-level `message` string, the message is the JSON text of the
/// whole value, so business-rule wording anywhere in it (any field or key)
/// takes part in text matching.
impl From<&Value> for Failure {
    fn from(value: &Value) -> Self {
        let message = match value {
            Value::String(s) => s.clone(),
            _ => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
        };

        let response = value.get("response");
        let status = response
            .and_then(|r| r.get("status"))
            .and_then(status_from_json);

        match (response, status) {
            (Some(response), Some(status)) => {
                let body_error = ["data", "body"]
                    .iter()
                    .filter_map(|field| response.get(field))
                    .find_map(|body| body.get("error").and_then(Value::as_str))
                    .map(str::to_string);
                Failure::transport(status, body_error, message)
            }
            _ => Failure::generic(message),
        }
    }
}

fn status_from_json(status: &Value) -> Option<u16> {
    if let Some(n) = status.as_u64() {
        return u16::try_from(n).ok();
    }
    let f = status.as_f64()?;
    (f.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&f)).then_some(f as u16)
}

impl From<Value> for Failure {
    fn from(value: Value) -> Self {
        Failure::from(&value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_with_response_status() {
        let failure = Failure::from(&json!({
            "message": "Request failed with status code 401",
            "response": {"status": 401, "data": {"error": "invalid api key provided"}}
        }));
        assert_eq!(
            failure,
            Failure::transport(
                401,
                Some("invalid api key provided".to_string()),
                "Request failed with status code 401"
            )
        );
    }

    #[test]
    fn test_json_body_field() {
        let failure = Failure::from(&json!({
            "message": "oops",
            "response": {"status": 404, "body": {"error": "Webhook not found"}}
        }));
        assert_eq!(
            failure.response().and_then(|r| r.body_error),
            Some("Webhook not found")
        );
    }

    #[test]
    fn test_json_non_numeric_status_is_generic() {
        let failure = Failure::from(&json!({
            "message": "insufficient funds",
            "response": {"status": "429"}
        }));
        assert_eq!(failure, Failure::generic("insufficient funds"));

        let failure = Failure::from(&json!({"message": "x", "response": {"status": 70000}}));
        assert!(failure.response().is_none());
    }

    #[test]
    fn test_json_whole_float_status_is_response() {
        let failure = Failure::from(&json!({"message": "x", "response": {"status": 429.0}}));
        assert_eq!(failure.response().map(|r| r.status), Some(429));

        for status in [json!(4.29), json!(-1), json!(-1.0), json!(65536.0)] {
            let failure = Failure::from(&json!({"message": "x", "response": {"status": status}}));
            assert!(failure.response().is_none(), "status {}", status);
        }
    }

    #[test]
    fn test_json_without_message_matches_any_field() {
        let failure = Failure::from(&json!({"detail": "insufficient funds"}));
        assert_eq!(
            failure,
            Failure::generic(r#"{"detail":"insufficient funds"}"#)
        );
    }

    #[test]
    fn test_json_without_message_uses_string_conversion() {
        assert_eq!(Failure::from(&json!("boom")), Failure::generic("boom"));
        assert_eq!(Failure::from(&json!(42)), Failure::generic("42"));
        assert_eq!(Failure::from(&Value::Null), Failure::generic("null"));
        assert_eq!(
            Failure::from(&json!({"code": 7})),
            Failure::generic(r#"{"code":7}"#)
        );
    }

    #[test]
    fn test_from_error_without_reqwest_is_generic() {
        let err = std::io::Error::other("connection reset");
        assert_eq!(
            Failure::from_error(&err),
            Failure::generic("connection reset")
        );
    }
}
