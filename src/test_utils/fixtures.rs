//! Failure fixtures shared by integration tests and benchmarks.

use serde_json::{Value, json};

use crate::domain::{ErrorKind, Failure};

/// Upstream wording observed for each business-rule kind
pub const BUSINESS_RULE_MESSAGES: &[(&str, ErrorKind)] = &[
    (
        "Webhook exceeds 100,000 addresses",
        ErrorKind::WebhookAddressLimit,
    ),
    (
        "cannot add addresses: address limit reached",
        ErrorKind::WebhookAddressLimit,
    ),
    ("insufficient funds for rent", ErrorKind::InsufficientFunds),
    (
        "transaction simulation failed: custom program error",
        ErrorKind::TransactionSimulateFailed,
    ),
];

/// Helius REST error body
#[must_use]
pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

/// Serialized HTTP client failure with a response attached
#[must_use]
pub fn client_failure_json(status: u16, body_error: Option<&str>) -> Value {
    let data = body_error.map_or(Value::Null, error_body);
    json!({
        "message": format!("Request failed with status code {}", status),
        "response": { "status": status, "data": data }
    })
}

/// Transport failure with no body error
#[must_use]
pub fn status_failure(status: u16) -> Failure {
    Failure::transport(
        status,
        None,
        format!("Request failed with status code {}", status),
    )
}
