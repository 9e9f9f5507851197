//! Domain error taxonomy for Helius API failures.

use std::any::Any;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of situations a classified failure can represent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// API key missing, revoked or malformed (HTTP 401)
    ApiKeyInvalid,
    /// Too many requests (HTTP 429)
    ApiRateLimit,
    /// Upstream server failure (HTTP 500, 502, 503)
    ApiRequestFailed,
    /// Requested asset does not exist (HTTP 404)
    AssetNotFound,
    WebhookNotFound,
    /// Webhook exceeds the per-webhook address cap
    WebhookAddressLimit,
    TransactionFailed,
    /// Preflight simulation rejected the transaction
    TransactionSimulateFailed,
    InsufficientFunds,
    InvalidInput,
    /// Any HTTP response outside the known status table
    NetworkError,
    Unknown,
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: [ErrorKind; 12] = [
        Self::ApiKeyInvalid,
        Self::ApiRateLimit,
        Self::ApiRequestFailed,
        Self::AssetNotFound,
        Self::WebhookNotFound,
        Self::WebhookAddressLimit,
        Self::TransactionFailed,
        Self::TransactionSimulateFailed,
        Self::InsufficientFunds,
        Self::InvalidInput,
        Self::NetworkError,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKeyInvalid => "API_KEY_INVALID",
            Self::ApiRateLimit => "API_RATE_LIMIT",
            Self::ApiRequestFailed => "API_REQUEST_FAILED",
            Self::AssetNotFound => "ASSET_NOT_FOUND",
            Self::WebhookNotFound => "WEBHOOK_NOT_FOUND",
            Self::WebhookAddressLimit => "WEBHOOK_ADDRESS_LIMIT",
            Self::TransactionFailed => "TRANSACTION_FAILED",
            Self::TransactionSimulateFailed => "TRANSACTION_SIMULATE_FAILED",
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::InvalidInput => "INVALID_INPUT",
            Self::NetworkError => "NETWORK_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Curated end-user text, for the kinds that have one
    fn curated_message(&self) -> Option<&'static str> {
        match self {
            Self::ApiKeyInvalid => {
                Some("Invalid API key. Please check your Helius API key configuration.")
            }
            Self::ApiRateLimit => Some("Rate limit exceeded. Please wait a moment and try again."),
            Self::WebhookAddressLimit => Some(
                "Webhook address limit reached (100,000 addresses). Remove unused addresses or create a new webhook.",
            ),
            Self::InsufficientFunds => Some("Insufficient funds to complete this transaction."),
            _ => None,
        }
    }
}

/// Returned when parsing an unrecognised kind identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid error kind: {0}")]
pub struct ParseErrorKindError(pub String);

impl std::str::FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseErrorKindError(s.to_string()))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified API failure.
///
/// Built once, either by [`classify`](crate::app::classify) or through
/// [`DomainError::new`] and the `with_*` builders, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{kind}: {message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
}

impl DomainError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            retryable: false,
            operation: None,
        }
    }

    #[must_use]
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    #[must_use]
    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Raw diagnostic message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Present only when the failure came from an HTTP response
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn retryable(&self) -> bool {
        self.retryable
    }

    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Advisory only; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// Text safe to show an end user.
    ///
    /// Kinds likely to surface in a UI get a curated sentence; every other kind
    /// falls back to the raw message.
    pub fn user_message(&self) -> &str {
        self.kind.curated_message().unwrap_or(self.message.as_str())
    }
}

/// Type-identity check for values of unknown type
pub fn is_domain_error(value: &dyn Any) -> bool {
    value.is::<DomainError>()
}

/// True only for a [`DomainError`] flagged retryable
pub fn is_retryable_raw(value: &dyn Any) -> bool {
    value
        .downcast_ref::<DomainError>()
        .is_some_and(DomainError::is_retryable)
}

/// Find a [`DomainError`] anywhere in an error's source chain
pub fn find_domain_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a DomainError> {
    let mut current: Option<&'a (dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(domain) = e.downcast_ref::<DomainError>() {
            return Some(domain);
        }
        current = e.source();
    }
    None
}
