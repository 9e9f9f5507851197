//! Failure classification.
//!
//! Maps a caught [`Failure`] onto the [`ErrorKind`] taxonomy:
//! - HTTP responses are classified by status code alone
//! - Failures without a response are matched against known business-rule wording
//! - Everything else becomes [`ErrorKind::Unknown`]

use tracing::debug;

use crate::domain::{DomainError, ErrorKind, Failure};

// ============================================================================
// STATUS TABLE
// ============================================================================

/// Statuses worth retrying: rate limiting and transient upstream failures
pub const RETRYABLE_STATUSES: &[u16] = &[429, 500, 502, 503];

/// Map an HTTP status to its error kind
///
/// # Examples
/// ```
/// use helius_errors::{ErrorKind, kind_for_status};
///
/// assert_eq!(kind_for_status(401), ErrorKind::ApiKeyInvalid);
/// assert_eq!(kind_for_status(403), ErrorKind::NetworkError);
/// ```
pub fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        401 => ErrorKind::ApiKeyInvalid,
        429 => ErrorKind::ApiRateLimit,
        404 => ErrorKind::AssetNotFound,
        500 | 502 | 503 => ErrorKind::ApiRequestFailed,
        _ => ErrorKind::NetworkError,
    }
}

pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

// ============================================================================
// BUSINESS-RULE PATTERNS
// ============================================================================

/// Message fragments checked in order; the first hit wins.
///
/// Matching is case-sensitive and depends on upstream wording.
const MESSAGE_PATTERNS: &[(&[&str], ErrorKind)] = &[
    (
        &["100,000 addresses", "address limit"],
        ErrorKind::WebhookAddressLimit,
    ),
    (&["insufficient funds"], ErrorKind::InsufficientFunds),
    (&["simulation failed"], ErrorKind::TransactionSimulateFailed),
];

fn kind_for_message(message: &str) -> ErrorKind {
    MESSAGE_PATTERNS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| message.contains(needle)))
        .map_or(ErrorKind::Unknown, |(_, kind)| *kind)
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a caught failure. Never fails.
///
/// A response status always wins over message text, so a 429 whose body
/// mentions "insufficient funds" is still [`ErrorKind::ApiRateLimit`].
pub fn classify(failure: impl Into<Failure>, operation: Option<&str>) -> DomainError {
    let failure = failure.into();

    let error = match failure {
        Failure::Transport {
            status,
            body_error,
            message,
        } => {
            let message = body_error.filter(|e| !e.is_empty()).unwrap_or(message);
            DomainError::new(kind_for_status(status), message)
                .with_status_code(status)
                .with_retryable(is_retryable_status(status))
        }
        Failure::Generic { message } => DomainError::new(kind_for_message(&message), message),
    };

    let error = match operation {
        Some(op) => error.with_operation(op),
        None => error,
    };

    debug!(
        kind = %error.kind(),
        status_code = ?error.status_code(),
        retryable = error.is_retryable(),
        operation = ?error.operation(),
        "Classified API failure"
    );

    error
}

/// Classifier bound to a default operation label.
///
/// Handy when one client method funnels several failure sites through the
/// same label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorClassifier {
    operation: Option<String>,
}

impl ErrorClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_operation(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
        }
    }

    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    pub fn classify(&self, failure: impl Into<Failure>) -> DomainError {
        classify(failure, self.operation.as_deref())
    }
}

// ============================================================================
// TESTS
// ============================================================================
