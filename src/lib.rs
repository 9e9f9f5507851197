//! Typed classification of Helius API failures.
//!
//! Raw failures from an HTTP client are reduced to a [`Failure`] and mapped by
//! [`classify`] onto a closed [`ErrorKind`] taxonomy. The resulting
//! [`DomainError`] carries advisory retryability and an end-user message.
//!
//! ```
//! use helius_errors::{ErrorKind, Failure, classify, is_retryable_raw};
//!
//! let err = classify(Failure::transport(429, None, "Too Many Requests"), Some("getAsset"));
//! assert_eq!(err.kind(), ErrorKind::ApiRateLimit);
//! assert!(is_retryable_raw(&err));
//! ```

pub mod app;
pub mod domain;
pub mod infra;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use app::{ErrorClassifier, classify, is_retryable_status, kind_for_status};
pub use domain::{
    DomainError, ErrorKind, Failure, ResponseDescriptor, find_domain_error, is_domain_error,
    is_retryable_raw,
};
pub use infra::{classify_response, failure_from_response};
