//! Domain layer: the error taxonomy and the classifier's input type.

pub mod error;
pub mod failure;

pub use error::{
    DomainError, ErrorKind, ParseErrorKindError, find_domain_error, is_domain_error,
    is_retryable_raw,
};
pub use failure::{Failure, ResponseDescriptor};
