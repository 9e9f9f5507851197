//! Application layer containing the classification logic.

pub mod classifier;

pub use classifier::{
    ErrorClassifier, RETRYABLE_STATUSES, classify, is_retryable_status, kind_for_status,
};
