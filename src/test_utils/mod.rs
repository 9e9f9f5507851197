//! Test utilities, enabled with the `test-utils` feature.

pub mod fixtures;

pub use fixtures::{
    BUSINESS_RULE_MESSAGES, client_failure_json, error_body, status_failure,
};
