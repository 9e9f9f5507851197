//! Infrastructure adapters at the HTTP boundary.

pub mod http;

pub use http::{classify_response, failure_from_response};
