//! Classifier input: a caught failure reduced to the shape classification needs.

/// Status and body error of the HTTP response a failure carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor<'a> {
    pub status: u16,
    pub body_error: Option<&'a str>,
}

/// A caught failure, as handed to [`classify`](crate::app::classify).
///
/// Adapters at the I/O boundary build this from whatever the HTTP client
/// raised; see [`crate::infra::http`] for the `reqwest` and JSON adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The failure embedded an HTTP response
    Transport {
        status: u16,
        /// `error` field of the response body, if any
        body_error: Option<String>,
        /// The failure's own message
        message: String,
    },
    /// No response attached, e.g. business-rule rejections or connect errors
    Generic { message: String },
}

impl Failure {
    pub fn transport(status: u16, body_error: Option<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body_error,
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    pub fn response(&self) -> Option<ResponseDescriptor<'_>> {
        match self {
            Self::Transport {
                status, body_error, ..
            } => Some(ResponseDescriptor {
                status: *status,
                body_error: body_error.as_deref(),
            }),
            Self::Generic { .. } => None,
        }
    }

    /// The failure's own message, ignoring any response body
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message, .. } | Self::Generic { message } => message,
        }
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::generic(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::generic(message)
    }
}

impl From<&Failure> for Failure {
    fn from(failure: &Failure) -> Self {
        failure.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_descriptor_only_for_transport() {
        let failure = Failure::transport(404, Some("Asset Not Found".to_string()), "404");
        assert_eq!(
            failure.response(),
            Some(ResponseDescriptor {
                status: 404,
                body_error: Some("Asset Not Found"),
            })
        );
        assert_eq!(failure.message(), "404");

        let failure = Failure::from("boom");
        assert!(failure.response().is_none());
        assert_eq!(failure.message(), "boom");
    }
}
