use snafu::Snafu;

use crate::request::RequestError;

/// An error surfaced to the bootstrapping code when no credential could be
/// ensured.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AppTokenError {
    #[snafu(display("AppTokenError: Request error"))]
    Request { source: RequestError },
}

impl AppTokenError {
    /// The serialized error, for rendering in a diagnostic failure view.
    ///
    /// For an application-level rejection this is the endpoint's own error
    /// payload, preserving its original code and message. For transport
    /// failures it is the error chain as text.
    pub fn diagnostic(&self) -> String {
        match self {
            AppTokenError::Request {
                source: RequestError::ErrResponse { error_response },
            } => serde_json::to_string(error_response)
                .unwrap_or_else(|_| error_response.error.message.clone()),
            AppTokenError::Request { source } => format!("{self}: {source}"),
        }
    }

    /// The application-level error code, if the issuing endpoint rejected the
    /// request. `None` for transport failures.
    pub fn issuance_code(&self) -> Option<i64> {
        match self {
            AppTokenError::Request {
                source: RequestError::ErrResponse { error_response },
            } => Some(error_response.error.code),
            AppTokenError::Request { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assertr::prelude::*;

    use super::*;
    use crate::response::{ErrorResponse, IssuanceError};

    #[test]
    fn diagnostic_preserves_the_endpoints_error_payload() {
        let err = AppTokenError::Request {
            source: RequestError::ErrResponse {
                error_response: ErrorResponse {
                    error: IssuanceError {
                        code: 498,
                        message: "Invalid token".to_owned(),
                    },
                },
            },
        };

        assert_that(err.diagnostic().as_str())
            .is_equal_to(r#"{"error":{"code":498,"message":"Invalid token"}}"#);
        assert_that(err.issuance_code()).is_equal_to(Some(498));
    }
}
