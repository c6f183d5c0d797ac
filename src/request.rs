use reqwest::IntoUrl;
use serde::Serialize;
use snafu::{ResultExt, Snafu};

use crate::{
    credential::Credential,
    nonce::Nonce,
    response::{ErrorResponse, IssuanceResponse},
};

#[derive(Debug, Snafu)]
pub enum RequestError {
    #[snafu(display("RequestError: Could not send request"))]
    Send { source: reqwest::Error },

    #[snafu(display("RequestError: Could not decode payload"))]
    Decode { source: reqwest::Error },

    #[snafu(display("RequestError: Received an error response"))]
    ErrResponse { error_response: ErrorResponse },
}

/// Perform one round trip to the issuing endpoint.
///
/// Classifies the response by body shape, as the endpoint embeds rejections
/// in an `error` object while still answering with HTTP 200. Does not touch
/// the cache and never retries.
pub(crate) async fn issue_app_token(
    token_endpoint: impl IntoUrl,
    nonce: &Nonce,
) -> Result<Credential, RequestError> {
    #[derive(Serialize)]
    struct IssuanceRequest<'a> {
        nonce: &'a Nonce,
    }

    match reqwest::Client::new()
        .post(token_endpoint)
        .json(&IssuanceRequest { nonce })
        .send()
        .await
        .context(SendSnafu {})?
        .json::<IssuanceResponse>()
        .await
        .context(DecodeSnafu {})?
    {
        IssuanceResponse::Success(success) => Ok(success.into()),
        IssuanceResponse::Error(error) => Err(ErrResponseSnafu {
            error_response: error,
        }
        .build()),
    }
}
