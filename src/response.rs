use serde::{Deserialize, Serialize};
use url::Url;

/// The issuing endpoint's response to a token request.
///
/// The endpoint answers with HTTP 200 even when it rejects the request, so
/// classification must look at the body shape instead of the status code.
/// `Error` is listed first: a body carrying an `error` key is always a
/// rejection, no matter what else it carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum IssuanceResponse {
    Error(ErrorResponse),
    Success(SuccessIssuanceResponse),
}

/// A successful token issuance. Field names mirror the wire format of the
/// token endpoint; unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct SuccessIssuanceResponse {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(rename = "appTokenBaseURL")]
    pub app_token_base_url: Url,
    #[serde(rename = "arcgisUserId")]
    pub arcgis_user_id: String,
}

/// In-band error payload of the issuing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: IssuanceError,
}

/// The application-level rejection embedded in an [`ErrorResponse`].
///
/// `code` follows the ArcGIS REST error numbering, e.g. `498` for an invalid
/// token and `499` for a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssuanceError {
    pub code: i64,
    pub message: String,
}
