use serde::{Deserialize, Serialize};
use url::Url;

use crate::response::SuccessIssuanceResponse;

/// An application credential as issued by the token endpoint.
///
/// Immutable once constructed; a re-issuance produces a new value, never a
/// mutation of the old one. The token itself is an opaque bearer string, not
/// something this crate inspects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credential {
    /// Opaque bearer token.
    pub access_token: String,

    /// Lifetime in seconds, as reported by the issuing endpoint at issuance
    /// time. The absolute expiry instant is tracked by the cache, not here.
    pub expires_in: i64,

    /// Base URL of the server this credential is scoped to.
    pub server: Url,

    /// The principal this credential represents. For application credentials
    /// this is a service identity, not a signed-in end user.
    pub user_id: String,
}

impl From<SuccessIssuanceResponse> for Credential {
    fn from(value: SuccessIssuanceResponse) -> Self {
        Self {
            access_token: value.access_token,
            expires_in: value.expires_in,
            server: value.app_token_base_url,
            user_id: value.arcgis_user_id,
        }
    }
}
