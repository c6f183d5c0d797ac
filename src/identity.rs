use serde::Serialize;
use url::Url;

use crate::AccessToken;

/// What the coordinator hands to the identity subsystem after a successful
/// issuance.
///
/// Field meanings follow the identity manager's `registerToken` contract:
/// `expires` is the remaining lifetime in seconds, not an absolute instant.
/// `Serialize` is derived so hosts can forward the value across a JS boundary
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRegistration {
    /// Remaining lifetime in seconds.
    pub expires: i64,

    /// Base URL of the server the token is valid for.
    pub server: Url,

    /// Whether requests carrying this token must use a secured connection.
    pub ssl: bool,

    /// The bearer token itself.
    pub token: AccessToken,

    /// The principal the token represents.
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// The external identity subsystem of the mapping SDK.
///
/// The crate never talks to the SDK directly; the host app implements this
/// trait to bridge registrations to it (e.g. through a wasm binding). The
/// coordinator calls it exactly once per successful issuance, after the cache
/// was updated.
pub trait IdentityRegistry: std::fmt::Debug {
    fn register_token(&self, registration: TokenRegistration);
}

/// Logs registrations without forwarding them anywhere.
///
/// Useful while wiring an app up, before the real SDK bridge exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingIdentityRegistry;

impl IdentityRegistry for TracingIdentityRegistry {
    fn register_token(&self, registration: TokenRegistration) {
        tracing::debug!(
            server = %registration.server,
            user_id = %registration.user_id,
            expires = registration.expires,
            "Registering credential with the identity subsystem"
        );
    }
}
