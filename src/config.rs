use crate::TokenEndpoint;

/// Parameters required for initializing a
/// [`CredentialCoordinator`](crate::CredentialCoordinator).
#[derive(Debug, Clone)]
pub struct AppTokenOptions {
    /// URL of the token-issuing endpoint, e.g. "http://localhost:3080/auth".
    ///
    /// This is the app's own backend component, which holds the client secret
    /// and mints application tokens on the app's behalf.
    pub token_endpoint: TokenEndpoint,
}
