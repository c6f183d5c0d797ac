use std::rc::Rc;

use snafu::ResultExt;

use crate::{
    cache::TokenCache,
    config::AppTokenOptions,
    credential::Credential,
    error::{AppTokenError, RequestSnafu},
    identity::{IdentityRegistry, TokenRegistration},
    nonce::NonceProvider,
    request,
};

/// The single entry point for obtaining an application credential.
///
/// Enforces the cache-then-fetch policy: a valid cached credential is
/// returned without any network traffic; otherwise one issuance round trip is
/// made, the cache is updated, and the fresh credential is registered with
/// the identity subsystem before it is handed back.
///
/// Concurrent `ensure_credential` calls are not serialized against each
/// other. Two callers racing on an empty or expired cache will both issue,
/// and whichever response settles last overwrites the cache. Repeated calls
/// while the cached credential stays valid are cheap, so it is safe to call
/// before every protected operation.
#[derive(Debug)]
pub struct CredentialCoordinator {
    options: AppTokenOptions,
    cache: TokenCache,
    identity: Rc<dyn IdentityRegistry>,
    nonce_provider: Rc<dyn NonceProvider>,
}

impl CredentialCoordinator {
    pub fn new(
        options: AppTokenOptions,
        cache: TokenCache,
        identity: Rc<dyn IdentityRegistry>,
        nonce_provider: Rc<dyn NonceProvider>,
    ) -> Self {
        Self {
            options,
            cache,
            identity,
            nonce_provider,
        }
    }

    /// The cache this coordinator reads and writes.
    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    /// Return a valid application credential, issuing a new one if necessary.
    ///
    /// The only suspension point is the network round trip; a cache hit
    /// resolves without suspending. An in-flight issuance cannot be aborted:
    /// even if the caller drops interest, the response still reaches cache
    /// and identity subsystem when it arrives.
    ///
    /// A failed issuance leaves the cache untouched; the next call will
    /// simply attempt issuance again.
    pub async fn ensure_credential(&self) -> Result<Credential, AppTokenError> {
        if let Some(credential) = self.cache.get() {
            tracing::trace!("Using cached credential");
            return Ok(credential);
        }

        let nonce = self.nonce_provider.next();
        let credential = request::issue_app_token(self.options.token_endpoint.clone(), &nonce)
            .await
            .context(RequestSnafu {})?;

        // Cache first, then register. Callers may rely on the cache being
        // populated by the time the identity subsystem sees the token.
        self.cache.store(credential.clone());
        self.identity.register_token(TokenRegistration {
            expires: credential.expires_in,
            server: credential.server.clone(),
            // The token must never travel over an unsecured connection.
            ssl: true,
            token: credential.access_token.clone(),
            user_id: credential.user_id.clone(),
        });

        tracing::debug!(user_id = %credential.user_id, "Issued new application credential");
        Ok(credential)
    }
}
