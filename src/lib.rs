//! Obtain and cache short-lived ArcGIS application credentials in
//! browser-hosted map apps.
//!
//! The app exchanges a nonce for an application token at a backend endpoint
//! before it builds the map. This crate owns that exchange: it caches the
//! last issued credential, re-issues only once the cached one expired, and
//! hands every fresh credential to the identity subsystem of the mapping SDK
//! so that subsequent protected requests carry it automatically.
//!
//! ```no_run
//! use std::rc::Rc;
//! use arcgis_app_token::{
//!     AppTokenOptions, CredentialCoordinator, TokenCache, TracingIdentityRegistry,
//!     nonce::FixedNonce, url::Url,
//! };
//!
//! async fn bootstrap() {
//!     let coordinator = CredentialCoordinator::new(
//!         AppTokenOptions {
//!             token_endpoint: Url::parse("http://localhost:3080/auth").unwrap(),
//!         },
//!         TokenCache::system(),
//!         Rc::new(TracingIdentityRegistry),
//!         Rc::new(FixedNonce::default()),
//!     );
//!
//!     match coordinator.ensure_credential().await {
//!         Ok(_credential) => { /* build the map view */ }
//!         Err(err) => { /* replace the map container with err.diagnostic() */ }
//!     }
//! }
//! ```

mod cache;
pub mod clock;
mod config;
mod coordinator;
mod credential;
mod error;
mod identity;
pub mod login;
pub mod nonce;
mod request;
mod response;

// Library exports (additional to pub modules).
pub use cache::TokenCache;
pub use config::AppTokenOptions;
pub use coordinator::CredentialCoordinator;
pub use credential::Credential;
pub use error::AppTokenError;
pub use identity::{IdentityRegistry, TokenRegistration, TracingIdentityRegistry};
pub use request::RequestError;
pub use response::{ErrorResponse, IssuanceError};
pub mod url {
    pub use url::Url;
}

type TokenEndpoint = url::Url;
type AccessToken = String;
