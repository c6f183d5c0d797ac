use std::cell::RefCell;
use std::rc::Rc;

use time::{Duration, OffsetDateTime};

use crate::clock::{Clock, SystemClock};
use crate::credential::Credential;

#[derive(Debug)]
struct CachedCredential {
    credential: Credential,
    expires_at: OffsetDateTime,
}

/// Holds the last issued credential and its absolute expiry instant.
///
/// Pure state, no I/O. Clones share the same underlying slot, so the
/// coordinator and the host app can both hold a handle to the one cache of
/// the process. All time comparisons go through the injected [`Clock`] and
/// are evaluated at call time, never against a remembered "now".
#[derive(Debug, Clone)]
pub struct TokenCache {
    state: Rc<RefCell<Option<CachedCredential>>>,
    clock: Rc<dyn Clock>,
}

impl TokenCache {
    /// An empty cache reading the real wall clock.
    pub fn system() -> Self {
        Self::new(Rc::new(SystemClock))
    }

    /// An empty cache reading the given clock.
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            clock,
        }
    }

    /// The cached credential, if one is present and still valid.
    ///
    /// A credential is valid strictly before its expiry instant; at or after
    /// it, the cache reports empty and the caller must re-issue.
    pub fn get(&self) -> Option<Credential> {
        let state = self.state.borrow();
        let cached = state.as_ref()?;
        if self.clock.now() < cached.expires_at {
            Some(cached.credential.clone())
        } else {
            tracing::trace!("Cached credential expired");
            None
        }
    }

    /// Remember a freshly issued credential.
    ///
    /// The expiry instant is `now + expires_in` at the moment of storing.
    /// Overwrites any prior value unconditionally, even one that would have
    /// outlived the new credential.
    pub fn store(&self, credential: Credential) {
        let expires_at = self.clock.now() + Duration::seconds(credential.expires_in);
        tracing::trace!(%expires_at, "Caching credential");
        *self.state.borrow_mut() = Some(CachedCredential {
            credential,
            expires_at,
        });
    }
}
