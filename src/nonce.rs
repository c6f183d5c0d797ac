//! Request-correlation values sent to the issuing endpoint.
//!
//! The observed token server accepts a fixed placeholder nonce, but nothing
//! guarantees that every deployment does. Generation is therefore a pluggable
//! strategy: [`FixedNonce`] reproduces the placeholder behavior, while
//! [`RandomNonce`] serves endpoints that enforce replay protection.

use serde::{Deserialize, Serialize};

/// The correlation value included in every issuance request.
///
/// Callers must not assume uniqueness; that is up to the chosen
/// [`NonceProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nonce(String);

impl Nonce {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Strategy for producing the nonce of the next issuance request.
pub trait NonceProvider: std::fmt::Debug {
    fn next(&self) -> Nonce;
}

/// Always sends the same value.
///
/// This mirrors the placeholder session id the demo token server was built
/// against. Use only with endpoints that do not enforce nonce uniqueness.
#[derive(Debug, Clone)]
pub struct FixedNonce {
    value: Nonce,
}

impl FixedNonce {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Nonce::new(value),
        }
    }
}

impl Default for FixedNonce {
    fn default() -> Self {
        Self::new("1234")
    }
}

impl NonceProvider for FixedNonce {
    fn next(&self) -> Nonce {
        self.value.clone()
    }
}

/// Generates a fresh alphanumeric value per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl RandomNonce {
    const LENGTH: usize = 16;
}

impl NonceProvider for RandomNonce {
    fn next(&self) -> Nonce {
        use rand::Rng;

        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
        let mut rng = rand::rng();

        let value = (0..Self::LENGTH)
            .map(|_i| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect::<String>();

        Nonce(value)
    }
}
