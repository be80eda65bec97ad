//! Admin API key parsing.

use crate::error::TokenError;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Separator between the key id and the hex secret.
pub const KEY_SEPARATOR: char = ':';

/// A parsed `<id>:<hex secret>` admin key.
///
/// The decoded secret is wiped when the key is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AdminKey {
    key_id: String,
    secret: Vec<u8>,
}

impl AdminKey {
    /// Parses a raw admin key.
    ///
    /// Only the first `:` splits the key; any later colons belong to the
    /// secret and therefore fail hex decoding.
    ///
    /// # Errors
    ///
    /// `InvalidKeyFormat` when the input is empty or has no separator,
    /// `InvalidSecretEncoding` when the secret is not non-empty hex.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let (key_id, secret_hex) = raw
            .split_once(KEY_SEPARATOR)
            .ok_or(TokenError::InvalidKeyFormat)?;

        let secret = hex::decode(secret_hex).map_err(|_| TokenError::InvalidSecretEncoding)?;
        if secret.is_empty() {
            return Err(TokenError::InvalidSecretEncoding);
        }

        Ok(Self {
            key_id: key_id.to_string(),
            secret,
        })
    }

    /// Identifier placed in the `kid` header.
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Decoded HMAC secret.
    #[must_use]
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminKey")
            .field("key_id", &self.key_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
