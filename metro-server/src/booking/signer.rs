//! Booking token signing and verification.
//!
//! A token is `<booking id>.<base64(HMAC-SHA256(secret, booking id))>`, using
//! the standard base64 alphabet with padding. The id is signed exactly as it
//! appears in the token.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::BookingId;

type HmacSha256 = Hmac<Sha256>;

/// Separator between the booking id and its signature.
pub const TOKEN_SEPARATOR: char = '.';

/// Errors from the signing key itself.
///
/// These are configuration problems: once one occurs, every issuance with the
/// same key will fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningError {
    /// Key material rejected at construction
    #[error("invalid signing key: {0}")]
    InvalidKey(&'static str),

    /// The MAC could not be keyed
    #[error("failed to sign booking {booking_id}")]
    SigningFailure { booking_id: String },
}

/// Reasons a presented token is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Missing separator or empty id
    #[error("malformed token")]
    Malformed,

    /// Signature part is not valid base64
    #[error("token signature is not valid base64")]
    Encoding,

    /// Signature doesn't match the booking id
    #[error("token signature does not match booking id")]
    SignatureMismatch,

    #[error(transparent)]
    Signing(#[from] SigningError),
}

/// Signs and verifies booking tokens with a shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    key: Vec<u8>,
}

impl TokenSigner {
    /// Create a signer from secret key material.
    ///
    /// Empty keys are rejected.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, SigningError> {
        let key = secret.into();
        if key.is_empty() {
            return Err(SigningError::InvalidKey("signing secret cannot be empty"));
        }
        Ok(Self { key })
    }

    fn mac_over(&self, booking_id: &BookingId) -> Result<HmacSha256, SigningError> {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).map_err(|_| SigningError::SigningFailure {
                booking_id: booking_id.to_string(),
            })?;
        mac.update(booking_id.as_str().as_bytes());
        Ok(mac)
    }

    /// Produce the token for a booking id.
    pub fn sign(&self, booking_id: &BookingId) -> Result<String, SigningError> {
        let signature = STANDARD.encode(self.mac_over(booking_id)?.finalize().into_bytes());
        Ok(format!("{booking_id}{TOKEN_SEPARATOR}{signature}"))
    }

    /// Check a token and return the booking id it vouches for.
    ///
    /// The token is split at its first separator. The signature comparison
    /// runs in constant time.
    pub fn verify(&self, token: &str) -> Result<BookingId, TokenError> {
        let (id, signature) = token
            .split_once(TOKEN_SEPARATOR)
            .ok_or(TokenError::Malformed)?;
        let booking_id = BookingId::parse(id).map_err(|_| TokenError::Malformed)?;
        let signature = STANDARD
            .decode(signature)
            .map_err(|_| TokenError::Encoding)?;

        self.mac_over(&booking_id)?
            .verify_slice(&signature)
            .map_err(|_| TokenError::SignatureMismatch)?;

        Ok(booking_id)
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"<redacted>")
            .finish()
    }
}
