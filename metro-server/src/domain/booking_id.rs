//! Booking identifier type.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Error returned when parsing an invalid booking identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking id: {reason}")]
pub struct InvalidBookingId {
    reason: &'static str,
}

/// Unique identifier of an issued booking.
///
/// Freshly generated ids are random 128-bit UUIDs rendered in lowercase
/// hyphenated form. The string form is what gets signed, so it must never
/// be re-encoded.
///
/// # Examples
///
/// ```
/// use metro_server::domain::BookingId;
///
/// let a = BookingId::generate();
/// let b = BookingId::generate();
/// assert_ne!(a, b);
/// assert_eq!(a.as_str().len(), 36);
///
/// // Ids containing the token separator are rejected
/// assert!(BookingId::parse("abc.def").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Allocate a new random booking id.
    ///
    /// Backed by the operating system RNG, so concurrent callers never
    /// share generator state.
    pub fn generate() -> Self {
        BookingId(Uuid::new_v4().hyphenated().to_string())
    }

    /// Accept an id received from outside (e.g. the id half of a token).
    pub fn parse(s: &str) -> Result<Self, InvalidBookingId> {
        if s.is_empty() {
            return Err(InvalidBookingId {
                reason: "booking id cannot be empty",
            });
        }
        if s.contains('.') {
            return Err(InvalidBookingId {
                reason: "booking id cannot contain '.'",
            });
        }
        Ok(BookingId(s.to_string()))
    }

    /// Returns the booking id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookingId({})", self.0)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
