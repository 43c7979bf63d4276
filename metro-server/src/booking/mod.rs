//! Signed bookings.
//!
//! Every successful route request can be turned into a [`Booking`]: a record
//! with a random id and a token that binds the id to the issuer's secret.

mod issuer;
mod signer;

pub use issuer::{Booking, BookingError, BookingIssuer};
pub use signer::{SigningError, TOKEN_SEPARATOR, TokenError, TokenSigner};
