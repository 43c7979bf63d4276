//! Booking issuance.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::{BookingId, StationId, TravelerId};
use crate::planner::RouteResult;

use super::signer::{SigningError, TokenError, TokenSigner};

/// Error from booking issuance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The token could not be signed
    #[error("booking could not be signed: {0}")]
    Signing(#[from] SigningError),
}

/// A signed travel record for one computed route.
///
/// Bookings are never modified or revoked after issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub traveler_id: TravelerId,
    pub path: Vec<StationId>,
    pub total_distance: u64,
    pub total_time: u64,

    /// `<id>.<signature>`, see [`TokenSigner`].
    pub token: String,

    pub issued_at: DateTime<Utc>,
}

/// Issues signed bookings for computed routes.
#[derive(Debug, Clone)]
pub struct BookingIssuer {
    signer: TokenSigner,
}

impl BookingIssuer {
    /// Create a new issuer.
    pub fn new(signer: TokenSigner) -> Self {
        Self { signer }
    }

    /// Issue a booking for `traveler` along `route`.
    ///
    /// Each call allocates a fresh random id, so two bookings for the same
    /// route never share an id or a token. A signing failure is logged as a
    /// configuration problem and returned; no unsigned booking is produced.
    pub fn issue(&self, traveler: TravelerId, route: &RouteResult) -> Result<Booking, BookingError> {
        let id = BookingId::generate();

        let token = self.signer.sign(&id).inspect_err(|e| {
            error!(
                booking = %id,
                error = %e,
                "booking signing failed; the signing key is misconfigured"
            );
        })?;

        info!(
            booking = %id,
            traveler = %traveler,
            hops = route.hops(),
            distance = route.total_distance,
            "booking issued"
        );

        Ok(Booking {
            id,
            traveler_id: traveler,
            path: route.path.clone(),
            total_distance: route.total_distance,
            total_time: route.total_time,
            token,
            issued_at: Utc::now(),
        })
    }

    /// Check a presented token, returning the booking id it covers.
    pub fn verify(&self, token: &str) -> Result<BookingId, TokenError> {
        self.signer.verify(token)
    }
}
