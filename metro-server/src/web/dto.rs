//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::domain::{Station, StationId};
use crate::network::StationDirectory;
use crate::planner::RouteResult;

/// A station given either by id or by name.
///
/// In JSON a number is an id and a string is a (case-insensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StationRef {
    Id(StationId),
    Name(String),
}

/// Response listing every station (the metro information sheet).
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<Station>,
}

/// Query for looking a station up by name.
#[derive(Debug, Deserialize)]
pub struct StationLookupRequest {
    pub name: String,
}

/// Response for a station name lookup.
#[derive(Debug, Serialize)]
pub struct StationLookupResponse {
    pub id: StationId,
    pub name: String,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub from: StationRef,
    pub to: StationRef,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Station ids from origin to destination
    pub path: Vec<StationId>,

    /// Station names in the same order as `path`
    pub stations: Vec<String>,

    /// Total distance in km
    pub total_distance: u64,

    /// Total time in minutes, including transfers
    pub total_time: u64,
}

impl RouteResponse {
    /// Create from a route, resolving station names.
    pub fn from_route(route: &RouteResult, directory: &StationDirectory) -> Self {
        Self {
            path: route.path.clone(),
            stations: station_names(&route.path, directory),
            total_distance: route.total_distance,
            total_time: route.total_time,
        }
    }
}

/// Request to plan a route and book it.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    /// Identifier of the authenticated traveler
    pub traveler_id: String,

    pub from: StationRef,
    pub to: StationRef,
}

/// An issued booking.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: String,
    pub traveler_id: String,
    pub path: Vec<StationId>,
    pub stations: Vec<String>,
    pub total_distance: u64,
    pub total_time: u64,

    /// Signed token to present as proof of the booking
    pub token: String,

    /// RFC 3339 issue timestamp
    pub issued_at: String,
}

impl BookingResponse {
    /// Create from a domain Booking.
    pub fn from_booking(booking: &Booking, directory: &StationDirectory) -> Self {
        Self {
            booking_id: booking.id.to_string(),
            traveler_id: booking.traveler_id.to_string(),
            path: booking.path.clone(),
            stations: station_names(&booking.path, directory),
            total_distance: booking.total_distance,
            total_time: booking.total_time,
            token: booking.token.clone(),
            issued_at: booking.issued_at.to_rfc3339(),
        }
    }
}

/// Request to verify a booking token.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Outcome of token verification.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,

    /// Why the token was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Names for a path of station ids.
pub fn station_names(path: &[StationId], directory: &StationDirectory) -> Vec<String> {
    path.iter().map(|id| directory.display_name(*id)).collect()
}
