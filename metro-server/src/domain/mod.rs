//! Domain types for the metro planner.
//!
//! These types validate their invariants at construction time, so code that
//! receives them can trust their validity.

mod booking_id;
mod station;
mod traveler;

pub use booking_id::{BookingId, InvalidBookingId};
pub use station::{Station, StationId};
pub use traveler::{InvalidTravelerId, TravelerId};
