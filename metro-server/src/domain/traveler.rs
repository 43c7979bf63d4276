//! Traveler identifier type.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing an invalid traveler identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid traveler id: {reason}")]
pub struct InvalidTravelerId {
    reason: &'static str,
}

/// Opaque identifier of an already-authenticated traveler.
///
/// The planner makes no assumption about the format beyond it being a stable,
/// non-empty identifier for one requester.
///
/// # Examples
///
/// ```
/// use metro_server::domain::TravelerId;
///
/// let traveler = TravelerId::new("user-7".to_string()).unwrap();
/// assert_eq!(traveler.as_str(), "user-7");
///
/// // Empty strings are rejected
/// assert!(TravelerId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TravelerId(String);

impl TravelerId {
    /// Create a traveler id, rejecting empty or whitespace-only strings.
    pub fn new(s: String) -> Result<Self, InvalidTravelerId> {
        if s.trim().is_empty() {
            return Err(InvalidTravelerId {
                reason: "traveler id cannot be empty",
            });
        }
        Ok(TravelerId(s))
    }

    /// Returns the traveler id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelerId({})", self.0)
    }
}

impl fmt::Display for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
