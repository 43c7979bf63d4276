//! Station identity and metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a station in the network.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let id = StationId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// Wrap a raw station number.
    pub const fn new(raw: u32) -> Self {
        StationId(raw)
    }

    /// Returns the raw station number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for StationId {
    fn from(raw: u32) -> Self {
        StationId(raw)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station in the metro network.
///
/// Stations are loaded once at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,

    /// Display name, unique under case-insensitive comparison.
    pub name: String,

    /// Line label (e.g. "Blue").
    pub line: String,

    /// Whether passengers can change lines here.
    #[serde(default)]
    pub is_interchange: bool,

    /// Landmark close to the station.
    #[serde(default)]
    pub nearby_place: String,

    /// Walking time from the station to `nearby_place`.
    #[serde(default)]
    pub walking_time_mins: u32,
}

impl Station {
    /// Create a station with no interchange and no nearby landmark.
    pub fn new(id: StationId, name: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            line: line.into(),
            is_interchange: false,
            nearby_place: String::new(),
            walking_time_mins: 0,
        }
    }

    /// Mark the station as an interchange.
    pub fn interchange(mut self) -> Self {
        self.is_interchange = true;
        self
    }

    /// Set the nearby landmark and the walk to reach it.
    pub fn near(mut self, place: impl Into<String>, walking_time_mins: u32) -> Self {
        self.nearby_place = place.into();
        self.walking_time_mins = walking_time_mins;
        self
    }

    /// Case-insensitive comparison against the station name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
