//! Station directory: id → station lookup.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::domain::{Station, StationId};

use super::error::NetworkError;

/// Immutable collection of stations keyed by id.
///
/// Iteration and name lookup run in ascending id order, so results are
/// stable regardless of the order the seed listed them in.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: BTreeMap<StationId, Station>,
}

impl StationDirectory {
    /// Build a directory from a seed list.
    ///
    /// Fails if two entries share an id.
    pub fn load(seed: impl IntoIterator<Item = Station>) -> Result<Self, NetworkError> {
        let mut stations = BTreeMap::new();

        for station in seed {
            match stations.entry(station.id) {
                Entry::Occupied(_) => return Err(NetworkError::DuplicateStationId(station.id)),
                Entry::Vacant(slot) => {
                    slot.insert(station);
                }
            }
        }

        Ok(Self { stations })
    }

    /// Find a station id by name, ignoring case.
    ///
    /// If several stations share a name the lowest id wins.
    pub fn find_by_name(&self, name: &str) -> Option<StationId> {
        self.stations
            .values()
            .find(|s| s.matches_name(name))
            .map(|s| s.id)
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Check whether a station id is known.
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// All stations in ascending id order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Name of a station, falling back to its id for unknown stations.
    pub fn display_name(&self, id: StationId) -> String {
        self.get(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
