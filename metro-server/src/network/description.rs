//! Static network descriptions: the built-in seed and JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Station, StationId};

use super::error::NetworkError;
use super::graph::Connection;

/// Stations and connections that make up a metro network.
///
/// File format:
///
/// ```json
/// {
///   "stations": [
///     { "id": 1, "name": "SEC-51", "line": "Blue",
///       "is_interchange": false, "nearby_place": "Mall Area", "walking_time_mins": 5 }
///   ],
///   "connections": [
///     { "from": 1, "to": 2, "distance": 5, "transfer_time": 0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl NetworkDescription {
    /// The five-station Blue/Red network served by default.
    pub fn default_seed() -> Self {
        let s = |id: u32, name: &str, line: &str| Station::new(StationId::new(id), name, line);

        Self {
            stations: vec![
                s(1, "SEC-51", "Blue").near("Mall Area", 5),
                s(2, "SEC-50", "Blue").near("Residential Hub", 3),
                s(3, "SEC-101", "Blue").interchange().near("Hospital", 4),
                s(4, "SEC-81", "Red").near("Market", 2),
                s(5, "PARI CHOWK", "Red").interchange().near("University", 6),
            ],
            connections: vec![
                Connection::new(1, 2, 5),
                Connection::new(2, 3, 4),
                // Blue → Red change at SEC-101
                Connection::new(3, 4, 6).with_transfer(3),
                Connection::new(4, 5, 5),
            ],
        }
    }

    /// Read a network description from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| NetworkError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
