//! Undirected weighted network graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::StationId;

use super::directory::StationDirectory;
use super::error::NetworkError;

/// One direction of a connection, stored in the adjacency list of its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Station reached by following this edge.
    pub target: StationId,

    /// Track distance of the hop.
    pub distance: u32,

    /// Extra minutes spent changing lines on this hop.
    pub transfer_time: u32,
}

/// An undirected connection between two stations, as listed in a network
/// description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    pub distance: u32,
    #[serde(default)]
    pub transfer_time: u32,
}

impl Connection {
    /// Create a connection without a transfer surcharge.
    pub fn new(from: u32, to: u32, distance: u32) -> Self {
        Self {
            from: StationId::new(from),
            to: StationId::new(to),
            distance,
            transfer_time: 0,
        }
    }

    /// Add a transfer-time surcharge.
    pub fn with_transfer(mut self, transfer_time: u32) -> Self {
        self.transfer_time = transfer_time;
        self
    }
}

/// Adjacency lists for every station with at least one connection.
///
/// Every connection is stored in both directions with identical weights.
/// The graph is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    adjacency: HashMap<StationId, Vec<Edge>>,
}

impl NetworkGraph {
    /// Build the graph from a list of connections.
    ///
    /// Fails if a connection references a station the directory doesn't know.
    pub fn build(
        directory: &StationDirectory,
        connections: &[Connection],
    ) -> Result<Self, NetworkError> {
        let mut adjacency: HashMap<StationId, Vec<Edge>> = HashMap::new();

        for conn in connections {
            for id in [conn.from, conn.to] {
                if !directory.contains(id) {
                    return Err(NetworkError::UnknownStation(id));
                }
            }

            adjacency.entry(conn.from).or_default().push(Edge {
                target: conn.to,
                distance: conn.distance,
                transfer_time: conn.transfer_time,
            });
            adjacency.entry(conn.to).or_default().push(Edge {
                target: conn.from,
                distance: conn.distance,
                transfer_time: conn.transfer_time,
            });
        }

        Ok(Self { adjacency })
    }

    /// Edges leaving a station. Isolated or unknown stations have none.
    pub fn neighbors(&self, id: StationId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of undirected connections.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}
