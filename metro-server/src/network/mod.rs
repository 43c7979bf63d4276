//! Station directory and network graph.
//!
//! The network is loaded once at startup from a [`NetworkDescription`] and is
//! read-only afterwards, so it can be shared across requests without locking.

mod description;
mod directory;
mod error;
mod graph;

pub use description::NetworkDescription;
pub use directory::StationDirectory;
pub use error::NetworkError;
pub use graph::{Connection, Edge, NetworkGraph};

/// A station directory together with the graph built over its ids.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    pub directory: StationDirectory,
    pub graph: NetworkGraph,
}

impl MetroNetwork {
    /// Load the directory, then build the graph on top of it.
    pub fn build(description: NetworkDescription) -> Result<Self, NetworkError> {
        let directory = StationDirectory::load(description.stations)?;
        let graph = NetworkGraph::build(&directory, &description.connections)?;
        Ok(Self { directory, graph })
    }
}
