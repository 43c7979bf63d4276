//! Network construction errors.

use std::path::PathBuf;

use crate::domain::StationId;

/// Errors raised while loading stations or building the graph.
///
/// All of these are fatal at startup: they mean the network data is
/// inconsistent or unreadable.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A connection references a station missing from the directory
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// Two stations in the seed share an id
    #[error("duplicate station id {0}")]
    DuplicateStationId(StationId),

    /// The network file could not be read
    #[error("failed to read network file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The network file is not a valid network description
    #[error("invalid network file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
