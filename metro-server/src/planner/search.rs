//! Shortest-path route search.
//!
//! Dijkstra's algorithm keyed on cumulative distance. Travel time is carried
//! along the winning distance path but never influences which path wins.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::StationId;
use crate::network::NetworkGraph;

use super::frontier::Frontier;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Source and destination are not connected
    #[error("no route found from station {from} to station {to}")]
    NoPathFound { from: StationId, to: StationId },
}

/// A computed route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    /// Stations from source to destination, both inclusive.
    pub path: Vec<StationId>,

    /// Sum of edge distances along the path.
    pub total_distance: u64,

    /// Sum of edge distances plus transfer surcharges along the path.
    pub total_time: u64,
}

impl RouteResult {
    /// Number of hops (edges) travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Best known way of reaching a station during one search.
#[derive(Debug, Clone, Copy)]
struct Label {
    distance: u64,
    time: u64,
    predecessor: Option<StationId>,
}

/// Route planner over an immutable network graph.
///
/// Each call to [`Planner::find_route`] keeps its own frontier and labels, so
/// one planner can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    graph: &'a NetworkGraph,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a NetworkGraph) -> Self {
        Self { graph }
    }

    /// Find the minimum-distance route from `source` to `destination`.
    ///
    /// Both ids are expected to exist in the station directory. When two
    /// paths reach a station with the same distance, the one relaxed first
    /// is kept, even if the other would be faster.
    ///
    /// Totals are summed in `u64` with saturating addition.
    pub fn find_route(
        &self,
        source: StationId,
        destination: StationId,
    ) -> Result<RouteResult, RouteError> {
        let mut labels: HashMap<StationId, Label> = HashMap::new();
        labels.insert(
            source,
            Label {
                distance: 0,
                time: 0,
                predecessor: None,
            },
        );

        let mut frontier = Frontier::new();
        frontier.push(source, 0);
        let mut expanded = 0usize;

        while let Some(entry) = frontier.pop() {
            let current = entry.station;
            if current == destination {
                break;
            }

            let Some(&here) = labels.get(&current) else {
                continue;
            };
            if entry.cost > here.distance {
                continue; // stale
            }
            expanded += 1;

            for edge in self.graph.neighbors(current) {
                let candidate_distance = here.distance.saturating_add(u64::from(edge.distance));
                let candidate_time = here
                    .time
                    .saturating_add(u64::from(edge.distance))
                    .saturating_add(u64::from(edge.transfer_time));

                let improves = labels
                    .get(&edge.target)
                    .is_none_or(|known| candidate_distance < known.distance);

                if improves {
                    labels.insert(
                        edge.target,
                        Label {
                            distance: candidate_distance,
                            time: candidate_time,
                            predecessor: Some(current),
                        },
                    );
                    frontier.push(edge.target, candidate_distance);
                }
            }
        }

        let Some(reached) = labels.get(&destination) else {
            debug!(from = %source, to = %destination, expanded, "no route");
            return Err(RouteError::NoPathFound {
                from: source,
                to: destination,
            });
        };

        let mut path = vec![destination];
        let mut cursor = destination;
        while let Some(previous) = labels.get(&cursor).and_then(|l| l.predecessor) {
            path.push(previous);
            cursor = previous;
        }
        path.reverse();

        debug!(
            from = %source,
            to = %destination,
            distance = reached.distance,
            time = reached.time,
            hops = path.len() - 1,
            expanded,
            "route found"
        );

        Ok(RouteResult {
            path,
            total_distance: reached.distance,
            total_time: reached.time,
        })
    }
}

/// Find the minimum-distance route between two stations.
///
/// Shorthand for `Planner::new(graph).find_route(source, destination)`.
pub fn find_route(
    source: StationId,
    destination: StationId,
    graph: &NetworkGraph,
) -> Result<RouteResult, RouteError> {
    Planner::new(graph).find_route(source, destination)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
