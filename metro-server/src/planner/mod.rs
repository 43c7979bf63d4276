//! Route planner using Dijkstra's algorithm.
//!
//! Finds the minimum-distance route between two stations of the metro
//! network. Elapsed time (including interchange transfer penalties) is
//! accumulated along the chosen path but does not drive the search.

mod frontier;
mod search;

pub use frontier::{Frontier, FrontierEntry};
pub use search::{Planner, RouteError, RouteResult, find_route};
