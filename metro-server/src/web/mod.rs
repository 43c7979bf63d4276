//! Web layer for the metro planner.
//!
//! Provides HTTP endpoints for the station sheet, route planning, booking
//! and token verification.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
