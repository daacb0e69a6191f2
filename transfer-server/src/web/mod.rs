//! Web layer for the transfer guide.
//!
//! Serves the station/track form, a station picker lookup, and a JSON
//! endpoint that turns a feature collection into instructions.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
