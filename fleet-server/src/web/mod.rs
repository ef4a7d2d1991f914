//! Web layer for the fleet dashboard.
//!
//! Server-rendered HTML forms for every page, with JSON answers for API
//! clients on the route and report endpoints.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LiveAdvisor};
pub use templates::*;
