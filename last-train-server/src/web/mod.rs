//! Web layer for the last-train-home form.
//!
//! Session-cookied HTML pages plus the JSON station feed.

mod dto;
mod routes;
mod session;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use session::{SESSION_COOKIE, session_bootstrap};
pub use state::AppState;
pub use templates::*;
