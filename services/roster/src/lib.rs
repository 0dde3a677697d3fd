//! Student roster service
//!
//! A session-gated web page for managing student records kept in JSON
//! documents. The router is built from an [`state::AppState`] whose document
//! store and session store are injected by the caller.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

pub use config::AppConfig;
pub use error::{WebError, WebResult};
pub use routes::create_router;
pub use state::AppState;
