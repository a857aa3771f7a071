//! REST API module for fraud-rs
//!
//! Exposes predictions over HTTP

pub mod handlers;
pub mod server;

pub use handlers::{ApiResponse, AppState};
pub use server::ApiServer;
