//! HTTP service for the member registry.
//!
//! # Responsibility
//! - Expose member create/get/update/delete under `/miembros`.
//! - Translate service outcomes into the per-endpoint response shapes.
//! - Load configuration and wire storage into request handlers.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

pub use api::{build_app, router, BASE_PATH};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
