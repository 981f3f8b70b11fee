//! Tourvia Tourism Content API
//!
//! A Rust REST API server for tourism content: attractions and routes,
//! moderated reviews, bookings with server-side pricing, and an AI-assisted
//! recommendation endpoint.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
