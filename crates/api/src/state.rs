use std::sync::Arc;

use paperdeck_core::ai::AiResponder;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: paperdeck_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AI responder backing the ask endpoint. Swapping in a real model
    /// backend means swapping this value, nothing else.
    pub ai: Arc<dyn AiResponder>,
}
