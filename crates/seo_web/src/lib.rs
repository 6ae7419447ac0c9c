use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/research", post(handlers::research))
        .route("/api/keywords/:keyword", get(handlers::keywords))
        .route("/api/gaps", post(handlers::fill_gaps))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use seo_core::{EnhancedResearchData, Result};
}
