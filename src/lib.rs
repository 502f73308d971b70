pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod store;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
pub struct AppState {
    pub store: store::BookingStore,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let store = store::BookingStore::with_policy(
            store::AvailabilityPolicy::from_flags(&config.features),
        );
        tracing::info!("Availability policy: {:?}", store.policy());
        Arc::new(Self { store, config })
    }
}

/// Полный роутер сервиса вместе со служебными маршрутами.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Hall Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
