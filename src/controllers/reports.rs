//! reports.rs
//!
//! Сводные представления только для чтения:
//! - комнаты вместе с их бронями;
//! - все брони с именами клиентов.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::{CustomerBookingView, RoomWithBookings};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rooms-with-bookings", get(rooms_with_bookings))
        .route("/customers-with-bookings", get(customers_with_bookings))
}

/// GET /rooms-with-bookings
async fn rooms_with_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<RoomWithBookings>> {
    Json(state.store.rooms_with_bookings())
}

/// GET /customers-with-bookings
async fn customers_with_bookings(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CustomerBookingView>> {
    Json(state.store.customers_with_bookings())
}
