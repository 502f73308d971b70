use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::StoreError;
use crate::middleware::Payload;
use crate::models::{Booking, CreateBookingRequest, Message};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book-room", post(book_room))
        .route("/customer-booking-history/{customer_name}", get(customer_booking_history))
}

/* ---------- BOOKINGS ---------- */

// POST /book-room
async fn book_room(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<CreateBookingRequest>,
) -> Result<Json<Message>, StoreError> {
    state.store.create_booking(req)?;
    Ok(Json(Message::new("Room booked successfully")))
}

// GET /customer-booking-history/{customer_name}
// Неизвестный клиент - это пустой массив, а не 404.
async fn customer_booking_history(
    State(state): State<Arc<AppState>>,
    Path(customer_name): Path<String>,
) -> Json<Vec<Booking>> {
    Json(state.store.list_bookings_by_customer(&customer_name))
}
