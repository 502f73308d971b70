use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::StoreError;
use crate::middleware::Payload;
use crate::models::{CreateRoomRequest, Message, Room};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/create-room", post(create_room))
        .route("/delete-room/{room_number}", delete(delete_room))
}

// GET /rooms
async fn list_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<Room>> {
    Json(state.store.list_rooms())
}

// POST /create-room
async fn create_room(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<CreateRoomRequest>,
) -> Result<Json<Message>, StoreError> {
    state.store.create_room(req)?;
    Ok(Json(Message::new("Room created successfully")))
}

// DELETE /delete-room/{room_number}
async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(room_number): Path<String>,
) -> Result<Json<Message>, StoreError> {
    state.store.delete_room(&room_number)?;
    Ok(Json(Message::new("Room deleted successfully")))
}
