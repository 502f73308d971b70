use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::Message;

pub const MISSING_ROOM_FIELDS: &str = "Room number,seats Available,pricePer hour are required";
pub const MISSING_BOOKING_FIELDS: &str = "RoomId,customerName,date,startTime,endTime are required";
pub const ROOM_EXISTS: &str = "Room number already exists";
pub const BOOKING_ROOM_NOT_FOUND: &str = "Room not Found";
pub const DELETE_ROOM_NOT_FOUND: &str = "Room not found";
pub const ROOM_UNAVAILABLE: &str = "Room is not available for specified time";

/// Ошибки операций хранилища. Сообщение уходит клиенту как есть.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::Conflict(_) => StatusCode::CONFLICT,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (self.status(), Json(Message::new(self.to_string()))).into_response()
    }
}
