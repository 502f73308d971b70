pub mod booking;
pub mod fields;
pub mod room;

pub use booking::{
    Booking, BookingStatus, CreateBookingRequest, CustomerBookingView, RoomBookingView,
    RoomWithBookings,
};
pub use room::{CreateRoomRequest, Room};

use serde::Serialize;

/// Тело ответа `{ "message": ... }` для подтверждений и ошибок.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
