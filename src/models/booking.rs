use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingStatus {
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: u64,
    pub room_id: String,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub booking_date: DateTime<Utc>,
    pub booking_status: BookingStatus,
}

// Формат как у JS Date#toJSON: миллисекунды и суффикс Z
fn serialize_timestamp<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: Option<Value>,
    pub customer_name: Option<Value>,
    pub date: Option<Value>,
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
}

/// Бронь в составе комнаты (без roomId).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomBookingView {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_status: BookingStatus,
}

impl From<&Booking> for RoomBookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            customer_name: booking.customer_name.clone(),
            date: booking.date.clone(),
            start_time: booking.start_time.clone(),
            end_time: booking.end_time.clone(),
            booking_status: booking.booking_status,
        }
    }
}

/// Бронь с точки зрения клиента: кто, какая комната, когда.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingView {
    pub customer_name: String,
    pub room_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_status: BookingStatus,
}

impl From<&Booking> for CustomerBookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            customer_name: booking.customer_name.clone(),
            room_id: booking.room_id.clone(),
            date: booking.date.clone(),
            start_time: booking.start_time.clone(),
            end_time: booking.end_time.clone(),
            booking_status: booking.booking_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomWithBookings {
    pub room_number: String,
    pub bookings: Vec<RoomBookingView>,
}
