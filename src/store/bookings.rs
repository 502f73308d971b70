use chrono::Utc;
use tracing::{debug, info, warn};

use super::BookingStore;
use crate::error::{StoreError, BOOKING_ROOM_NOT_FOUND, MISSING_BOOKING_FIELDS, ROOM_UNAVAILABLE};
use crate::models::fields::{required, to_text};
use crate::models::{Booking, BookingStatus, CreateBookingRequest, CustomerBookingView, RoomBookingView};

impl BookingStore {
    pub fn create_booking(&self, req: CreateBookingRequest) -> Result<Booking, StoreError> {
        let (Some(room_id), Some(customer_name), Some(date), Some(start_time), Some(end_time)) = (
            required(req.room_id),
            required(req.customer_name),
            required(req.date),
            required(req.start_time),
            required(req.end_time),
        ) else {
            warn!("create_booking rejected: required fields missing");
            return Err(StoreError::Validation(MISSING_BOOKING_FIELDS.to_string()));
        };
        let room_id = to_text(room_id);
        let date = to_text(date);
        let start_time = to_text(start_time);
        let end_time = to_text(end_time);

        let mut state = self.state.write();
        if !state.rooms.iter().any(|room| room.room_number == room_id) {
            warn!("create_booking rejected: room {} not found", room_id);
            return Err(StoreError::NotFound(BOOKING_ROOM_NOT_FOUND.to_string()));
        }

        let available = self.policy.is_available(
            state.bookings_for_room(&room_id),
            &date,
            &start_time,
            &end_time,
        );
        if !available {
            warn!("create_booking rejected: room {} busy on {} {}-{}", room_id, date, start_time, end_time);
            return Err(StoreError::Conflict(ROOM_UNAVAILABLE.to_string()));
        }

        // Брони никогда не удаляются, поэтому длина журнала + 1 монотонна
        let booking = Booking {
            booking_id: state.bookings.len() as u64 + 1,
            room_id,
            customer_name: to_text(customer_name),
            date,
            start_time,
            end_time,
            booking_date: Utc::now(),
            booking_status: BookingStatus::Confirmed,
        };
        state.bookings.push(booking.clone());
        info!(
            "Booking {} confirmed: room {} for {} on {}",
            booking.booking_id, booking.room_id, booking.customer_name, booking.date
        );

        Ok(booking)
    }

    pub fn list_bookings_by_room(&self, room_number: &str) -> Vec<RoomBookingView> {
        let state = self.state.read();
        state.bookings_for_room(room_number).map(RoomBookingView::from).collect()
    }

    pub fn list_all_bookings_with_customer(&self) -> Vec<CustomerBookingView> {
        let state = self.state.read();
        state.bookings.iter().map(CustomerBookingView::from).collect()
    }

    /// Полная история клиента; сравнение имени точное, с учётом регистра.
    pub fn list_bookings_by_customer(&self, customer_name: &str) -> Vec<Booking> {
        let history: Vec<Booking> = self
            .state
            .read()
            .bookings
            .iter()
            .filter(|booking| booking.customer_name == customer_name)
            .cloned()
            .collect();
        debug!("Customer {} has {} bookings", customer_name, history.len());
        history
    }

    #[cfg(test)]
    pub(crate) fn booking_count(&self) -> usize {
        self.state.read().bookings.len()
    }
}
