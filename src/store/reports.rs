use super::BookingStore;
use crate::models::{CustomerBookingView, RoomBookingView, RoomWithBookings};

impl BookingStore {
    /// Каждая живая комната со своими бронями; пустой список, если броней нет.
    pub fn rooms_with_bookings(&self) -> Vec<RoomWithBookings> {
        let state = self.state.read();
        state
            .rooms
            .iter()
            .map(|room| RoomWithBookings {
                room_number: room.room_number.clone(),
                bookings: state
                    .bookings_for_room(&room.room_number)
                    .map(RoomBookingView::from)
                    .collect(),
            })
            .collect()
    }

    pub fn customers_with_bookings(&self) -> Vec<CustomerBookingView> {
        self.list_all_bookings_with_customer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, CreateBookingRequest, CreateRoomRequest};
    use serde_json::json;

    fn add_room(store: &BookingStore, number: &str) {
        store
            .create_room(CreateRoomRequest {
                room_number: Some(json!(number)),
                seats_available: Some(json!(2)),
                amenities: Some(json!("whiteboard")),
                price_per_hour: Some(json!(15.5)),
            })
            .unwrap();
    }

    fn book(store: &BookingStore, room: &str, customer: &str) {
        store
            .create_booking(CreateBookingRequest {
                room_id: Some(json!(room)),
                customer_name: Some(json!(customer)),
                date: Some(json!("2024-03-05")),
                start_time: Some(json!("09:00")),
                end_time: Some(json!("10:00")),
            })
            .unwrap();
    }

    #[test]
    fn room_without_bookings_reports_empty_list() {
        let store = BookingStore::new();
        add_room(&store, "R1");

        let report = store.rooms_with_bookings();

        assert_eq!(report.len(), 1);
        assert!(report[0].bookings.is_empty());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, json!([{ "roomNumber": "R1", "bookings": [] }]));
    }

    #[test]
    fn bookings_are_grouped_under_their_room() {
        let store = BookingStore::new();
        add_room(&store, "R1");
        add_room(&store, "R2");
        book(&store, "R1", "Alice");
        book(&store, "R2", "Bob");
        book(&store, "R1", "Carol");

        let report = store.rooms_with_bookings();

        let r1: Vec<_> = report[0].bookings.iter().map(|b| b.customer_name.as_str()).collect();
        let r2: Vec<_> = report[1].bookings.iter().map(|b| b.customer_name.as_str()).collect();
        assert_eq!(r1, vec!["Alice", "Carol"]);
        assert_eq!(r2, vec!["Bob"]);
        assert_eq!(report[0].bookings[0].booking_status, BookingStatus::Confirmed);
    }

    #[test]
    fn deleted_rooms_drop_out_of_room_report_but_not_customer_report() {
        let store = BookingStore::new();
        add_room(&store, "R1");
        book(&store, "R1", "Alice");
        store.delete_room("R1").unwrap();

        assert!(store.rooms_with_bookings().is_empty());
        let customers = store.customers_with_bookings();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].room_id, "R1");
        assert_eq!(customers[0].customer_name, "Alice");
    }
}
