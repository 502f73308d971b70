use tracing::{debug, info, warn};

use super::BookingStore;
use crate::error::{StoreError, DELETE_ROOM_NOT_FOUND, MISSING_ROOM_FIELDS, ROOM_EXISTS};
use crate::models::fields::{required, to_text};
use crate::models::{CreateRoomRequest, Room};

impl BookingStore {
    /// Все комнаты в порядке создания.
    pub fn list_rooms(&self) -> Vec<Room> {
        let rooms = self.state.read().rooms.clone();
        debug!("Listing {} rooms", rooms.len());
        rooms
    }

    pub fn create_room(&self, req: CreateRoomRequest) -> Result<Room, StoreError> {
        let (Some(room_number), Some(seats_available), Some(price_per_hour)) = (
            required(req.room_number),
            required(req.seats_available),
            required(req.price_per_hour),
        ) else {
            warn!("create_room rejected: required fields missing");
            return Err(StoreError::Validation(MISSING_ROOM_FIELDS.to_string()));
        };

        let room = Room {
            room_number: to_text(room_number),
            seats_available,
            amenities: req.amenities,
            price_per_hour,
        };

        let mut state = self.state.write();
        if state.rooms.iter().any(|r| r.room_number == room.room_number) {
            warn!("create_room rejected: room {} already exists", room.room_number);
            return Err(StoreError::Conflict(ROOM_EXISTS.to_string()));
        }
        state.rooms.push(room.clone());
        info!("Room {} created ({} seats)", room.room_number, room.seats_available);

        Ok(room)
    }

    /// Удаляет комнату. Брони этой комнаты остаются в журнале.
    pub fn delete_room(&self, room_number: &str) -> Result<Room, StoreError> {
        let mut state = self.state.write();
        let Some(index) = state.rooms.iter().position(|r| r.room_number == room_number) else {
            warn!("delete_room rejected: room {} not found", room_number);
            return Err(StoreError::NotFound(DELETE_ROOM_NOT_FOUND.to_string()));
        };
        let room = state.rooms.remove(index);
        let orphaned = state.bookings_for_room(room_number).count();
        info!("Room {} deleted, {} bookings keep referencing it", room_number, orphaned);

        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    fn room_request(number: &str) -> CreateRoomRequest {
        CreateRoomRequest {
            room_number: Some(json!(number)),
            seats_available: Some(json!(4)),
            amenities: Some(json!(["projector"])),
            price_per_hour: Some(json!(10)),
        }
    }

    #[test]
    fn create_room_without_amenities_succeeds() {
        let store = BookingStore::new();
        let room = store
            .create_room(CreateRoomRequest {
                amenities: None,
                ..room_request("R1")
            })
            .unwrap();

        assert_eq!(room.room_number, "R1");
        assert_eq!(room.amenities, None);
        assert_eq!(store.list_rooms(), vec![room]);
    }

    #[test]
    fn create_room_requires_number_seats_and_price() {
        let store = BookingStore::new();
        let cases = [
            CreateRoomRequest { room_number: None, ..room_request("R1") },
            CreateRoomRequest { seats_available: Some(json!(0)), ..room_request("R1") },
            CreateRoomRequest { price_per_hour: Some(json!("")), ..room_request("R1") },
        ];

        for req in cases {
            assert_eq!(
                store.create_room(req),
                Err(StoreError::Validation(MISSING_ROOM_FIELDS.to_string()))
            );
        }
        assert!(store.list_rooms().is_empty());
    }

    #[test]
    fn truthy_seats_and_price_are_stored_as_received() {
        let store = BookingStore::new();
        let room = store
            .create_room(CreateRoomRequest {
                seats_available: Some(json!(4.0)),
                price_per_hour: Some(json!("lots")),
                ..room_request("R1")
            })
            .unwrap();

        assert_eq!(room.seats_available, json!(4.0));
        assert_eq!(room.price_per_hour, json!("lots"));
    }

    #[test]
    fn duplicate_with_odd_seats_is_still_a_conflict() {
        let store = BookingStore::new();
        store.create_room(room_request("R3")).unwrap();

        let result = store.create_room(CreateRoomRequest {
            seats_available: Some(json!(-2)),
            ..room_request("R3")
        });

        assert_eq!(result, Err(StoreError::Conflict(ROOM_EXISTS.to_string())));
        assert_eq!(store.list_rooms().len(), 1);
    }

    #[test]
    fn concurrent_creates_of_one_number_admit_a_single_room() {
        let store = Arc::new(BookingStore::new());

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || store.create_room(room_request("R1")))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == StoreError::Conflict(ROOM_EXISTS.to_string())));
        assert_eq!(store.list_rooms().len(), 1);
    }

    #[test]
    fn numeric_room_number_is_stored_as_text() {
        let store = BookingStore::new();
        let room = store
            .create_room(CreateRoomRequest {
                room_number: Some(json!(101)),
                ..room_request("ignored")
            })
            .unwrap();
        assert_eq!(room.room_number, "101");
    }

    #[test]
    fn delete_missing_room_is_not_found() {
        let store = BookingStore::new();
        assert_eq!(
            store.delete_room("R9"),
            Err(StoreError::NotFound(DELETE_ROOM_NOT_FOUND.to_string()))
        );
    }

    #[test]
    fn delete_removes_only_the_matching_room() {
        let store = BookingStore::new();
        store.create_room(room_request("R1")).unwrap();
        store.create_room(room_request("R2")).unwrap();

        let deleted = store.delete_room("R1").unwrap();

        assert_eq!(deleted.room_number, "R1");
        let remaining: Vec<_> = store.list_rooms().into_iter().map(|r| r.room_number).collect();
        assert_eq!(remaining, vec!["R2"]);
    }

    proptest! {
        #[test]
        fn distinct_rooms_are_listed_in_creation_order(
            numbers in proptest::collection::hash_set("[A-Z][0-9]{1,3}", 1..20)
        ) {
            let store = BookingStore::new();
            let numbers: Vec<String> = numbers.into_iter().collect();
            for number in &numbers {
                prop_assert!(store.create_room(room_request(number)).is_ok());
            }

            let listed: Vec<String> = store.list_rooms().into_iter().map(|r| r.room_number).collect();
            prop_assert_eq!(listed, numbers);
        }

        #[test]
        fn duplicate_room_number_leaves_registry_unchanged(number in "[A-Z][0-9]{1,3}") {
            let store = BookingStore::new();
            store.create_room(room_request(&number)).unwrap();
            let before = store.list_rooms();

            let result = store.create_room(room_request(&number));

            prop_assert_eq!(result, Err(StoreError::Conflict(ROOM_EXISTS.to_string())));
            prop_assert_eq!(store.list_rooms(), before);
        }
    }
}
