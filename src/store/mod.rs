//! In-memory registry of rooms and ledger of bookings.
//!
//! Both collections sit behind one lock so that every check-then-act
//! sequence (existence check + push, index lookup + remove) is atomic with
//! respect to concurrent requests.

use parking_lot::RwLock;

use crate::models::{Booking, Room};

mod availability;
mod bookings;
mod reports;
mod rooms;

pub use availability::AvailabilityPolicy;

#[derive(Debug, Default)]
pub struct BookingStore {
    state: RwLock<StoreState>,
    policy: AvailabilityPolicy,
}

#[derive(Debug, Default)]
struct StoreState {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl StoreState {
    fn bookings_for_room<'a>(&'a self, room_number: &'a str) -> impl Iterator<Item = &'a Booking> + 'a {
        self.bookings
            .iter()
            .filter(move |booking| booking.room_id == room_number)
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AvailabilityPolicy) -> Self {
        Self {
            state: RwLock::default(),
            policy,
        }
    }

    pub fn policy(&self) -> AvailabilityPolicy {
        self.policy
    }
}
