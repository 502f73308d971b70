use chrono::NaiveTime;

use crate::config::FeatureFlags;
use crate::models::Booking;

/// Правило проверки занятости комнаты при новом бронировании.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityPolicy {
    /// Комната всегда свободна: пересечения не проверяются.
    #[default]
    AlwaysAvailable,
    /// Отказ, если на ту же дату есть бронь с пересекающимся интервалом.
    RejectOverlaps,
}

impl AvailabilityPolicy {
    pub fn from_flags(flags: &FeatureFlags) -> Self {
        if flags.enforce_availability {
            AvailabilityPolicy::RejectOverlaps
        } else {
            AvailabilityPolicy::AlwaysAvailable
        }
    }

    pub(crate) fn is_available<'a>(
        &self,
        mut room_bookings: impl Iterator<Item = &'a Booking>,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> bool {
        match self {
            AvailabilityPolicy::AlwaysAvailable => true,
            AvailabilityPolicy::RejectOverlaps => !room_bookings.any(|existing| {
                existing.date == date
                    && intervals_overlap(
                        (existing.start_time.as_str(), existing.end_time.as_str()),
                        (start_time, end_time),
                    )
            }),
        }
    }
}

// Полуоткрытые интервалы [start, end): бронь 10:00-11:00 не мешает 11:00-12:00
fn intervals_overlap(a: (&str, &str), b: (&str, &str)) -> bool {
    match [a.0, a.1, b.0, b.1].map(parse_time) {
        [Some(a_start), Some(a_end), Some(b_start), Some(b_end)] => a_start < b_end && b_start < a_end,
        _ => a.0 < b.1 && b.0 < a.1,
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
