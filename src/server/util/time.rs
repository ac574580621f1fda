//! Slot-grid and booking-window calculations.
//!
//! The shop books work on a fixed half-hour grid inside business hours.
//! Emergency calls skip the grid but still go through overlap checking, so
//! everything here works on raw start/duration pairs.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// First bookable hour of the day (local shop time).
pub const BUSINESS_OPEN_HOUR: u32 = 8;

/// Bookings must end by this hour.
pub const BUSINESS_CLOSE_HOUR: u32 = 18;

/// Width of the booking grid.
pub const SLOT_MINUTES: u32 = 30;

/// All slot start times for a given date, open through close.
pub fn slot_grid(date: NaiveDate) -> Vec<NaiveDateTime> {
    let mut slots = Vec::new();
    let mut cursor = date
        .and_hms_opt(BUSINESS_OPEN_HOUR, 0, 0)
        .expect("business open hour is a valid time");
    let close = date
        .and_hms_opt(BUSINESS_CLOSE_HOUR, 0, 0)
        .expect("business close hour is a valid time");

    while cursor < close {
        slots.push(cursor);
        cursor += Duration::minutes(SLOT_MINUTES as i64);
    }

    slots
}

/// Whether a start time lands on the booking grid inside business hours.
pub fn on_slot_grid(start: NaiveDateTime) -> bool {
    if start.second() != 0 || start.minute() % SLOT_MINUTES != 0 {
        return false;
    }

    start.hour() >= BUSINESS_OPEN_HOUR && start.hour() < BUSINESS_CLOSE_HOUR
}

/// Whether an appointment of the given duration ends by close of business.
pub fn within_business_hours(start: NaiveDateTime, duration_minutes: i32) -> bool {
    let close = start
        .date()
        .and_hms_opt(BUSINESS_CLOSE_HOUR, 0, 0)
        .expect("business close hour is a valid time");

    start + Duration::minutes(duration_minutes as i64) <= close
}

/// Half-open interval overlap: `[a, a+da)` intersects `[b, b+db)`.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_minutes: i32,
    b_start: NaiveDateTime,
    b_minutes: i32,
) -> bool {
    let a_end = a_start + Duration::minutes(a_minutes as i64);
    let b_end = b_start + Duration::minutes(b_minutes as i64);

    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    }

    #[test]
    fn grid_covers_business_hours() {
        let slots = slot_grid(date());

        // 8:00 through 17:30 at 30 minute intervals
        assert_eq!(slots.len(), 20);
        assert_eq!(slots[0], date().and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(slots[19], date().and_hms_opt(17, 30, 0).unwrap());
    }

    #[test]
    fn grid_alignment() {
        assert!(on_slot_grid(date().and_hms_opt(9, 0, 0).unwrap()));
        assert!(on_slot_grid(date().and_hms_opt(9, 30, 0).unwrap()));
        assert!(!on_slot_grid(date().and_hms_opt(9, 15, 0).unwrap()));
        assert!(!on_slot_grid(date().and_hms_opt(9, 30, 30).unwrap()));
    }

    #[test]
    fn grid_rejects_after_hours() {
        assert!(!on_slot_grid(date().and_hms_opt(7, 30, 0).unwrap()));
        assert!(!on_slot_grid(date().and_hms_opt(18, 0, 0).unwrap()));
    }

    #[test]
    fn duration_must_fit_before_close() {
        let start = date().and_hms_opt(17, 0, 0).unwrap();

        assert!(within_business_hours(start, 60));
        assert!(!within_business_hours(start, 90));
    }

    #[test]
    fn overlap_is_half_open() {
        let nine = date().and_hms_opt(9, 0, 0).unwrap();
        let ten = date().and_hms_opt(10, 0, 0).unwrap();

        // Back-to-back appointments do not conflict
        assert!(!overlaps(nine, 60, ten, 60));
        // One minute of shared time does
        assert!(overlaps(nine, 61, ten, 60));
        // Containment conflicts
        assert!(overlaps(nine, 180, ten, 30));
    }
}
