//! Basic usage example for fieldcheck
//!
//! Run with `RUST_LOG=fieldcheck=trace` to see each recorded failure.

use chrono::{TimeZone, Utc};
use fieldcheck::prelude::*;
use tracing_subscriber::EnvFilter;

struct Booking {
    guest: String,
    nights: u32,
    phone: String,
    room: &'static str,
    check_in: chrono::DateTime<Utc>,
}

fn validate(booking: &Booking) -> Accumulator {
    let season_start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let season_end = Utc.with_ymd_and_hms(2026, 9, 30, 23, 59, 59).unwrap();

    let mut acc = Accumulator::new();
    acc.not_empty(&booking.guest, "guest", None);
    acc.text_length(&booking.guest, 1, 40, "guest", None);
    acc.in_range(booking.nights, 1, 14, "nights", None);
    acc.matches(&booking.phone, r"^[0-9]{3}-[0-9]{4}-[0-9]{4}$", "phone", None);
    acc.contains(booking.room, &["single", "double", "suite"], "room", None);
    acc.time_in_range(&booking.check_in, &season_start, &season_end, "check_in", None);
    acc
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let booking = Booking {
        guest: String::new(),
        nights: 21,
        phone: "090-1234-1234".into(),
        room: "penthouse",
        check_in: Utc.with_ymd_and_hms(2026, 10, 15, 15, 0, 0).unwrap(),
    };

    let acc = validate(&booking);
    let mut errors: Vec<_> = acc.errors().iter().collect();
    errors.sort();

    for (field, message) in errors {
        println!("{field}: {message}");
    }
}
