use wayfare_core::{interval, Event, TimeInterval, Trip};

/// July 2025 interval helper used across the suites.
pub fn span(start_day: i8, start_hour: i8, end_day: i8, end_hour: i8) -> TimeInterval {
    TimeInterval::new(
        interval::date(2025, 7, start_day).expect("valid date"),
        interval::time(start_hour, 0, 0).expect("valid time"),
        interval::date(2025, 7, end_day).expect("valid date"),
        interval::time(end_hour, 0, 0).expect("valid time"),
    )
    .expect("valid interval")
}

/// A ten-day trip spanning July 1-10.
pub fn summer_trip() -> Trip {
    let mut trip = Trip::new("Summer Getaway", span(1, 9, 10, 17));
    trip.description = Some("Road trip across Ontario".to_string());
    trip.location = Some("Toronto to Ottawa".to_string());
    trip
}

/// An unsaved event inside the summer trip's span.
pub fn museum_event() -> Event {
    Event::new("Museum visit", span(3, 10, 3, 12))
}
