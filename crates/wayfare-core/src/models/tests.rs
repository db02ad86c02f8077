use jiff::Timestamp;

use crate::{
    interval::{self, TimeInterval},
    models::{Entity, Event, Location, Member, SessionContext, Trip},
};

fn test_interval() -> TimeInterval {
    TimeInterval::new(
        interval::date(2025, 7, 1).unwrap(),
        interval::time(9, 0, 0).unwrap(),
        interval::date(2025, 7, 10).unwrap(),
        interval::time(17, 0, 0).unwrap(),
    )
    .unwrap()
}

fn event_interval() -> TimeInterval {
    TimeInterval::new(
        interval::date(2025, 7, 3).unwrap(),
        interval::time(10, 0, 0).unwrap(),
        interval::date(2025, 7, 3).unwrap(),
        interval::time(12, 0, 0).unwrap(),
    )
    .unwrap()
}

fn test_trip() -> Trip {
    Trip {
        id: "42".to_string(),
        title: "Summer Getaway".to_string(),
        description: Some("Road trip across Ontario".to_string()),
        location: Some("Toronto to Ottawa".to_string()),
        interval: test_interval(),
        members: vec![
            Member {
                id: "1".to_string(),
                name: "Klodiana".to_string(),
                email: Some("klodiana@example.com".to_string()),
            },
            Member {
                id: "2".to_string(),
                name: "Alex".to_string(),
                email: None,
            },
        ],
        events: vec![Event {
            id: "7".to_string(),
            trip_id: "42".to_string(),
            title: "Museum visit".to_string(),
            description: None,
            location: None,
            interval: event_interval(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }],
        next_event_id: 8,
        next_member_id: 3,
        created_by: Some("klodiana".to_string()),
        created_at: Timestamp::from_second(1640995200).unwrap(),
        updated_at: Timestamp::from_second(1641081600).unwrap(),
    }
}

#[test]
fn test_entity_with_id() {
    let trip = Trip::new("Weekend", test_interval());
    assert!(trip.id().is_empty());

    let trip = trip.with_id("99".to_string());
    assert_eq!(trip.id(), "99");

    let event = Event::new("Dinner", event_interval()).with_id("3".to_string());
    assert_eq!(event.id(), "3");

    let member = Member::new("Sam").with_id("5".to_string());
    assert_eq!(member.id(), "5");
}

#[test]
fn test_trip_event_and_member_lookup() {
    let trip = test_trip();
    assert_eq!(trip.event("7").map(|e| e.title.as_str()), Some("Museum visit"));
    assert!(trip.event("999").is_none());
    assert_eq!(trip.member("2").map(|m| m.name.as_str()), Some("Alex"));
    assert!(trip.member("999").is_none());
}

#[test]
fn test_trip_display() {
    let output = test_trip().to_string();

    assert!(output.contains("# 42. Summer Getaway"));
    assert!(output.contains("- When: 2025-07-01 09:00 to 2025-07-10 17:00"));
    assert!(output.contains("- Location: Toronto to Ottawa"));
    assert!(output.contains("- Created by: klodiana"));
    assert!(output.contains("Road trip across Ontario"));
    assert!(output.contains("## Members (2)"));
    assert!(output.contains("- Klodiana <klodiana@example.com>"));
    assert!(output.contains("- Alex"));
    assert!(output.contains("## Events (1)"));
    assert!(output.contains("1. Museum visit (2025-07-03 10:00 to 2025-07-03 12:00)"));
}

#[test]
fn test_trip_display_without_events() {
    let trip = Trip::new("Empty", test_interval());
    let output = trip.to_string();
    assert!(output.contains("## Events (0)"));
    assert!(output.contains("No events scheduled."));
    assert!(!output.contains("## Members"));
}

#[test]
fn test_event_display_standalone() {
    let mut event = Event::new("Museum visit", event_interval()).with_id("7".to_string());
    event.description = Some("Meet at the entrance".to_string());
    event.location = Some(Location {
        latitude: 45.42531,
        longitude: -75.69995,
        address: Some("385 Sussex Dr".to_string()),
        name: Some("National Gallery".to_string()),
    });

    let output = event.to_string();
    assert!(output.contains("### 7. Museum visit"));
    assert!(output.contains("- When: 2025-07-03 10:00 to 2025-07-03 12:00"));
    assert!(output.contains("- Where: National Gallery (45.42531, -75.69995), 385 Sussex Dr"));
    assert!(output.contains("Meet at the entrance"));
}

#[test]
fn test_session_context() {
    let session = SessionContext::new("klodiana");
    assert_eq!(session.user_id, "klodiana");
}

#[test]
fn test_trip_serde_round_trip() {
    let trip = test_trip();
    let json = serde_json::to_string(&trip).unwrap();
    let back: Trip = serde_json::from_str(&json).unwrap();
    assert_eq!(trip, back);
}
