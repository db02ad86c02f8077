mod common;

use common::{museum_event, span, summer_trip};
use tempfile::TempDir;
use wayfare_core::{
    Database, ErrorKind, Event, Location, Member, RecordSource, SessionContext, SqliteTripSource,
    Trip,
};

fn open_db(dir: &TempDir) -> Database {
    Database::new(dir.path().join("wayfare.db")).expect("open database")
}

#[test]
fn test_create_and_get_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);

    let mut trip = summer_trip();
    trip.created_by = Some("klodiana".to_string());
    trip.next_event_id = 5;
    let created = db.create_trip(trip).expect("create trip");
    assert_eq!(created.id, "1");

    let fetched = db
        .get_trip(&created.id)
        .expect("get trip")
        .expect("trip exists");
    assert_eq!(fetched.title, "Summer Getaway");
    assert_eq!(fetched.description.as_deref(), Some("Road trip across Ontario"));
    assert_eq!(fetched.location.as_deref(), Some("Toronto to Ottawa"));
    assert_eq!(fetched.interval, created.interval);
    assert_eq!(fetched.created_by.as_deref(), Some("klodiana"));
    // Child-id counters ride along with the trip row.
    assert_eq!(fetched.next_event_id, 5);
    assert_eq!(fetched.next_member_id, 1);
}

#[test]
fn test_get_missing_or_malformed_id_is_none() {
    let dir = TempDir::new().expect("temp dir");
    let db = open_db(&dir);

    assert!(db.get_trip("999").expect("query").is_none());
    // Non-numeric ids cannot match any row.
    assert!(db.get_trip("not-a-number").expect("query").is_none());
}

#[test]
fn test_children_persist_with_trip() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);

    let mut trip = summer_trip();
    let mut event = museum_event();
    event.id = "1".to_string();
    event.location = Some(Location {
        latitude: 43.66771,
        longitude: -79.39480,
        address: Some("100 Queen's Park, Toronto".to_string()),
        name: Some("ROM".to_string()),
    });
    trip.events.push(event);
    let mut member = Member::new("Klodiana");
    member.id = "1".to_string();
    member.email = Some("klodiana@example.com".to_string());
    trip.members.push(member);

    let created = db.create_trip(trip).expect("create trip");
    let fetched = db
        .get_trip(&created.id)
        .expect("get trip")
        .expect("trip exists");

    assert_eq!(fetched.events.len(), 1);
    let event = &fetched.events[0];
    assert_eq!(event.title, "Museum visit");
    assert_eq!(event.trip_id, created.id);
    let location = event.location.as_ref().expect("location persisted");
    assert_eq!(location.name.as_deref(), Some("ROM"));
    assert_eq!(location.address.as_deref(), Some("100 Queen's Park, Toronto"));

    assert_eq!(fetched.members.len(), 1);
    assert_eq!(fetched.members[0].name, "Klodiana");
    assert_eq!(
        fetched.members[0].email.as_deref(),
        Some("klodiana@example.com")
    );
}

#[test]
fn test_events_come_back_in_schedule_order() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);

    let mut trip = summer_trip();
    let mut dinner = Event::new("Dinner", span(3, 18, 3, 20));
    dinner.id = "1".to_string();
    let mut breakfast = Event::new("Breakfast", span(3, 8, 3, 9));
    breakfast.id = "2".to_string();
    trip.events.push(dinner);
    trip.events.push(breakfast);

    let created = db.create_trip(trip).expect("create trip");
    let fetched = db
        .get_trip(&created.id)
        .expect("get trip")
        .expect("trip exists");

    let titles: Vec<&str> = fetched.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Breakfast", "Dinner"]);
}

#[test]
fn test_list_newest_first() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);

    db.create_trip(summer_trip()).expect("first");
    db.create_trip(Trip::new("City Break", span(12, 9, 14, 17)))
        .expect("second");

    let trips = db.list_trips().expect("list");
    assert_eq!(trips.len(), 2);
    // Equal created_at timestamps fall back to id order.
    assert_eq!(trips[0].title, "City Break");
    assert_eq!(trips[1].title, "Summer Getaway");
}

#[test]
fn test_update_replaces_children_wholesale() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);

    let mut trip = summer_trip();
    let mut event = museum_event();
    event.id = "1".to_string();
    trip.events.push(event);
    let created = db.create_trip(trip).expect("create trip");

    let mut edited = created.clone();
    edited.title = "Fall Colours".to_string();
    edited.events.clear();
    let mut hike = Event::new("Hike", span(5, 9, 5, 12));
    hike.id = "2".to_string();
    edited.events.push(hike);

    let updated = db.update_trip(edited).expect("update trip");
    assert!(updated.updated_at >= created.updated_at);

    let fetched = db
        .get_trip(&created.id)
        .expect("get trip")
        .expect("trip exists");
    assert_eq!(fetched.title, "Fall Colours");
    assert_eq!(fetched.events.len(), 1);
    assert_eq!(fetched.events[0].title, "Hike");
    assert_eq!(fetched.events[0].id, "2");
}

#[test]
fn test_update_missing_trip_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);

    let mut ghost = summer_trip();
    ghost.id = "999".to_string();
    let err = db.update_trip(ghost).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_cascades_to_children() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);

    let mut trip = summer_trip();
    let mut event = museum_event();
    event.id = "1".to_string();
    trip.events.push(event);
    let mut member = Member::new("Klodiana");
    member.id = "1".to_string();
    trip.members.push(member);
    let created = db.create_trip(trip).expect("create trip");

    db.delete_trip(&created.id).expect("delete trip");
    assert!(db.get_trip(&created.id).expect("query").is_none());

    // Child rows went with the trip.
    let connection =
        rusqlite::Connection::open(dir.path().join("wayfare.db")).expect("raw connection");
    let events: i64 = connection
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
        .expect("count events");
    let members: i64 = connection
        .query_row("SELECT COUNT(*) FROM members", [], |row| row.get(0))
        .expect("count members");
    assert_eq!(events, 0);
    assert_eq!(members, 0);
}

#[test]
fn test_delete_missing_trip_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let mut db = open_db(&dir);
    let err = db.delete_trip("999").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let err = db.delete_trip("not-a-number").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_reopen_preserves_data() {
    let dir = TempDir::new().expect("temp dir");
    let id = {
        let mut db = open_db(&dir);
        db.create_trip(summer_trip()).expect("create trip").id
    };

    // Schema initialization on reopen leaves existing rows alone.
    let db = open_db(&dir);
    let fetched = db.get_trip(&id).expect("get trip").expect("trip exists");
    assert_eq!(fetched.title, "Summer Getaway");
}

#[test]
fn test_sqlite_source_stamps_session_user() {
    let dir = TempDir::new().expect("temp dir");
    let source = SqliteTripSource::new(
        dir.path().join("wayfare.db"),
        SessionContext::new("klodiana"),
    );

    let created = source.insert(summer_trip()).expect("insert");
    assert_eq!(created.created_by.as_deref(), Some("klodiana"));

    let all = source.get_all().expect("get_all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].created_by.as_deref(), Some("klodiana"));

    source.delete_by_id(&created.id).expect("delete");
    assert!(source.get_all().expect("get_all").is_empty());
}
