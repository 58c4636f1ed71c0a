//! End-to-end engine flows against a real database file.

mod common;

use common::{
    admin, date, guest, open_engine, open_engine_with_policy, temp_database_path, user,
    window_hours,
};
use slotbook::engine::CreateOptions;
use slotbook::{Error, ReservationRecord, Status, TransitionPolicy, UserProfile, UserId};

#[test]
fn test_guest_books_until_day_is_full() {
    let (_dir, path) = temp_database_path();
    let mut engine = open_engine(&path);
    let day = date("2024-06-01");

    let first = engine
        .create(&guest(0), CreateOptions::new(day, "10:00", "Haircut"))
        .unwrap();
    assert_eq!(first.status(), Status::Pending);
    assert!(first.is_guest());

    let err = engine
        .create(&guest(1), CreateOptions::new(day, "10:00", "Haircut"))
        .unwrap_err();
    assert!(matches!(err, Error::SlotTaken { .. }));

    let remaining: Vec<String> = window_hours()
        .into_iter()
        .filter(|t| t != "10:00")
        .collect();
    assert_eq!(remaining.len(), 9);

    for (i, time) in remaining.iter().enumerate() {
        assert!(engine.booked_dates().unwrap().is_empty());
        engine
            .create(&guest(i + 2), CreateOptions::new(day, time.as_str(), "Haircut"))
            .unwrap();
    }

    assert_eq!(engine.booked_dates().unwrap(), vec![day]);
    assert_eq!(engine.booked_times(day).unwrap().len(), 10);
    assert!(engine.open_slots(day).unwrap().is_empty());
}

#[test]
fn test_nine_slots_is_not_fully_booked() {
    let (_dir, path) = temp_database_path();
    let mut engine = open_engine(&path);
    let day = date("2024-06-01");

    for (i, time) in window_hours().iter().take(9).enumerate() {
        engine
            .create(&guest(i), CreateOptions::new(day, time.as_str(), "Haircut"))
            .unwrap();
    }

    assert!(engine.booked_dates().unwrap().is_empty());
    assert_eq!(engine.open_slots(day).unwrap().len(), 1);
}

#[test]
fn test_booked_times_exclude_adjacent_days() {
    let (_dir, path) = temp_database_path();
    let mut engine = open_engine(&path);

    engine
        .create(&guest(0), CreateOptions::new(date("2024-05-31"), "18:00", "Shave"))
        .unwrap();
    engine
        .create(&guest(1), CreateOptions::new(date("2024-06-01"), "09:00", "Shave"))
        .unwrap();
    engine
        .create(&guest(2), CreateOptions::new(date("2024-06-02"), "09:00", "Shave"))
        .unwrap();

    let times: Vec<String> = engine
        .booked_times(date("2024-06-01"))
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(times, vec!["09:00"]);
}

#[test]
fn test_data_survives_reopen() {
    let (_dir, path) = temp_database_path();
    let id = {
        let mut engine = open_engine(&path);
        engine
            .create(
                &user("alice"),
                CreateOptions::new(date("2024-06-01"), "11:00", "Color")
                    .with_notes(Some("allergic to ammonia".into())),
            )
            .unwrap()
            .id()
    };

    let engine = open_engine(&path);
    let mine = engine.list_for_user(&user("alice")).unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].reservation.id(), id);
    assert_eq!(mine[0].reservation.notes(), Some("allergic to ammonia"));
}

#[test]
fn test_admin_workflow() {
    let (_dir, path) = temp_database_path();
    let mut engine = open_engine_with_policy(&path, TransitionPolicy::ForwardOnly);

    let alice = user("alice");
    engine
        .put_profile(
            &alice,
            &UserProfile {
                id: UserId::new("alice").unwrap(),
                name: "Alice".into(),
                email: "alice@example.com".into(),
                phone: "555-0111".into(),
            },
        )
        .unwrap();
    let booked = engine
        .create(&alice, CreateOptions::new(date("2024-06-03"), "15:00", "Trim"))
        .unwrap();

    let err = engine
        .update_status(&alice, booked.id(), Some("Confirmed"), None)
        .unwrap_err();
    assert!(matches!(err, Error::Authorization { .. }));

    let confirmed = engine
        .update_status(&admin(), booked.id(), Some("Confirmed"), None)
        .unwrap();
    assert_eq!(confirmed.status(), Status::Confirmed);
    assert!(confirmed.updated_at() >= confirmed.created_at());

    let err = engine
        .update_status(&admin(), booked.id(), Some("Pending"), None)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));

    let views = engine.list_all(&admin()).unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name, "Alice");
    assert_eq!(views[0].status, Status::Confirmed);

    engine.remove_profile(&alice, &UserId::new("alice").unwrap()).unwrap();
    let views = engine.list_all(&admin()).unwrap();
    assert_eq!(views[0].name, "unknown");

    engine.delete(&admin(), booked.id()).unwrap();
    assert!(engine.list_all(&admin()).unwrap().is_empty());

    // Freed slot can be booked again.
    engine
        .create(&guest(9), CreateOptions::new(date("2024-06-03"), "15:00", "Trim"))
        .unwrap();
}

#[test]
fn test_record_export_shape() {
    let (_dir, path) = temp_database_path();
    let mut engine = open_engine(&path);
    let reservation = engine
        .create(&guest(0), CreateOptions::new(date("2024-06-01"), "9:00", "Haircut"))
        .unwrap();

    let json = serde_json::to_value(&reservation).unwrap();
    assert_eq!(json["isGuest"], true);
    assert_eq!(json["date"], "2024-06-01");
    assert_eq!(json["time"], "09:00");
    assert_eq!(json["guestInfo"]["email"], "guest0@example.com");
    assert!(json.get("user").is_none());

    let record: ReservationRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.id, reservation.id());
}
