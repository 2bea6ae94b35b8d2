//! End-to-end status scenarios: events appended through the store, status
//! computed through the same path the `/api/status` endpoint uses.

mod common;
use common::{new_checkin, open_store, seed_station, station};

use chrono::{DateTime, Utc};
use stationwatch::core::status::{ReferenceTime, Roster, StatusPolicy, compute_status};
use stationwatch::models::status::StatusBucket;

const JOB: &str = "เข้าปฏิบัติงานกะ 08:00-20:00";

fn tz() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(7 * 3600).unwrap()
}

fn roster(sids: &[&str]) -> Roster {
    Roster {
        sids: sids.iter().map(|s| s.to_string()).collect(),
        day_shift_sids: vec!["TMG".to_string(), "KTM".to_string()],
        dual_post_sid: Some("BKO".to_string()),
    }
}

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn stored_events_drive_the_buckets() {
    let store = open_store("status_store_roundtrip");
    seed_station(&store, &station("NTB", "Nonthaburi", "13.7", "100.5", "100"));
    seed_station(&store, &station("TSA", "Thonburi South", "13.6", "100.4", "100"));

    store
        .append_at(new_checkin("U1", "Somchai", "NTB", JOB), at("2024-01-01T08:00:00Z"))
        .unwrap();

    let records = compute_status(
        ReferenceTime::Now(at("2024-01-01T15:00:00Z")),
        &roster(&["NTB", "TSA"]),
        &store.stations().unwrap(),
        &store.all_events().unwrap(),
        StatusPolicy::default(),
        tz(),
    );

    assert_eq!(records[0].bucket, StatusBucket::Ok);
    assert_eq!(records[0].last_event.as_ref().unwrap().user_name, "Somchai");
    assert_eq!(records[1].bucket, StatusBucket::Offline);
}

#[test]
fn seven_and_nine_hour_scenarios() {
    let store = open_store("status_7h_9h");
    seed_station(&store, &station("NTB", "Nonthaburi", "13.7", "100.5", "100"));
    store
        .append_at(new_checkin("U1", "Somchai", "NTB", JOB), at("2024-01-01T08:00:00Z"))
        .unwrap();

    let stations = store.stations().unwrap();
    let events = store.all_events().unwrap();

    let ok = compute_status(
        ReferenceTime::Now(at("2024-01-01T15:00:00Z")),
        &roster(&["NTB"]),
        &stations,
        &events,
        StatusPolicy::default(),
        tz(),
    );
    assert_eq!(ok[0].bucket, StatusBucket::Ok);

    let late = compute_status(
        ReferenceTime::Now(at("2024-01-01T17:00:00Z")),
        &roster(&["NTB"]),
        &stations,
        &events,
        StatusPolicy::default(),
        tz(),
    );
    assert_eq!(late[0].bucket, StatusBucket::Late);
}

#[test]
fn saturday_morning_day_shift_is_offline_even_with_a_fresh_event() {
    let store = open_store("status_saturday");
    seed_station(&store, &station("TMG", "Thamuang", "14.0", "99.6", "100"));
    // Saturday 2024-01-06 09:30 local
    store
        .append_at(new_checkin("U1", "Somchai", "TMG", "Day Time"), at("2024-01-06T02:30:00Z"))
        .unwrap();

    // Saturday 10:00 local
    let records = compute_status(
        ReferenceTime::Now(at("2024-01-06T03:00:00Z")),
        &roster(&["TMG"]),
        &store.stations().unwrap(),
        &store.all_events().unwrap(),
        StatusPolicy::default(),
        tz(),
    );
    assert_eq!(records[0].bucket, StatusBucket::Offline);
    assert_eq!(records[0].label.as_deref(), Some("off duty"));
}

#[test]
fn manual_test_clock_hides_later_events() {
    let store = open_store("status_override");
    seed_station(&store, &station("NTB", "Nonthaburi", "13.7", "100.5", "100"));
    store
        .append_at(new_checkin("U1", "Somchai", "NTB", JOB), at("2024-01-01T12:00:00Z"))
        .unwrap();

    let stations = store.stations().unwrap();
    let events = store.all_events().unwrap();

    let overridden = compute_status(
        ReferenceTime::Override(at("2024-01-01T10:00:00Z")),
        &roster(&["NTB"]),
        &stations,
        &events,
        StatusPolicy::default(),
        tz(),
    );
    assert_eq!(overridden[0].bucket, StatusBucket::Offline);

    let live = compute_status(
        ReferenceTime::Now(at("2024-01-01T10:00:00Z")),
        &roster(&["NTB"]),
        &stations,
        &events,
        StatusPolicy::default(),
        tz(),
    );
    assert_eq!(live[0].bucket, StatusBucket::Ok);
}

#[test]
fn policy_variants_disagree_only_past_16_hours() {
    let store = open_store("status_policies");
    seed_station(&store, &station("NTB", "Nonthaburi", "13.7", "100.5", "100"));
    store
        .append_at(new_checkin("U1", "Somchai", "NTB", JOB), at("2024-01-01T08:00:00Z"))
        .unwrap();

    let stations = store.stations().unwrap();
    let events = store.all_events().unwrap();
    let reference = ReferenceTime::Now(at("2024-01-02T00:30:00Z")); // 16.5h elapsed, 07:30 local

    let tiered = compute_status(reference, &roster(&["NTB"]), &stations, &events, StatusPolicy::Tiered8h16h, tz());
    assert_eq!(tiered[0].bucket, StatusBucket::Offline);

    let strict = compute_status(reference, &roster(&["NTB"]), &stations, &events, StatusPolicy::Strict8hCutoff, tz());
    assert_eq!(strict[0].bucket, StatusBucket::Late);

    // before 08:00 local the overnight entry still covers the shift
    let any = compute_status(reference, &roster(&["NTB"]), &stations, &events, StatusPolicy::AnyRecentEvent, tz());
    assert_eq!(any[0].bucket, StatusBucket::Ok);
}
