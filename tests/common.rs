#![allow(dead_code)]
use stationwatch::db::queries;
use stationwatch::db::store::CheckinStore;
use stationwatch::models::checkin::NewCheckin;
use stationwatch::models::employee::Employee;
use stationwatch::models::station::Station;
use std::env;
use std::path::PathBuf;

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stationwatch.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

pub fn open_store(name: &str) -> CheckinStore {
    CheckinStore::open(&setup_test_db(name)).expect("open store")
}

pub fn station(sid: &str, name: &str, lat: &str, lon: &str, radius_m: &str) -> Station {
    Station {
        sid: sid.to_string(),
        name: name.to_string(),
        lat: lat.to_string(),
        lon: lon.to_string(),
        radius_m: radius_m.to_string(),
        unit: String::new(),
    }
}

pub fn seed_station(store: &CheckinStore, st: &Station) {
    queries::upsert_station(store.conn(), st).expect("seed station");
}

pub fn seed_employee(store: &CheckinStore, uid: &str, name: &str) {
    let emp = Employee {
        uid: uid.to_string(),
        name: name.to_string(),
        tel: Some("081-234-5678".to_string()),
        line_user_id: None,
        line_name: None,
    };
    queries::upsert_employee(store.conn(), &emp).expect("seed employee");
}

pub fn new_checkin(user_id: &str, user_name: &str, sid: &str, job: &str) -> NewCheckin {
    NewCheckin {
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        sid: sid.to_string(),
        station_name: format!("Station {sid}"),
        job: job.to_string(),
        ..Default::default()
    }
}
