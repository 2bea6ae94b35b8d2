//! Action-tagged wire protocol, compatible with the spreadsheet endpoint
//! the pages were originally written against: POST bodies carry an
//! `action` field, responses carry a `status` field (`OK` / `FOUND` /
//! `NEED_BIND` / `ERROR`). Outcomes travel in the body, not in HTTP codes.

pub mod handlers;

use crate::config::Config;
use crate::core::filter::ReportFilter;
use crate::core::geofence;
use crate::core::status::{self, ReferenceTime};
use crate::db::{queries, store::CheckinStore};
use crate::errors::{AppError, AppResult};
use crate::models::checkin::NewCheckin;
use crate::models::station::Position;
use crate::models::status::StatusRecord;
use crate::utils::formatting::format_distance;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
#[serde(tag = "action")]
pub enum ActionRequest {
    #[serde(rename = "checkUser")]
    CheckUser {
        #[serde(rename = "lineUserId")]
        line_user_id: String,
        #[serde(rename = "lineName", default)]
        line_name: String,
    },
    #[serde(rename = "bindUser")]
    BindUser {
        uid: String,
        #[serde(rename = "lineUserId")]
        line_user_id: String,
        #[serde(rename = "lineName", default)]
        line_name: String,
    },
    #[serde(rename = "getJobs")]
    GetJobs,
    #[serde(rename = "getAllStations")]
    GetAllStations,
    #[serde(rename = "checkin")]
    Checkin(CheckinRequest),
}

#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    #[serde(rename = "lineUserId")]
    pub line_user_id: String,
    #[serde(rename = "SID")]
    pub sid: String,
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "Note", default)]
    pub note: String,
    #[serde(rename = "Weather", default)]
    pub weather: Option<String>,
    #[serde(rename = "Unit", default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Dispatch one action. Recoverable failures become `ERROR` responses so
/// the page can show the message and re-enable its controls.
pub fn dispatch(store: &CheckinStore, cfg: &Config, req: ActionRequest) -> Value {
    match try_dispatch(store, cfg, req) {
        Ok(v) => v,
        Err(e) => json!({ "status": "ERROR", "message": e.to_string() }),
    }
}

fn try_dispatch(store: &CheckinStore, cfg: &Config, req: ActionRequest) -> AppResult<Value> {
    match req {
        ActionRequest::CheckUser { line_user_id, .. } => {
            match queries::find_employee_by_line_id(store.conn(), &line_user_id)? {
                Some(emp) => Ok(json!({ "status": "FOUND", "user": emp })),
                None => Ok(json!({
                    "status": "NEED_BIND",
                    "freeUsers": queries::free_employees(store.conn())?,
                })),
            }
        }
        ActionRequest::BindUser { uid, line_user_id, line_name } => {
            queries::bind_employee(store.conn(), &uid, &line_user_id, &line_name)?;
            Ok(json!({ "status": "OK" }))
        }
        ActionRequest::GetJobs => Ok(json!({ "status": "OK", "jobs": cfg.jobs })),
        ActionRequest::GetAllStations => {
            Ok(json!({ "status": "OK", "allStations": store.stations()? }))
        }
        ActionRequest::Checkin(req) => {
            let emp = queries::find_employee_by_line_id(store.conn(), &req.line_user_id)?
                .ok_or_else(|| AppError::NotFound("identity not bound".to_string()))?;
            let station = store.stations()?.into_iter().find(|s| s.sid == req.sid);

            let new = NewCheckin {
                user_id: emp.uid,
                user_name: emp.name,
                tel: emp.tel,
                station_name: station.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
                unit: req
                    .unit
                    .filter(|u| !u.trim().is_empty())
                    .or_else(|| station.map(|s| s.unit))
                    .filter(|u| !u.trim().is_empty()),
                sid: req.sid,
                job: req.job,
                note: none_if_blank(req.note),
                weather: req.weather,
                lat: req.lat,
                lon: req.lon,
            };
            let ev = store.append(new)?;
            Ok(json!({ "status": "OK", "message": "บันทึกเรียบร้อย", "checkin": ev }))
        }
    }
}

/// The dashboard/live-map poll payload.
pub fn report(store: &CheckinStore, cfg: &Config, filter: &ReportFilter) -> AppResult<Value> {
    Ok(json!({
        "allStations": store.stations()?,
        "checkins": store.query(filter, cfg.tz())?,
    }))
}

/// Stations within check-in range of the device, nearest first. An empty
/// list is a normal answer; the form disables its submit button on it.
pub fn nearby(store: &CheckinStore, position: Position) -> AppResult<Value> {
    let stations = store.stations()?;
    let hits: Vec<Value> = geofence::find_nearby(position, &stations)
        .into_iter()
        .map(|hit| {
            json!({
                "station": hit.station,
                "distanceMeters": hit.distance_m,
                "distanceText": format_distance(hit.distance_m),
            })
        })
        .collect();
    Ok(json!({ "status": "OK", "stations": hits }))
}

/// Per-station status records. `at` drives the manual test clock; absent
/// means the live server clock.
pub fn station_status(
    store: &CheckinStore,
    cfg: &Config,
    at: Option<DateTime<Utc>>,
) -> AppResult<Vec<StatusRecord>> {
    let reference = match at {
        Some(t) => ReferenceTime::Override(t),
        None => ReferenceTime::Now(Utc::now()),
    };
    let stations = store.stations()?;
    let events = store.all_events()?;
    Ok(status::compute_status(
        reference,
        &cfg.status_roster(),
        &stations,
        &events,
        cfg.status_policy,
        cfg.tz(),
    ))
}

fn none_if_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
