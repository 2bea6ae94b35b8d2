//! Row mapping and SQL for the three tables.

use crate::errors::{AppError, AppResult};
use crate::models::checkin::CheckinEvent;
use crate::models::employee::Employee;
use crate::models::station::Station;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, Row, params};

// ---------------------------------------------------------------------------
// checkins
// ---------------------------------------------------------------------------

/// Map a check-in row, or None when its stored timestamp does not parse.
/// A bad row is skipped with a warning, never a fatal error.
fn map_checkin_row(row: &Row) -> Result<Option<CheckinEvent>> {
    let id: String = row.get("id")?;
    let time_str: String = row.get("time")?;
    let Ok(time) = DateTime::parse_from_rfc3339(&time_str) else {
        log::warn!("Skipping check-in {id}: unparseable timestamp {time_str:?}");
        return Ok(None);
    };

    Ok(Some(CheckinEvent {
        id,
        time: time.with_timezone(&Utc),
        user_id: row.get("user_id")?,
        user_name: row.get("user_name")?,
        tel: row.get("tel")?,
        sid: row.get("sid")?,
        station_name: row.get("station_name")?,
        job: row.get("job")?,
        note: row.get("note")?,
        weather: row.get("weather")?,
        unit: row.get("unit")?,
        lat: row.get("lat")?,
        lon: row.get("lon")?,
    }))
}

/// All check-ins in insertion order.
pub fn load_checkins(conn: &Connection) -> AppResult<Vec<CheckinEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, time, user_id, user_name, tel, sid, station_name,
                job, note, weather, unit, lat, lon
         FROM checkins
         ORDER BY rowid ASC",
    )?;
    let rows = stmt.query_map([], map_checkin_row)?;

    let mut out = Vec::new();
    for r in rows {
        if let Some(ev) = r? {
            out.push(ev);
        }
    }
    Ok(out)
}

pub fn insert_checkin(conn: &Connection, ev: &CheckinEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO checkins (id, time, user_id, user_name, tel, sid, station_name,
                               job, note, weather, unit, lat, lon)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            ev.id,
            ev.time.to_rfc3339(),
            ev.user_id,
            ev.user_name,
            ev.tel,
            ev.sid,
            ev.station_name,
            ev.job,
            ev.note,
            ev.weather,
            ev.unit,
            ev.lat,
            ev.lon,
        ],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// stations
// ---------------------------------------------------------------------------

fn map_station_row(row: &Row) -> Result<Station> {
    Ok(Station {
        sid: row.get("sid")?,
        name: row.get("name")?,
        lat: row.get("lat")?,
        lon: row.get("lon")?,
        radius_m: row.get("radius_m")?,
        unit: row.get("unit")?,
    })
}

pub fn load_stations(conn: &Connection) -> AppResult<Vec<Station>> {
    let mut stmt =
        conn.prepare("SELECT sid, name, lat, lon, radius_m, unit FROM stations ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_station_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn upsert_station(conn: &Connection, st: &Station) -> AppResult<()> {
    conn.execute(
        "INSERT INTO stations (sid, name, lat, lon, radius_m, unit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(sid) DO UPDATE SET
             name = excluded.name, lat = excluded.lat, lon = excluded.lon,
             radius_m = excluded.radius_m, unit = excluded.unit",
        params![st.sid, st.name, st.lat, st.lon, st.radius_m, st.unit],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// employees
// ---------------------------------------------------------------------------

fn map_employee_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        uid: row.get("uid")?,
        name: row.get("name")?,
        tel: row.get("tel")?,
        line_user_id: row.get("line_user_id")?,
        line_name: row.get("line_name")?,
    })
}

pub fn find_employee_by_line_id(
    conn: &Connection,
    line_user_id: &str,
) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare(
        "SELECT uid, name, tel, line_user_id, line_name
         FROM employees WHERE line_user_id = ?1",
    )?;
    let mut rows = stmt.query_map([line_user_id], map_employee_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Employees nobody has bound a chat identity to yet.
pub fn free_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare(
        "SELECT uid, name, tel, line_user_id, line_name
         FROM employees
         WHERE line_user_id IS NULL OR line_user_id = ''
         ORDER BY uid ASC",
    )?;
    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Bind a chat identity to a free employee record.
/// Fails when the uid is unknown or already bound.
pub fn bind_employee(
    conn: &Connection,
    uid: &str,
    line_user_id: &str,
    line_name: &str,
) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE employees SET line_user_id = ?1, line_name = ?2
         WHERE uid = ?3 AND (line_user_id IS NULL OR line_user_id = '')",
        params![line_user_id, line_name, uid],
    )?;
    if n == 0 {
        return Err(AppError::NotFound(format!(
            "employee {uid} not available for binding"
        )));
    }
    Ok(())
}

pub fn upsert_employee(conn: &Connection, emp: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employees (uid, name, tel, line_user_id, line_name)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(uid) DO UPDATE SET
             name = excluded.name, tel = excluded.tel",
        params![emp.uid, emp.name, emp.tel, emp.line_user_id, emp.line_name],
    )?;
    Ok(())
}
