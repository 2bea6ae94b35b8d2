//! Schema creation. The three tables mirror the spreadsheet's sheets:
//! people, station roster, and the check-in log.

use rusqlite::{Connection, Result};

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS employees (
            uid          TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            tel          TEXT,
            line_user_id TEXT,
            line_name    TEXT
        );
        CREATE TABLE IF NOT EXISTS stations (
            sid      TEXT PRIMARY KEY,
            name     TEXT NOT NULL,
            lat      TEXT NOT NULL DEFAULT '',
            lon      TEXT NOT NULL DEFAULT '',
            radius_m TEXT NOT NULL DEFAULT '',
            unit     TEXT NOT NULL DEFAULT ''
        );
        CREATE TABLE IF NOT EXISTS checkins (
            id           TEXT PRIMARY KEY,
            time         TEXT NOT NULL,
            user_id      TEXT NOT NULL,
            user_name    TEXT NOT NULL,
            tel          TEXT,
            sid          TEXT NOT NULL,
            station_name TEXT NOT NULL DEFAULT '',
            job          TEXT NOT NULL,
            note         TEXT,
            weather      TEXT,
            unit         TEXT,
            lat          REAL,
            lon          REAL
        );
        CREATE INDEX IF NOT EXISTS idx_checkins_sid ON checkins(sid);",
    )?;
    Ok(())
}
