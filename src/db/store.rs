//! Append-only check-in ledger over SQLite.

use crate::core::filter::{self, ReportFilter};
use crate::db::{initialize, pool::DbPool, queries};
use crate::errors::{AppError, AppResult};
use crate::models::checkin::{CheckinEvent, NewCheckin};
use crate::models::station::Station;
use chrono::{DateTime, FixedOffset, Utc};
use rusqlite::Connection;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct CheckinStore {
    pool: DbPool,
    /// Disambiguates ids minted within the same millisecond.
    seq: AtomicU64,
}

impl CheckinStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool, seq: AtomicU64::new(0) })
    }

    /// In-memory store, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool, seq: AtomicU64::new(0) })
    }

    /// Raw connection for the employee/station queries layered on top.
    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Append a check-in with the server-observed timestamp.
    pub fn append(&self, new: NewCheckin) -> AppResult<CheckinEvent> {
        self.append_at(new, Utc::now())
    }

    /// Append with an explicit timestamp (seeding, backfills, tests).
    ///
    /// Required fields are validated before anything is written; the id is
    /// a time-based token so concurrent appends never collide.
    pub fn append_at(&self, new: NewCheckin, time: DateTime<Utc>) -> AppResult<CheckinEvent> {
        for (field, value) in [
            ("lineUserId", &new.user_id),
            ("SID", &new.sid),
            ("Job", &new.job),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(field.to_string()));
            }
        }

        let id = format!(
            "CK{}-{}",
            time.timestamp_millis(),
            self.seq.fetch_add(1, Ordering::Relaxed)
        );
        let ev = CheckinEvent {
            id,
            time,
            user_id: new.user_id,
            user_name: new.user_name,
            tel: new.tel,
            sid: new.sid,
            station_name: new.station_name,
            job: new.job,
            note: new.note,
            weather: new.weather,
            unit: new.unit,
            lat: new.lat,
            lon: new.lon,
        };
        queries::insert_checkin(&self.pool.conn, &ev)?;
        Ok(ev)
    }

    /// Events matching `filter`, in insertion order. See
    /// [`filter::apply`] for the no-filter row cap.
    pub fn query(&self, filter: &ReportFilter, tz: FixedOffset) -> AppResult<Vec<CheckinEvent>> {
        let all = queries::load_checkins(&self.pool.conn)?;
        Ok(filter::apply(&all, filter, tz))
    }

    /// The full ledger, as the status engine consumes it.
    pub fn all_events(&self) -> AppResult<Vec<CheckinEvent>> {
        queries::load_checkins(&self.pool.conn)
    }

    pub fn stations(&self) -> AppResult<Vec<Station>> {
        queries::load_stations(&self.pool.conn)
    }
}
