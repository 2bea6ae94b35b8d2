//! Server configuration, loaded from a YAML file with per-field defaults
//! so a missing file still yields a runnable setup.

use crate::core::status::{Roster, StatusPolicy};
use crate::errors::{AppError, AppResult};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Minutes east of UTC; calendar dates and the day-shift duty window
    /// are evaluated in this offset.
    #[serde(default = "default_tz_offset")]
    pub tz_offset_minutes: i32,
    /// Job labels offered by the check-in form.
    #[serde(default = "default_jobs")]
    pub jobs: Vec<String>,
    /// Tracked station ids, in display order.
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,
    /// Stations that only run the weekday 08:00-16:00 shift.
    #[serde(default = "default_day_shift_sids")]
    pub day_shift_sids: Vec<String>,
    /// The roster entry that stands for two physical posts.
    #[serde(default = "default_dual_post_sid")]
    pub dual_post_sid: Option<String>,
    #[serde(default)]
    pub status_policy: StatusPolicy,
    /// Optional YAML file with stations/employees upserted at startup.
    #[serde(default)]
    pub seed_file: Option<String>,
}

fn default_database() -> String {
    Config::config_dir()
        .join("stationwatch.sqlite")
        .to_string_lossy()
        .to_string()
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_tz_offset() -> i32 {
    7 * 60 // ICT
}

fn default_jobs() -> Vec<String> {
    [
        "เข้าปฏิบัติงานกะ 08:00-20:00",
        "เข้าปฏิบัติงานกะ 20:00-08:00",
        "เข้าปฏิบัติงาน Day Time",
        "Patrol ตรวจพื้นที่",
        "บำรุงรักษาอุปกรณ์",
        "อื่นๆ",
    ]
    .map(String::from)
    .to_vec()
}

fn default_roster() -> Vec<String> {
    [
        "NTB", "TSA", "KCD", "PPA", "TRA", "KBB", "BKO", "PKA", "PKB", "PAT", "KMA", "KBA",
        "PKD", "KNA", "WSA", "TMG", "KTM",
    ]
    .map(String::from)
    .to_vec()
}

fn default_day_shift_sids() -> Vec<String> {
    ["TMG", "KTM"].map(String::from).to_vec()
}

fn default_dual_post_sid() -> Option<String> {
    Some("BKO".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            bind: default_bind(),
            port: default_port(),
            tz_offset_minutes: default_tz_offset(),
            jobs: default_jobs(),
            roster: default_roster(),
            day_shift_sids: default_day_shift_sids(),
            dual_post_sid: default_dual_post_sid(),
            status_policy: StatusPolicy::default(),
            seed_file: None,
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("stationwatch")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".stationwatch")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stationwatch.yaml")
    }

    /// Load from `path`, from the standard location, or fall back to the
    /// defaults when no file exists. A present-but-broken file is an error.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let file = path.map_or_else(Self::config_file, PathBuf::from);
        if !file.exists() {
            if path.is_some() {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    file.display()
                )));
            }
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&file)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", file.display())))
    }

    pub fn tz(&self) -> FixedOffset {
        FixedOffset::east_opt(self.tz_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }

    pub fn status_roster(&self) -> Roster {
        Roster {
            sids: self.roster.clone(),
            day_shift_sids: self.day_shift_sids.clone(),
            dual_post_sid: self.dual_post_sid.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_track_the_full_roster() {
        let cfg = Config::default();
        assert_eq!(cfg.roster.len(), 17);
        assert!(cfg.day_shift_sids.iter().all(|s| cfg.roster.contains(s)));
        assert_eq!(cfg.dual_post_sid.as_deref(), Some("BKO"));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/test.sqlite\nport: 9000\n").unwrap();
        assert_eq!(cfg.database, "/tmp/test.sqlite");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.tz_offset_minutes, 420);
        assert_eq!(cfg.status_policy, StatusPolicy::Tiered8h16h);
    }

    #[test]
    fn tz_offset_is_ict_by_default() {
        let cfg = Config::default();
        assert_eq!(cfg.tz().local_minus_utc(), 7 * 3600);
    }
}
