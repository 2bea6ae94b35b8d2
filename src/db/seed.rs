//! Optional YAML seed file: station roster and employee list upserted at
//! startup so a fresh deployment serves a populated sheet.

use crate::db::{queries, store::CheckinStore};
use crate::errors::{AppError, AppResult};
use crate::models::{employee::Employee, station::Station};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

pub fn apply(store: &CheckinStore, path: &str) -> AppResult<()> {
    let content = fs::read_to_string(path)?;
    let data: SeedData = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("seed file {path}: {e}")))?;

    for st in &data.stations {
        queries::upsert_station(store.conn(), st)?;
    }
    for emp in &data.employees {
        queries::upsert_employee(store.conn(), emp)?;
    }
    log::info!(
        "Seeded {} stations and {} employees from {path}",
        data.stations.len(),
        data.employees.len()
    );
    Ok(())
}
