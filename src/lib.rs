//! stationwatch library root.
//! Exposes the check-in core (geofence, status engine, store) and the
//! action-tagged JSON endpoint used by the check-in form and the
//! dashboard/live-map pages.

pub mod api;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod server;
pub mod utils;
