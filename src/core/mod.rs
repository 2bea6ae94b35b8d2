pub mod filter;
pub mod geofence;
pub mod jobs;
pub mod status;
