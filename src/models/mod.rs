pub mod checkin;
pub mod employee;
pub mod station;
pub mod status;
