pub mod analyze;
pub mod dashboard;
pub mod login;
pub mod monitor;
