//! Smart Farm common – session gate, route guard and the mock data shared by
//! the dashboard server and its browser bundle.

pub mod analysis;
pub mod config;
pub mod fixtures;
pub mod guard;
pub mod logs;
pub mod session;
pub mod store;
