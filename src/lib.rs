//! Account and log-backup service.
//!
//! Modules:
//! - `app`: router assembly and the HTTP server loop
//! - `auth`: signup and login
//! - `logs`: backup and restore of per-user log entries
//! - `db`: SQLite pool and migrations
//! - `config`, `state`, `error`: shared plumbing

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logs;
pub mod state;
