//! Database module - SQLite implementations using SQLx

pub mod connection;
pub mod sqlite;
