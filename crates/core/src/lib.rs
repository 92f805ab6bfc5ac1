//! Domain primitives shared by the database and HTTP crates.

pub mod config;
pub mod error;
pub mod types;
