//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single resource. Handlers delegate to the
//! corresponding repository in `usuarios_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod user;
