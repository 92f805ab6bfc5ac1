//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The pool hands out one
//! connection per statement and takes it back when the future completes,
//! whether the statement succeeded or not.

pub mod user_repo;

pub use user_repo::UserRepo;
