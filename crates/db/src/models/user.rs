//! User record model and DTOs.
//!
//! The wire format keeps the table's Portuguese column name `nome` so
//! existing clients keep working; Rust code uses `name`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use usuarios_core::types::DbId;

/// Full row from the `usuarios` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
}

/// DTO for creating a user.
///
/// Missing or `null` fields are stored as SQL `NULL`. An `id` in the body is
/// ignored; the store assigns one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Updates overwrite both columns, so they take the same payload as creation.
pub type UpdateUser = CreateUser;
