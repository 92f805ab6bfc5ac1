pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /usuarios          list, create
/// /usuarios/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/usuarios", user::router())
}
