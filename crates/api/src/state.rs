/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers check out one connection per statement.
    pub pool: usuarios_db::DbPool,
}
