use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// `DatabaseConnection` wraps a connection pool, so cloning the state per request is cheap
/// and every clone draws from the same pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Shared secret required on mutating routes; `None` disables the check
    pub api_key: Option<String>,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db, api_key: None }
    }
}
