use sea_orm::DatabaseConnection;

use crate::server::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

/// Allows test setups to build an `AppState` from a bare database connection
/// without a circular dependency on the test-utils crate. The config falls
/// back to local-development defaults.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            config: Config::local_defaults(),
        }
    }
}
