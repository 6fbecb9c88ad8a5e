use motorpool_db::Database;

use crate::token::TokenService;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    pub tokens: TokenService,
}
