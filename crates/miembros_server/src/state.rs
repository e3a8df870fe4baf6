//! Shared server state.

use std::sync::{Arc, Mutex};

use miembros_core::{MemberService, MemberServiceResult, SqliteMemberRepository};
use rusqlite::Connection;

use crate::error::{ApiError, ApiResult};

/// One SQLite connection shared by all requests.
///
/// Requests take the lock for the duration of a single service call, so
/// operations are serialized at connection granularity.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs one service call on the blocking pool.
    ///
    /// The outer error covers lock and task failures; the inner result is the
    /// service outcome, left to the caller to map per endpoint.
    pub async fn with_service<T, F>(&self, op: F) -> ApiResult<MemberServiceResult<T>>
    where
        F: for<'c> FnOnce(&MemberService<SqliteMemberRepository<'c>>) -> MemberServiceResult<T>
            + Send
            + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || -> ApiResult<MemberServiceResult<T>> {
            let conn = db
                .lock()
                .map_err(|_| ApiError::Internal("database lock poisoned".to_string()))?;
            let service = MemberService::new(SqliteMemberRepository::new(&conn));
            Ok(op(&service))
        })
        .await
        .map_err(|err| ApiError::Internal(format!("blocking task failed: {err}")))?
    }
}
