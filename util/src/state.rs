//! Application state container shared across Axum route handlers.
//!
//! The state holds the store connection opened at startup. It is cloned into every
//! handler through Axum's `State<T>` extractor and never reassigned afterwards.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already opened database connection.
    ///
    /// # Arguments
    ///
    /// * `db` - A SeaORM `DatabaseConnection`, typically cloned from the main pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for shutdown, where the connection is consumed by `close()`.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
