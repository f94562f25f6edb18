//! Persistence for workout records: the storage client, the `workouts` row
//! type, request/response payloads and the repository that maps between them.

use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use error::Result;

/// Storage client shared by every request handler.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database at `database_url`.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        tracing::debug!(max_connections, "Opening sqlite pool");
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// The pool holds a single connection that never expires, since an
    /// in-memory database disappears with its last connection.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// Create the `workouts` table and its title index if they do not exist.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                load INTEGER NOT NULL,
                reps INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS ix_workouts_title ON workouts (title)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Acquire a session for the duration of one request.
    pub async fn session(&self) -> Result<Session> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// A pooled connection scoped to a single request.
///
/// The connection goes back to the pool when the session is dropped, whether
/// the request succeeded or not. Statements run in autocommit mode.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn dropped_session_returns_connection_to_pool() {
        let db = Database::in_memory().await.unwrap();

        let first = db.session().await.unwrap();
        drop(first);

        // The pool only has one connection, so this would hang if the first
        // session had leaked it.
        let second = tokio::time::timeout(std::time::Duration::from_secs(5), db.session())
            .await
            .expect("session was not released");
        assert!(second.is_ok());
    }
}
