use crate::db::schema::SQLITE_INIT;
use crate::error::StockroomError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Handle to the inventory store.
///
/// Owns the connection pool; the schema initializer is the only writer in
/// this crate, row-level access belongs to external collaborators.
#[derive(Clone)]
pub struct InventoryStore {
    pool: SqlitePool,
}

impl InventoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the store at `database_url`, creating the file if absent.
    pub async fn connect(database_url: &str) -> Result<Self, StockroomError> {
        let connect_opts =
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    ///
    /// `CREATE TABLE IF NOT EXISTS` throughout, so re-running against an
    /// already-initialized store is a no-op.
    pub async fn init_schema(&self) -> Result<(), StockroomError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Release the store handle. Each DDL statement has already committed.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
