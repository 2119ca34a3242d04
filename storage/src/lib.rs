//! SQLite-backed storage layer for the workout registration API.

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::Result;

/// Handle to the SQLite database backing the service.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database at `url`, creating the file if it does not exist.
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Database;

    pub(crate) async fn temp_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!("sqlite://{}", dir.path().join("test.db").display());

        let db = Database::new(&url).await.expect("open database");
        db.run_migrations().await.expect("run migrations");

        (db, dir)
    }
}
