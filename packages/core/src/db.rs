//! SQLite connection handling.
//!
//! There is no pool: every query opens its own connection through
//! [`Database::connect`] and closes it when done. The file is opened
//! read-only and never created, so a missing database surfaces as a
//! per-request error rather than an empty store.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

/// Connection settings for the paper metadata database.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .create_if_missing(false);

        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection. Callers close it with
    /// [`Connection::close`] once their single statement has run.
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        SqliteConnection::connect_with(&self.options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_fails_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("absent.db"));

        assert!(db.connect().await.is_err());
        assert!(!db.path().exists(), "read-only open must not create the file");
    }

    #[tokio::test]
    async fn connect_opens_existing_file_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.db");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let mut setup = SqliteConnection::connect_with(&options).await.unwrap();
        sqlx::query(
            "CREATE TABLE entries (country TEXT, year INTEGER, title TEXT, doi TEXT, authors TEXT)",
        )
        .execute(&mut setup)
        .await
        .unwrap();
        setup.close().await.unwrap();

        let db = Database::new(&path);
        let mut conn = db.connect().await.unwrap();
        let write = sqlx::query("INSERT INTO entries VALUES ('US', 2020, 't', 'd', 'a')")
            .execute(&mut conn)
            .await;
        assert!(write.is_err(), "writes must be rejected on a read-only connection");
        conn.close().await.unwrap();
    }
}
