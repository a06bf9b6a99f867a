//! User store initialization
//!
//! The web application owns all user data at runtime; setup only guarantees
//! that the SQLite file and the `user` table exist.

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::path::Path;

/// Schema applied on every run; `IF NOT EXISTS` keeps reruns idempotent.
pub const USER_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user(
    name TEXT,
    password TEXT,
    mobile TEXT,
    email TEXT
);
"#;

/// Open the store at `path`, creating the file if absent, and apply the schema.
pub async fn initialize_store(path: &Path) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let mut conn = options
        .connect()
        .await
        .with_context(|| format!("Failed to open store at {}", path.display()))?;

    // sqlite accepts multi-statement strings, sqlx::query does not
    for statement in USER_SCHEMA.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(&mut conn)
            .await
            .with_context(|| format!("Failed to apply schema to {}", path.display()))?;
    }

    conn.close().await.context("Failed to close store")?;
    Ok(())
}
