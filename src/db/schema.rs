// src/db/schema.rs
//
// Schema bootstrap and database utilities
//
// The schema is created with IF NOT EXISTS on every new connection.
// There are no migrations.

use rusqlite::Connection;

use crate::error::{AppError, AppResult};

const SCHEMA: &str = include_str!("../../schema.sql");

/// Create the catalog tables if they are missing.
///
/// Safe to call multiple times.
pub fn apply_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    apply_schema(conn)
        .map_err(|e| AppError::Other(format!("Failed to apply schema: {}", e)))
}

/// Verify database integrity
///
/// Runs SQLite's integrity check.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    if result != "ok" {
        return Err(AppError::Other(format!("Database integrity check failed: {}", result)));
    }

    Ok(())
}

/// Get database statistics
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    let dish_count: i64 = conn.query_row("SELECT COUNT(*) FROM dishes", [], |row| row.get(0))?;
    let user_count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        dish_count,
        user_count,
    })
}

#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub dish_count: i64,
    pub user_count: i64,
}
