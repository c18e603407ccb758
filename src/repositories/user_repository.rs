// src/repositories/user_repository.rs
//
// Credential persistence

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionProvider;
use crate::domain::{User, UserId};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Exact, case-sensitive username lookup
    fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    fn insert(&self, username: &str, password_hash: &str) -> AppResult<UserId>;
}

pub struct SqliteUserRepository {
    connections: Arc<ConnectionProvider>,
}

impl SqliteUserRepository {
    pub fn new(connections: Arc<ConnectionProvider>) -> Self {
        Self { connections }
    }

    fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
        Ok(User {
            id: row.get("id")?,
            username: row.get("username")?,
            password_hash: row.get("password")?,
        })
    }
}

impl UserRepository for SqliteUserRepository {
    fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let conn = self.connections.acquire()?;

        let mut stmt =
            conn.prepare("SELECT id, username, password FROM users WHERE username = ?1")?;

        match stmt.query_row(params![username], Self::row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn insert(&self, username: &str, password_hash: &str) -> AppResult<UserId> {
        let conn = self.connections.acquire()?;

        let rows_affected = conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;

        if rows_affected != 1 {
            return Err(AppError::Persistence(format!(
                "Insert of user '{}' affected {} rows",
                username, rows_affected
            )));
        }

        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> SqliteUserRepository {
        SqliteUserRepository::new(Arc::new(ConnectionProvider::in_memory()))
    }

    #[test]
    fn test_insert_then_find() {
        let repo = repository();
        let id = repo.insert("admin", "sha256$salt$digest").unwrap();

        let user = repo.find_by_username("admin").unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.password_hash, "sha256$salt$digest");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let repo = repository();
        repo.insert("admin", "x").unwrap();
        assert!(repo.find_by_username("Admin").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_is_database_error() {
        let repo = repository();
        repo.insert("admin", "x").unwrap();
        assert!(matches!(repo.insert("admin", "y"), Err(AppError::Database(_))));
    }
}
