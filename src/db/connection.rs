// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - The provider is constructed explicitly and injected, never global
// - Exactly one live connection, opened on first use
// - A connection that fails its health check is replaced on the next acquire;
//   a connection left inside an open transaction counts as failed
// - Callers are serialized; the connection is never shared by two statements

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{info, warn};
use r2d2::{ManageConnection, Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{ffi, Connection};

use crate::db::config::{StoreConfig, StoreTarget};
use crate::db::schema::apply_schema;
use crate::error::{AppError, AppResult};

/// Pool holding at most one connection
type ConnectionPool = Pool<CatalogConnectionManager>;

/// The connection handed out by `ConnectionProvider::acquire`.
///
/// Returned to the provider when dropped.
pub type PooledConn = PooledConnection<CatalogConnectionManager>;

/// SQLite manager with a stricter health check.
///
/// Every write autocommits, so a connection handed back while still inside
/// a transaction is unusable and gets discarded (rolling that transaction
/// back) instead of reused.
pub struct CatalogConnectionManager {
    inner: SqliteConnectionManager,
}

impl ManageConnection for CatalogConnectionManager {
    type Connection = Connection;
    type Error = rusqlite::Error;

    fn connect(&self) -> Result<Connection, rusqlite::Error> {
        self.inner.connect()
    }

    fn is_valid(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        if !conn.is_autocommit() {
            warn!("Discarding connection left inside an open transaction");
            return Err(rusqlite::Error::SqliteFailure(
                ffi::Error::new(ffi::SQLITE_MISUSE),
                Some("connection left inside an open transaction".to_string()),
            ));
        }
        self.inner.is_valid(conn)
    }

    fn has_broken(&self, conn: &mut Connection) -> bool {
        self.inner.has_broken(conn)
    }
}

pub struct ConnectionProvider {
    config: StoreConfig,
    pool: Mutex<Option<ConnectionPool>>,
}

impl ConnectionProvider {
    /// Create a provider for `config`. Does not connect.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            pool: Mutex::new(None),
        }
    }

    /// Provider for a private in-memory store
    pub fn in_memory() -> Self {
        Self::new(StoreConfig::in_memory())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Hand out the live connection, establishing it first if needed.
    ///
    /// Blocks while another caller holds the connection. Fails with
    /// `AppError::Connectivity` when no connection is handed out within
    /// the configured timeout. If the store itself could not be reached the
    /// next call starts over; a connection held elsewhere is kept.
    pub fn acquire(&self) -> AppResult<PooledConn> {
        let mut slot = self.slot();

        let pool = match slot.as_ref() {
            Some(pool) => pool.clone(),
            None => {
                let pool = build_pool(&self.config)?;
                *slot = Some(pool.clone());
                pool
            }
        };
        // Waiting on the pool must not hold the slot lock
        drop(slot);

        pool.get().map_err(|e| {
            warn!("Could not connect to {}: {}", self.config.target, e);
            // A live connection means the store is reachable and another
            // caller holds it; only an empty pool is reset
            if pool.state().connections == 0 {
                self.close();
            }
            AppError::from(e)
        })
    }

    /// Close the cached connection, if any.
    ///
    /// For an in-memory store this discards its contents.
    pub fn close(&self) {
        if self.slot().take().is_some() {
            info!("Closed connection to {}", self.config.target);
        }
    }

    pub fn is_open(&self) -> bool {
        self.slot().is_some()
    }

    fn slot(&self) -> MutexGuard<'_, Option<ConnectionPool>> {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn build_pool(config: &StoreConfig) -> AppResult<ConnectionPool> {
    let manager = match &config.target {
        StoreTarget::File(path) => SqliteConnectionManager::file(path),
        StoreTarget::InMemory => SqliteConnectionManager::memory(),
    };

    let target = config.target.to_string();
    let busy_timeout = config.busy_timeout;
    let manager = CatalogConnectionManager {
        inner: manager.with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            apply_schema(conn)?;
            info!("Connected to {}", target);
            Ok(())
        }),
    };

    // One connection, never reaped while idle, checked before every use
    Pool::builder()
        .max_size(1)
        .min_idle(Some(0))
        .idle_timeout(None)
        .max_lifetime(None)
        .test_on_check_out(true)
        .connection_timeout(config.connect_timeout)
        .build(manager)
        .map_err(|e| AppError::Connectivity(format!("Failed to create connection pool: {}", e)))
}

/// Create a standalone connection (for testing)
///
/// In-memory database with the catalog schema applied.
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    apply_schema(&conn)?;
    Ok(conn)
}
