// src/db/mod.rs
//
// Database module
//
// Provides:
// - Store configuration
// - The single managed connection
// - Schema bootstrap and utilities

pub mod config;
pub mod connection;
pub mod schema;

pub use config::{get_database_path, StoreConfig, StoreTarget};

pub use connection::{create_test_connection, ConnectionProvider, PooledConn};

pub use schema::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};
