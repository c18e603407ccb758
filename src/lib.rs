// src/lib.rs
// Dish Catalog - local-first menu item manager
//
// Architecture:
// - Domain-centric: entities, invariants and search live in `domain`
// - Repositories are plain data mappers over one managed SQLite connection
// - Services validate, orchestrate and log
// - Application layer: the boundary a UI calls into

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod codec;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    hash_password,
    validate_dish,
    verify_password,
    // Dish
    Dish,
    DishFields,
    DishFilter,
    DishId,
    DomainError,
    FilterError,
    // User
    User,
    UserId,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Exchange Format
// ============================================================================

pub use codec::DecodeError;

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{ConnectionProvider, PooledConn, StoreConfig, StoreTarget};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    DishRepository, SqliteDishRepository, SqliteUserRepository, UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    export_destination,
    // Auth Service
    AuthService,
    Authenticator,
    // Dish Service
    DishService,
    // Import/Export Service
    ExportOutcome,
    ImportExportService,
    ImportSummary,
    StoredCredentialAuthenticator,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, DishView};

pub use application::commands;
pub use application::dto;
