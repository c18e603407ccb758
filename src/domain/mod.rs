// src/domain/mod.rs
//
// Domain Root
//
// Declares the domain modules and re-exports their public API.
// Other modules import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod dish;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Dish Domain
pub use dish::{validate_dish, Dish, DishFields, DishFilter, DishId, FilterError};

// User Domain
pub use user::{hash_password, verify_password, User, UserId};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent caller-supplied data that violates an invariant
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Dish has no id; it must be inserted before it can be updated")]
    MissingIdentity,
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
