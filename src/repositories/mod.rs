// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are plain data mappers
// - No validation; services validate before writing
// - "Not found" is a value, store failures are errors
// - Explicit SQL only

pub mod dish_repository;
pub mod user_repository;

pub use dish_repository::{DishRepository, SqliteDishRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[cfg(test)]
pub use dish_repository::MockDishRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
