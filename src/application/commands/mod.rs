// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Errors cross the boundary as serialized ErrorResponse JSON
// - Commands never contain business logic

pub mod auth_commands;
pub mod dish_commands;
pub mod exchange_commands;

pub use auth_commands::*;
pub use dish_commands::*;
pub use exchange_commands::*;
