// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between a UI and the services
// - Translates between DTOs and domain entities
// - Holds the filtered view the UI renders

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;
pub mod view;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
pub use view::DishView;
