pub mod entity;
pub mod filter;
pub mod invariants;

pub use entity::{Dish, DishFields, DishId};
pub use filter::{DishFilter, FilterError};
pub use invariants::validate_dish;
