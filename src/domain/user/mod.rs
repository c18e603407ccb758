pub mod entity;
pub mod password;

pub use entity::{User, UserId};
pub use password::{hash_password, verify_password};
