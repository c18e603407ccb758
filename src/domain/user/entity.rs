use serde::Serialize;

pub type UserId = i64;

/// A stored login credential
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,

    pub username: String,

    /// Salted hash; see `domain::user::password`
    #[serde(skip)]
    pub password_hash: String,
}
