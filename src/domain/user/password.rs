// src/domain/user/password.rs
//
// Salted password hashing.
//
// Stored format: `sha256$<salt>$<hex digest of salt || password>`.
// Anything else (including legacy plaintext rows) never verifies.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

const SCHEME: &str = "sha256";

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    encode(&salt, password)
}

/// Check `password` against a stored hash in constant time
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(scheme), Some(salt), Some(_digest)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != SCHEME || salt.is_empty() {
        return false;
    }

    let candidate = encode(salt, password);
    candidate.as_bytes().ct_eq(stored.as_bytes()).into()
}

fn encode(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{}${}${:x}", SCHEME, salt, hasher.finalize())
}
