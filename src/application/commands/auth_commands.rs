// src/application/commands/auth_commands.rs
//
// Login Command Handlers

use crate::application::{error_handling::ToErrorResponse, state::AppState};
use crate::domain::UserId;

/// Login gate; any failure is a rejected login
pub fn check_credentials(state: &AppState, username: &str, password: &str) -> bool {
    state.auth_service.validate(username, password)
}

pub fn register_user(state: &AppState, username: &str, password: &str) -> Result<UserId, String> {
    state
        .auth_service
        .register_user(username, password)
        .to_error_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::StoreConfig;

    #[test]
    fn test_register_then_login() {
        let state = AppState::initialize(StoreConfig::in_memory());
        register_user(&state, "admin", "mysql").unwrap();

        assert!(check_credentials(&state, "admin", "mysql"));
        assert!(!check_credentials(&state, "admin", "wrong"));
    }

    #[test]
    fn test_unreachable_store_rejects_login() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::file(dir.path().join("missing").join("menu.db"))
            .with_connect_timeout(std::time::Duration::from_millis(100));
        let state = AppState::initialize(config);

        assert!(!check_credentials(&state, "admin", "mysql"));
    }
}
