// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod auth_service;
pub mod dish_service;
pub mod import_export_service;

pub use auth_service::{AuthService, Authenticator, StoredCredentialAuthenticator};

pub use dish_service::DishService;

pub use import_export_service::{
    export_destination, ExportOutcome, ImportExportService, ImportSummary,
};
