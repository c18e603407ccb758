// src/application/commands/exchange_commands.rs
//
// Bulk Import/Export Command Handlers

use std::path::Path;

use crate::application::{
    dto::{DishDto, ExportResultDto, ImportResultDto},
    error_handling::ToErrorResponse,
    state::AppState,
};
use crate::codec;
use crate::domain::Dish;
use crate::services::export_destination;

/// Import already-read lines
pub fn import_dishes<I, S>(state: &AppState, lines: I) -> ImportResultDto
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    state.import_export_service.import_lines(lines).into()
}

pub fn import_dishes_from_file(state: &AppState, path: &Path) -> Result<ImportResultDto, String> {
    let summary = state
        .import_export_service
        .import_from_path(path)
        .to_error_response()?;

    Ok(summary.into())
}

/// Encode dishes as exchange lines without touching the store
pub fn export_dishes(dishes: &[DishDto]) -> Vec<String> {
    let dishes: Vec<Dish> = dishes.iter().map(Dish::from).collect();
    codec::encode_all(&dishes)
}

/// Export the whole catalog. `.txt` is appended to the file name if missing.
pub fn export_dishes_to_file(state: &AppState, path: &Path) -> Result<ExportResultDto, String> {
    let destination = export_destination(path);
    let outcome = state
        .import_export_service
        .export_to_path(&destination)
        .to_error_response()?;

    Ok(ExportResultDto::from_outcome(outcome, &destination))
}
