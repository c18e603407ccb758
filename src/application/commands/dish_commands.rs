// src/application/commands/dish_commands.rs
//
// Dish Command Handlers

use crate::application::{
    dto::{DishDto, DishFormDto},
    error_handling::ToErrorResponse,
    state::AppState,
    view::DishView,
};
use crate::domain::DishId;

/// List all dishes
pub fn list_dishes(state: &AppState) -> Result<Vec<DishDto>, String> {
    let dishes = state.dish_service.list_dishes().to_error_response()?;

    Ok(dishes.into_iter().map(DishDto::from).collect())
}

/// Get a single dish by ID
pub fn get_dish(state: &AppState, dish_id: DishId) -> Result<Option<DishDto>, String> {
    let dish = state.dish_service.get_dish(dish_id).to_error_response()?;

    Ok(dish.map(DishDto::from))
}

/// Create a new dish, returning its id
pub fn create_dish(state: &AppState, dto: DishFormDto) -> Result<DishId, String> {
    let fields = dto.into_fields().to_error_response()?;

    state.dish_service.create_dish(fields).to_error_response()
}

/// Overwrite every field of an existing dish
pub fn update_dish(state: &AppState, dish_id: DishId, dto: DishFormDto) -> Result<(), String> {
    let fields = dto.into_fields().to_error_response()?;

    state
        .dish_service
        .update_dish(dish_id, fields)
        .to_error_response()
}

pub fn delete_dish(state: &AppState, dish_id: DishId) -> Result<(), String> {
    state.dish_service.delete_dish(dish_id).to_error_response()
}

/// Fetch the catalog into a fresh view
pub fn load_dish_view(state: &AppState) -> Result<DishView, String> {
    let dishes = state.dish_service.list_dishes().to_error_response()?;

    Ok(DishView::new(dishes))
}

/// Apply a search to a view and return the visible dishes.
///
/// An invalid pattern leaves the view's previous filter in place.
pub fn filter_dishes(view: &mut DishView, query: &str) -> Result<Vec<DishDto>, String> {
    view.set_query(query).to_error_response()?;

    Ok(view.visible().into_iter().map(DishDto::from).collect())
}

/// Search a view for literal text and return the visible dishes
pub fn find_dishes(view: &mut DishView, text: &str) -> Result<Vec<DishDto>, String> {
    view.set_literal_query(text).to_error_response()?;

    Ok(view.visible().into_iter().map(DishDto::from).collect())
}
