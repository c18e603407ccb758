// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Form DTOs carry raw text; parsing happens here, validation in services

use serde::{Deserialize, Serialize};

use crate::domain::{Dish, DishFields, DishId, DomainError};
use crate::services::{ExportOutcome, ImportSummary};

// ============================================================================
// DISH DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishDto {
    pub id: DishId,
    pub name: String,
    #[serde(rename = "type")]
    pub dish_type: String,
    pub price: f64,
    pub ingredients: String,
    pub introduction: String,
    pub photo_path: Option<String>,
}

/// Dish form input exactly as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishFormDto {
    pub name: String,
    #[serde(rename = "type")]
    pub dish_type: String,
    pub price: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub photo_path: String,
}

impl DishFormDto {
    /// Trim every field and parse the price.
    ///
    /// Accepts a comma as decimal separator ("38,50").
    pub fn into_fields(self) -> Result<DishFields, DomainError> {
        let name = self.name.trim().to_string();
        let dish_type = self.dish_type.trim().to_string();
        let price_text = self.price.trim().replace(',', ".");

        if name.is_empty() {
            return Err(DomainError::MissingField { field: "name" });
        }
        if dish_type.is_empty() {
            return Err(DomainError::MissingField { field: "type" });
        }
        if price_text.is_empty() {
            return Err(DomainError::MissingField { field: "price" });
        }

        let price: f64 = price_text
            .parse()
            .map_err(|e| DomainError::InvalidPrice(format!("'{}': {}", self.price.trim(), e)))?;
        if !price.is_finite() {
            return Err(DomainError::InvalidPrice(format!("'{}'", self.price.trim())));
        }
        if price < 0.0 {
            return Err(DomainError::InvalidPrice(
                "Price cannot be negative.".to_string(),
            ));
        }

        let photo_path = self.photo_path.trim();
        Ok(DishFields {
            name,
            dish_type,
            price,
            ingredients: self.ingredients.trim().to_string(),
            introduction: self.introduction.trim().to_string(),
            photo_path: (!photo_path.is_empty()).then(|| photo_path.to_string()),
        })
    }
}

impl From<Dish> for DishDto {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id.unwrap_or_default(),
            name: dish.name,
            dish_type: dish.dish_type,
            price: dish.price,
            ingredients: dish.ingredients,
            introduction: dish.introduction,
            photo_path: dish.photo_path,
        }
    }
}

impl From<&DishDto> for Dish {
    fn from(dto: &DishDto) -> Self {
        let dish = Dish::new(dto.name.clone(), dto.dish_type.clone(), dto.price).with_details(
            dto.ingredients.clone(),
            dto.introduction.clone(),
            dto.photo_path.clone(),
        );
        if dto.id > 0 {
            dish.with_id(dto.id)
        } else {
            dish
        }
    }
}

// ============================================================================
// EXCHANGE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResultDto {
    pub imported: usize,
    pub failed: usize,
}

impl From<ImportSummary> for ImportResultDto {
    fn from(summary: ImportSummary) -> Self {
        Self {
            imported: summary.imported,
            failed: summary.failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResultDto {
    pub exported: usize,
    /// Final file path; `None` when there was nothing to export
    pub destination: Option<String>,
}

impl ExportResultDto {
    pub fn from_outcome(outcome: ExportOutcome, destination: &std::path::Path) -> Self {
        match outcome {
            ExportOutcome::NothingToExport => Self {
                exported: 0,
                destination: None,
            },
            ExportOutcome::Exported { count } => Self {
                exported: count,
                destination: Some(destination.display().to_string()),
            },
        }
    }
}
