use super::entity::Dish;
use crate::domain::{DomainError, DomainResult};

/// Validates all Dish invariants that must hold before a write
pub fn validate_dish(dish: &Dish) -> DomainResult<()> {
    validate_required("name", &dish.name)?;
    validate_required("type", &dish.dish_type)?;
    validate_price(dish.price)?;
    Ok(())
}

fn validate_required(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::InvalidPrice(format!("{} is not a number", price)));
    }
    if price < 0.0 {
        return Err(DomainError::InvalidPrice(
            "Price cannot be negative.".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Dish domain:
///
/// 1. Identity is assigned by the store and never changes
/// 2. Name and type are non-empty at persistence time
/// 3. Price is finite and non-negative
/// 4. Ingredients, introduction and photo reference may be empty
/// 5. The store does not enforce 2 and 3; callers validate first

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dish() {
        let dish = Dish::new("Kung Pao Chicken", "Sichuan", 38.5);
        assert!(validate_dish(&dish).is_ok());
    }

    #[test]
    fn test_free_dish_is_valid() {
        let dish = Dish::new("Tea", "Drinks", 0.0);
        assert!(validate_dish(&dish).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let dish = Dish::new("   ", "Sichuan", 10.0);
        assert!(matches!(
            validate_dish(&dish),
            Err(DomainError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn test_empty_type_fails() {
        let dish = Dish::new("Rice", "", 2.0);
        assert!(matches!(
            validate_dish(&dish),
            Err(DomainError::MissingField { field: "type" })
        ));
    }

    #[test]
    fn test_negative_price_fails() {
        let dish = Dish::new("Rice", "Staple", -0.01);
        assert!(matches!(validate_dish(&dish), Err(DomainError::InvalidPrice(_))));
    }

    #[test]
    fn test_nan_price_fails() {
        let dish = Dish::new("Rice", "Staple", f64::NAN);
        assert!(validate_dish(&dish).is_err());
    }
}
