// src/services/dish_service.rs
//
// Single-record dish operations.
// Validates before writing and turns "row missing" into NotFound.

use std::sync::Arc;

use log::{error, info};

use crate::domain::{validate_dish, Dish, DishFields, DishId};
use crate::error::{AppError, AppResult};
use crate::repositories::DishRepository;

pub struct DishService {
    dish_repo: Arc<dyn DishRepository>,
}

impl DishService {
    pub fn new(dish_repo: Arc<dyn DishRepository>) -> Self {
        Self { dish_repo }
    }

    pub fn list_dishes(&self) -> AppResult<Vec<Dish>> {
        self.dish_repo
            .list_all()
            .inspect_err(|e| error!("Listing dishes failed: {}", e))
    }

    pub fn get_dish(&self, dish_id: DishId) -> AppResult<Option<Dish>> {
        self.dish_repo
            .get_by_id(dish_id)
            .inspect_err(|e| error!("Loading dish {} failed: {}", dish_id, e))
    }

    pub fn create_dish(&self, fields: DishFields) -> AppResult<DishId> {
        let dish = Dish::from_fields(fields);
        validate_dish(&dish)?;

        let id = self
            .dish_repo
            .insert(&dish)
            .inspect_err(|e| error!("Saving dish '{}' failed: {}", dish.name, e))?;

        info!("Dish '{}' added with id {}", dish.name, id);
        Ok(id)
    }

    pub fn update_dish(&self, dish_id: DishId, fields: DishFields) -> AppResult<()> {
        let dish = Dish::from_fields(fields).with_id(dish_id);
        validate_dish(&dish)?;

        let updated = self
            .dish_repo
            .update(&dish)
            .inspect_err(|e| error!("Updating dish {} failed: {}", dish_id, e))?;

        if !updated {
            return Err(AppError::NotFound);
        }
        info!("Dish '{}' updated", dish.name);
        Ok(())
    }

    pub fn delete_dish(&self, dish_id: DishId) -> AppResult<()> {
        let deleted = self
            .dish_repo
            .delete(dish_id)
            .inspect_err(|e| error!("Deleting dish {} failed: {}", dish_id, e))?;

        if !deleted {
            return Err(AppError::NotFound);
        }
        info!("Dish {} deleted", dish_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ConnectionProvider;
    use crate::domain::DomainError;
    use crate::repositories::{MockDishRepository, SqliteDishRepository};

    fn service() -> DishService {
        let provider = Arc::new(ConnectionProvider::in_memory());
        DishService::new(Arc::new(SqliteDishRepository::new(provider)))
    }

    fn fields(name: &str, dish_type: &str, price: f64) -> DishFields {
        DishFields {
            name: name.to_string(),
            dish_type: dish_type.to_string(),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn test_create_update_delete() {
        let service = service();

        let id = service.create_dish(fields("Kung Pao Chicken", "Sichuan", 38.5)).unwrap();
        service
            .update_dish(id, fields("Kung Pao Chicken", "Sichuan", 42.0))
            .unwrap();
        assert_eq!(service.get_dish(id).unwrap().unwrap().price, 42.0);

        service.delete_dish(id).unwrap();
        assert!(service.list_dishes().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_fields_never_reach_repository() {
        let mut repo = MockDishRepository::new();
        repo.expect_insert().never();
        repo.expect_update().never();
        let service = DishService::new(Arc::new(repo));

        let err = service.create_dish(fields("", "Sichuan", 1.0)).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::MissingField { .. })));

        let err = service.update_dish(1, fields("Rice", "Staple", -1.0)).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidPrice(_))));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let err = service()
            .update_dish(404, fields("Rice", "Staple", 1.0))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        assert!(matches!(service().delete_dish(404), Err(AppError::NotFound)));
    }

    #[test]
    fn test_store_failure_is_propagated() {
        let mut repo = MockDishRepository::new();
        repo.expect_delete()
            .returning(|_| Err(AppError::Connectivity("refused".into())));
        let service = DishService::new(Arc::new(repo));

        assert!(matches!(service.delete_dish(1), Err(AppError::Connectivity(_))));
    }
}
