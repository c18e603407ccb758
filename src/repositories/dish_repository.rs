// src/repositories/dish_repository.rs
//
// Dish persistence

use std::sync::Arc;

use log::debug;
use rusqlite::{params, Row};

use crate::db::ConnectionProvider;
use crate::domain::{Dish, DishId, DomainError};
use crate::error::{AppError, AppResult};

/// CRUD access to the `dishes` table.
///
/// "Not found" is reported as `Ok(None)` / `Ok(false)`; errors always mean
/// the store itself failed.
#[cfg_attr(test, mockall::automock)]
pub trait DishRepository: Send + Sync {
    /// Every dish, ordered by id
    fn list_all(&self) -> AppResult<Vec<Dish>>;
    fn get_by_id(&self, id: DishId) -> AppResult<Option<Dish>>;
    /// Store a new row and return its generated id. Any id on `dish` is ignored.
    fn insert(&self, dish: &Dish) -> AppResult<DishId>;
    /// Rewrite every field of the row matching `dish.id`
    fn update(&self, dish: &Dish) -> AppResult<bool>;
    fn delete(&self, id: DishId) -> AppResult<bool>;
}

pub struct SqliteDishRepository {
    connections: Arc<ConnectionProvider>,
}

impl SqliteDishRepository {
    pub fn new(connections: Arc<ConnectionProvider>) -> Self {
        Self { connections }
    }

    fn row_to_dish(row: &Row) -> Result<Dish, rusqlite::Error> {
        Ok(Dish {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            dish_type: row.get("type")?,
            price: row.get("price")?,
            ingredients: row.get("ingredients")?,
            introduction: row.get("introduction")?,
            photo_path: row.get("photo_path")?,
        })
    }
}

impl DishRepository for SqliteDishRepository {
    fn list_all(&self) -> AppResult<Vec<Dish>> {
        let conn = self.connections.acquire()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, type, price, ingredients, introduction, photo_path
             FROM dishes
             ORDER BY id",
        )?;

        let dishes: Vec<Dish> = stmt
            .query_map([], Self::row_to_dish)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(dishes)
    }

    fn get_by_id(&self, id: DishId) -> AppResult<Option<Dish>> {
        let conn = self.connections.acquire()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, type, price, ingredients, introduction, photo_path
             FROM dishes WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_dish) {
            Ok(dish) => Ok(Some(dish)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn insert(&self, dish: &Dish) -> AppResult<DishId> {
        let conn = self.connections.acquire()?;

        let rows_affected = conn.execute(
            "INSERT INTO dishes (name, type, price, ingredients, introduction, photo_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                dish.name,
                dish.dish_type,
                dish.price,
                dish.ingredients,
                dish.introduction,
                dish.photo_path,
            ],
        )?;

        if rows_affected != 1 {
            return Err(AppError::Persistence(format!(
                "Insert of '{}' affected {} rows",
                dish.name, rows_affected
            )));
        }

        let id = conn.last_insert_rowid();
        if id <= 0 {
            return Err(AppError::Persistence(format!(
                "No generated id for '{}'",
                dish.name
            )));
        }

        debug!("Inserted dish {} '{}'", id, dish.name);
        Ok(id)
    }

    fn update(&self, dish: &Dish) -> AppResult<bool> {
        let id = dish.id.ok_or(DomainError::MissingIdentity)?;
        let conn = self.connections.acquire()?;

        let rows_affected = conn.execute(
            "UPDATE dishes
             SET name = ?1, type = ?2, price = ?3, ingredients = ?4,
                 introduction = ?5, photo_path = ?6
             WHERE id = ?7",
            params![
                dish.name,
                dish.dish_type,
                dish.price,
                dish.ingredients,
                dish.introduction,
                dish.photo_path,
                id,
            ],
        )?;

        debug!("Update of dish {} affected {} rows", id, rows_affected);
        Ok(rows_affected == 1)
    }

    fn delete(&self, id: DishId) -> AppResult<bool> {
        let conn = self.connections.acquire()?;

        let rows_affected = conn.execute("DELETE FROM dishes WHERE id = ?1", params![id])?;

        debug!("Delete of dish {} affected {} rows", id, rows_affected);
        Ok(rows_affected == 1)
    }
}
