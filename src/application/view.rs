// src/application/view.rs
//
// Filtered view over the dishes last fetched for display.
// Re-deriving the visible rows never touches the store.

use crate::domain::{Dish, DishFilter, FilterError};

#[derive(Debug, Clone, Default)]
pub struct DishView {
    dishes: Vec<Dish>,
    filter: DishFilter,
    query: String,
}

impl DishView {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            dishes,
            filter: DishFilter::all(),
            query: String::new(),
        }
    }

    /// Replace the backing list, keeping the active filter
    pub fn replace(&mut self, dishes: Vec<Dish>) {
        self.dishes = dishes;
    }

    /// Apply a new search pattern.
    ///
    /// On an invalid pattern the previous filter stays active.
    pub fn set_query(&mut self, query: &str) -> Result<(), FilterError> {
        self.set_filter(DishFilter::pattern(query)?, query);
        Ok(())
    }

    /// Search for `text` literally; regex metacharacters match themselves
    pub fn set_literal_query(&mut self, text: &str) -> Result<(), FilterError> {
        self.set_filter(DishFilter::substring(text)?, text);
        Ok(())
    }

    /// Show everything again
    pub fn clear(&mut self) {
        self.filter = DishFilter::all();
        self.query.clear();
    }

    /// Whether the visible rows may be a subset of the backing list
    pub fn is_filtered(&self) -> bool {
        !self.filter.is_identity()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn all(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn visible(&self) -> Vec<Dish> {
        self.filter.apply(&self.dishes)
    }

    fn set_filter(&mut self, filter: DishFilter, query: &str) {
        self.filter = filter;
        self.query = query.to_string();
    }
}
