// src/domain/dish/filter.rs
//
// Search predicate over an already-fetched dish list.
// Never touches storage.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use super::entity::Dish;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid search pattern '{query}': {source}")]
    InvalidPattern {
        query: String,
        #[source]
        source: regex::Error,
    },
}

/// Case-insensitive match against a dish's name or type.
///
/// A blank query matches every dish.
#[derive(Debug, Clone, Default)]
pub struct DishFilter {
    matcher: Option<Regex>,
}

impl DishFilter {
    /// The identity filter
    pub fn all() -> Self {
        Self { matcher: None }
    }

    /// Treat `query` as a regular expression, found anywhere in the field
    pub fn pattern(query: &str) -> Result<Self, FilterError> {
        if query.trim().is_empty() {
            return Ok(Self::all());
        }
        let matcher = RegexBuilder::new(query)
            .case_insensitive(true)
            .build()
            .map_err(|source| FilterError::InvalidPattern {
                query: query.to_string(),
                source,
            })?;
        Ok(Self {
            matcher: Some(matcher),
        })
    }

    /// Treat `query` as literal text
    pub fn substring(query: &str) -> Result<Self, FilterError> {
        if query.trim().is_empty() {
            return Ok(Self::all());
        }
        Self::pattern(&regex::escape(query))
    }

    pub fn is_identity(&self) -> bool {
        self.matcher.is_none()
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        match &self.matcher {
            Some(re) => re.is_match(&dish.name) || re.is_match(&dish.dish_type),
            None => true,
        }
    }

    /// Matching dishes in their original order
    pub fn apply(&self, dishes: &[Dish]) -> Vec<Dish> {
        dishes.iter().filter(|d| self.matches(d)).cloned().collect()
    }
}
