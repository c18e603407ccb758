use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store-assigned dish identifier
pub type DishId = i64;

/// A menu item in the catalog.
///
/// Instances are disconnected copies of stored rows: changing a field does
/// nothing until the dish is passed back to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Assigned by the store on insert; `None` for a dish never saved
    pub id: Option<DishId>,

    pub name: String,

    /// Category such as "Sichuan" or "Dessert"
    #[serde(rename = "type")]
    pub dish_type: String,

    pub price: f64,

    pub ingredients: String,

    pub introduction: String,

    /// Reference to an image file; never checked by persistence
    pub photo_path: Option<String>,
}

/// Every caller-editable field of a dish
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DishFields {
    pub name: String,
    pub dish_type: String,
    pub price: f64,
    pub ingredients: String,
    pub introduction: String,
    pub photo_path: Option<String>,
}

impl Dish {
    /// Create a transient dish with empty descriptive fields
    pub fn new(name: impl Into<String>, dish_type: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            dish_type: dish_type.into(),
            price,
            ingredients: String::new(),
            introduction: String::new(),
            photo_path: None,
        }
    }

    /// Create a transient dish from a full field set
    pub fn from_fields(fields: DishFields) -> Self {
        let mut dish = Self::new(String::new(), String::new(), 0.0);
        dish.apply(fields);
        dish
    }

    pub fn with_id(mut self, id: DishId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_details(
        mut self,
        ingredients: impl Into<String>,
        introduction: impl Into<String>,
        photo_path: Option<String>,
    ) -> Self {
        self.ingredients = ingredients.into();
        self.introduction = introduction.into();
        self.photo_path = normalize_photo_path(photo_path);
        self
    }

    /// Overwrite every field except the id
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.dish_type = fields.dish_type;
        self.price = fields.price;
        self.ingredients = fields.ingredients;
        self.introduction = fields.introduction;
        self.photo_path = normalize_photo_path(fields.photo_path);
    }

    /// The photo file, if one is referenced and currently exists on disk.
    ///
    /// Display-time helper; persistence accepts dangling references.
    pub fn photo_file(&self) -> Option<PathBuf> {
        let path = PathBuf::from(self.photo_path.as_deref()?);
        path.is_file().then_some(path)
    }
}

fn normalize_photo_path(photo_path: Option<String>) -> Option<String> {
    photo_path.filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_photo_path_is_none() {
        let dish = Dish::new("Mapo Tofu", "Sichuan", 22.0).with_details("", "", Some("  ".into()));
        assert_eq!(dish.photo_path, None);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut dish = Dish::new("Old", "Cantonese", 1.0).with_id(7);
        dish.apply(DishFields {
            name: "New".into(),
            dish_type: "Hunan".into(),
            price: 3.5,
            ..Default::default()
        });
        assert_eq!(dish.id, Some(7));
        assert_eq!(dish.name, "New");
        assert_eq!(dish.price, 3.5);
    }

    #[test]
    fn test_photo_file_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("dish.png");

        let dish = Dish::new("Dumplings", "Northern", 12.0).with_details(
            "",
            "",
            Some(photo.to_string_lossy().into_owned()),
        );
        assert_eq!(dish.photo_file(), None);

        std::fs::write(&photo, b"png").unwrap();
        assert_eq!(dish.photo_file(), Some(photo));
    }

    #[test]
    fn test_serializes_type_field() {
        let dish = Dish::new("Char Siu", "Cantonese", 30.0);
        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["type"], "Cantonese");
    }
}
