// src/codec/dish_record.rs
//
// One dish per line:
//
//     id;name;type;price;ingredients;introduction;photoPath
//
// Encoding replaces every `;` inside a text field with `,`. This is lossy:
// a field that contains `;` does not survive a round trip. Names and
// ingredients that need the delimiter are an accepted limitation of the
// format.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

use crate::domain::{Dish, DishId};

pub const FIELD_DELIMITER: char = ';';
pub const DELIMITER_REPLACEMENT: char = ',';
pub const FIELD_COUNT: usize = 7;

/// Id written for a dish that has never been saved
const UNSAVED_ID: DishId = 0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid price '{value}': {source}")]
    InvalidPrice {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("price '{0}' is not a finite number")]
    NonFinitePrice(String),
}

/// Encode a dish as one record, without a line terminator
pub fn encode(dish: &Dish) -> String {
    let fields = [
        dish.id.unwrap_or(UNSAVED_ID).to_string(),
        escape(&dish.name),
        escape(&dish.dish_type),
        format!("{:?}", dish.price),
        escape(&dish.ingredients),
        escape(&dish.introduction),
        escape(dish.photo_path.as_deref().unwrap_or("")),
    ];
    fields.join(&FIELD_DELIMITER.to_string())
}

pub fn encode_all(dishes: &[Dish]) -> Vec<String> {
    dishes.iter().map(encode).collect()
}

/// Decode one record.
///
/// Splits into at most `FIELD_COUNT` parts, so the last field keeps any
/// extra delimiters verbatim.
pub fn decode(line: &str) -> Result<Dish, DecodeError> {
    let parts: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();
    if parts.len() < FIELD_COUNT {
        return Err(DecodeError::FieldCount {
            expected: FIELD_COUNT,
            found: parts.len(),
        });
    }

    let id: DishId = parts[0].parse().map_err(|source| DecodeError::InvalidId {
        value: parts[0].to_string(),
        source,
    })?;

    let price_text = parts[3].trim();
    let price: f64 = price_text
        .parse()
        .map_err(|source| DecodeError::InvalidPrice {
            value: price_text.to_string(),
            source,
        })?;
    if !price.is_finite() {
        return Err(DecodeError::NonFinitePrice(price_text.to_string()));
    }

    let photo_path = Some(parts[6].to_string());
    let dish = Dish::new(parts[1], parts[2], price).with_details(parts[4], parts[5], photo_path);

    Ok(if id == UNSAVED_ID { dish } else { dish.with_id(id) })
}

fn escape(field: &str) -> String {
    field.replace(FIELD_DELIMITER, &DELIMITER_REPLACEMENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kung_pao() -> Dish {
        Dish::new("Kung Pao Chicken", "Sichuan", 38.5)
            .with_details(
                "chicken, peanuts, chili",
                "A spicy classic",
                Some("/photos/kungpao.jpg".to_string()),
            )
            .with_id(1)
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(
            encode(&kung_pao()),
            "1;Kung Pao Chicken;Sichuan;38.5;chicken, peanuts, chili;A spicy classic;/photos/kungpao.jpg"
        );
    }

    #[test]
    fn test_encode_whole_price_keeps_fraction() {
        let dish = Dish::new("A", "B", 10.0).with_id(3);
        assert_eq!(encode(&dish), "3;A;B;10.0;;;");
    }

    #[test]
    fn test_encode_unsaved_dish_uses_zero_id() {
        let dish = Dish::new("A", "B", 1.5);
        assert!(encode(&dish).starts_with("0;"));
        assert_eq!(decode(&encode(&dish)).unwrap(), dish);
    }

    #[test]
    fn test_round_trip() {
        let dish = kung_pao();
        assert_eq!(decode(&encode(&dish)).unwrap(), dish);
    }

    #[test]
    fn test_price_compares_by_value() {
        let dish = decode("5;Fish;Cantonese;38.50;;;").unwrap();
        assert_eq!(dish.price, 38.5);
        assert_eq!(encode(&dish), "5;Fish;Cantonese;38.5;;;");
    }

    #[test]
    fn test_delimiter_is_replaced() {
        let dish = Dish::new("Salt;Pepper Squid", "Sea;food", 48.0)
            .with_details("squid;salt", "crispy", None)
            .with_id(9);
        let line = encode(&dish);
        assert_eq!(line, "9;Salt,Pepper Squid;Sea,food;48.0;squid,salt;crispy;");

        let decoded = decode(&line).unwrap();
        assert_eq!(decoded.name, "Salt,Pepper Squid");
        assert!(!decoded.ingredients.contains(FIELD_DELIMITER));
    }

    #[test]
    fn test_last_field_absorbs_extra_delimiters() {
        let dish = decode("1;A;B;10.0;x;y;z;extra;more").unwrap();
        assert_eq!(dish.photo_path.as_deref(), Some("z;extra;more"));
    }

    #[test]
    fn test_empty_photo_is_none() {
        let dish = decode("2;C;D;5;a;b;").unwrap();
        assert_eq!(dish.photo_path, None);
        assert_eq!(dish.price, 5.0);
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            decode("bad;line"),
            Err(DecodeError::FieldCount {
                expected: FIELD_COUNT,
                found: 2
            })
        );
        assert!(matches!(decode(""), Err(DecodeError::FieldCount { found: 1, .. })));
    }

    #[test]
    fn test_bad_id() {
        assert!(matches!(
            decode("one;A;B;10.0;x;y;z"),
            Err(DecodeError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_bad_price() {
        assert!(matches!(
            decode("1;A;B;ten;x;y;z"),
            Err(DecodeError::InvalidPrice { .. })
        ));
        assert!(matches!(
            decode("1;A;B;NaN;x;y;z"),
            Err(DecodeError::NonFinitePrice(_))
        ));
    }

    #[test]
    fn test_encode_all_preserves_order() {
        let dishes = vec![kung_pao(), Dish::new("A", "B", 1.0).with_id(2)];
        let lines = encode_all(&dishes);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1;"));
        assert!(lines[1].starts_with("2;"));
    }
}
