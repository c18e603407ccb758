// src/codec/mod.rs
//
// Bulk exchange format

pub mod dish_record;

pub use dish_record::{decode, encode, encode_all, DecodeError, FIELD_COUNT, FIELD_DELIMITER};
