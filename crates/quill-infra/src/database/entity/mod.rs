//! SeaORM entities and their domain conversions.

pub mod category;
pub mod draft;
pub mod post;
