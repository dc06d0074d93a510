//! Domain models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod validation;

pub use item::{CreateItemRequest, DeletedItem, Item, ItemName, UpdateItemRequest};
pub use validation::ValidationError;
