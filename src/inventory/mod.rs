//! # Inventory
//!
//! Items, their validation rules, the in-memory store, and the handler
//! that applies Create, List, Get, Update and Delete.

pub mod errors;
pub mod handler;
pub mod item;
pub mod store;
pub mod validation;

pub use errors::{ErrorResponse, InventoryError, InventoryResult, ValidationError};
pub use handler::InventoryHandler;
pub use item::{Item, ItemFields, ItemPayload};
pub use store::ItemStore;
pub use validation::validate;
