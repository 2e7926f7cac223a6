//! Shared data model for persisted Delver inventories.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_component};
