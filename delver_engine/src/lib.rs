#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DELVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod console;
pub mod error;
pub mod idgen;
pub mod inventory;
pub mod loader;
pub mod math;
pub mod storage;
pub mod style;
pub mod theme;

// Re-exports for convenience
pub use error::DelverError;
pub use idgen::ComponentId;
pub use inventory::{Appraised, Component, Container, Decorator, Enchanted, InventoryComponent, Item, Modifier, Passthrough};
pub use loader::load_component;
pub use storage::{load_inventory, save_inventory};
