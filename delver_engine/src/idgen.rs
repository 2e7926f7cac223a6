//! ** idgen module **
//! Identity handles for inventory components.
//!
//! Components are matched by identity (not by name or value) when removed from a
//! container, so every component receives a random v4 UUID when constructed.
use uuid::Uuid;

/// Identity of a single inventory component.
pub type ComponentId = Uuid;

/// Generate a fresh, random component id.
pub fn new_id() -> ComponentId {
    Uuid::new_v4()
}
