//! Inventory component model.
//!
//! Inventories are trees: [`Container`]s hold an ordered list of child
//! components, [`Item`]s are leaves, and [`Decorator`]s wrap exactly one
//! component to adjust its weight, cost or label (an enchanted ring, an
//! appraised gem) without the wrapped type knowing about it.
//!
//! Every node is a boxed [`InventoryComponent`] owned by its parent. Totals are
//! recomputed on every read, so adding or removing a child is reflected
//! immediately. Because children are moved into their parent, a container can
//! never end up inside itself.

pub mod container;
pub mod decorator;
pub mod item;

pub use container::Container;
pub use decorator::{Appraised, Decorator, Enchanted, Modifier, Passthrough};
pub use item::Item;

use std::fmt;
use std::io::Write;

use colored::Color;
use delver_data::ComponentDef;

use crate::console;
use crate::error::DelverError;
use crate::idgen::ComponentId;

/// An owned node in an inventory tree.
pub type Component = Box<dyn InventoryComponent>;

/// Capabilities shared by every inventory node.
///
/// Only `id`, `name`, `weight`, `cost` and `to_def` are required. Leaves keep
/// the default `children`/`add`/`remove`, which turn the composite operations
/// into no-ops.
pub trait InventoryComponent: fmt::Debug + Send {
    /// Identity used to find and remove this component.
    fn id(&self) -> ComponentId;

    fn name(&self) -> &str;

    /// Total weight, including anything contained or wrapped.
    fn weight(&self) -> f64;

    /// Total cost, including anything contained or wrapped.
    fn cost(&self) -> i64;

    /// Text written on this component's display line.
    fn label(&self) -> String {
        self.name().to_string()
    }

    /// Direct children, in display order. Empty for leaves.
    fn children(&self) -> &[Component] {
        &[]
    }

    /// The component this one wraps, if it is a decorator.
    fn wrapped(&self) -> Option<&(dyn InventoryComponent + 'static)> {
        None
    }

    /// Append a child. Components that cannot hold children hand it back.
    fn add(&mut self, child: Component) -> Option<Component> {
        Some(child)
    }

    /// Detach the first child with the given id and return it.
    fn remove(&mut self, id: ComponentId) -> Option<Component> {
        let _ = id;
        None
    }

    /// Serializable mirror of this component and everything below it.
    fn to_def(&self) -> ComponentDef;

    /// Write this component and its children, one line each.
    ///
    /// Each line starts with `indent` dashes; children are written depth-first
    /// at `indent + 1`. `style` is passed untouched to [`console::write`].
    ///
    /// # Errors
    /// Only I/O errors from `out`.
    fn display(&self, out: &mut dyn Write, indent: usize, style: Option<Color>) -> Result<(), DelverError> {
        console::write(out, &format!("{}{}", "-".repeat(indent), self.label()), true, style)?;
        for child in self.children() {
            child.display(out, indent + 1, style)?;
        }
        Ok(())
    }
}

impl<'a> dyn InventoryComponent + 'a {
    /// Search this subtree (wrapped components included) for `id`.
    pub fn find(&self, id: ComponentId) -> Option<&dyn InventoryComponent> {
        if self.id() == id {
            return Some(self);
        }
        if let Some(inner) = self.wrapped() {
            return inner.find(id);
        }
        self.children().iter().find_map(|child| child.find(id))
    }
}

/// Names must contain something other than whitespace.
pub(crate) fn validated_name(name: impl Into<String>) -> Result<String, DelverError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(DelverError::EmptyName);
    }
    Ok(name)
}
