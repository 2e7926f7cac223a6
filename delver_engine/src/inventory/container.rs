//! Composite inventory components.

use delver_data::ComponentDef;
use log::{debug, info};

use super::{Component, InventoryComponent, validated_name};
use crate::error::DelverError;
use crate::idgen::{self, ComponentId};

/// A named holder (backpack, pouch, chest) for an ordered list of components.
///
/// Weight and cost are the sums over the children and are never cached.
#[derive(Debug)]
pub struct Container {
    id: ComponentId,
    name: String,
    children: Vec<Component>,
}

impl Container {
    /// Create an empty container.
    ///
    /// # Errors
    /// `EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Container, DelverError> {
        Ok(Container {
            id: idgen::new_id(),
            name: validated_name(name)?,
            children: Vec::new(),
        })
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl InventoryComponent for Container {
    fn id(&self) -> ComponentId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn weight(&self) -> f64 {
        self.children.iter().map(|child| child.weight()).sum()
    }
    fn cost(&self) -> i64 {
        self.children
            .iter()
            .fold(0i64, |total, child| total.saturating_add(child.cost()))
    }
    fn children(&self) -> &[Component] {
        &self.children
    }

    /// Always accepts the child, appending it after any existing children.
    fn add(&mut self, child: Component) -> Option<Component> {
        debug!("{}({}) <- {}({})", self.name, self.id, child.name(), child.id());
        self.children.push(child);
        None
    }

    fn remove(&mut self, id: ComponentId) -> Option<Component> {
        let Some(idx) = self.children.iter().position(|child| child.id() == id) else {
            debug!("{}({}): nothing to remove with id {id}", self.name, self.id);
            return None;
        };
        let removed = self.children.remove(idx);
        info!("{}({}) -> {}({})", self.name, self.id, removed.name(), removed.id());
        Some(removed)
    }

    fn to_def(&self) -> ComponentDef {
        ComponentDef::container(
            self.name.clone(),
            self.children.iter().map(|child| child.to_def()).collect(),
        )
    }
}
