//! Leaf inventory components.

use delver_data::ComponentDef;

use super::{InventoryComponent, validated_name};
use crate::error::DelverError;
use crate::idgen::{self, ComponentId};

/// A single carried object with a fixed weight and cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ComponentId,
    name: String,
    weight: f64,
    cost: i64,
}

impl Item {
    /// Create an item. Weight and cost are stored exactly as given.
    ///
    /// # Errors
    /// `EmptyName` if `name` is blank, `NonFiniteWeight` for NaN or infinite weight.
    pub fn new(name: impl Into<String>, weight: f64, cost: i64) -> Result<Item, DelverError> {
        if !weight.is_finite() {
            return Err(DelverError::NonFiniteWeight(weight));
        }
        Ok(Item {
            id: idgen::new_id(),
            name: validated_name(name)?,
            weight,
            cost,
        })
    }
}

impl InventoryComponent for Item {
    fn id(&self) -> ComponentId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn weight(&self) -> f64 {
        self.weight
    }
    fn cost(&self) -> i64 {
        self.cost
    }
    fn to_def(&self) -> ComponentDef {
        ComponentDef::item(self.name.clone(), self.weight, self.cost)
    }
}
