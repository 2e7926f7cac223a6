//! Loader utilities for building inventory trees from serialized definitions.
//!
//! Definitions come from `delver_data`; this module turns them into owned
//! component trees and checks them first so malformed data is reported in one
//! aggregated error instead of failing halfway through a build.

use delver_data::{ComponentDef, ModifierDef, ValidationError, validate_component};
use log::{info, warn};

use crate::error::DelverError;
use crate::inventory::{Component, Container, Decorator, InventoryComponent, Item};

/// Validate a definition tree and build it.
///
/// # Errors
/// `MissingWrappedComponent` if any decorator wraps nothing, otherwise
/// `InvalidDefinition` listing every validation problem found.
pub fn load_component(def: &ComponentDef) -> Result<Component, DelverError> {
    validate_def(def)?;
    let component = build_component(def)?;
    info!(
        "built '{}' from definition (weight {}, cost {})",
        component.name(),
        component.weight(),
        component.cost()
    );
    Ok(component)
}

/// Build a component tree from a definition without running the validator.
///
/// Construction still enforces the component invariants (non-empty names,
/// decorators with a target).
///
/// # Errors
/// `EmptyName` or `MissingWrappedComponent` from the first offending node.
pub fn build_component(def: &ComponentDef) -> Result<Component, DelverError> {
    match def {
        ComponentDef::Item { name, weight, cost } => Ok(Box::new(Item::new(name.as_str(), *weight, *cost)?)),
        ComponentDef::Container { name, children } => {
            let mut container = Container::new(name.as_str())?;
            for child in children {
                container.add(build_component(child)?);
            }
            Ok(Box::new(container))
        },
        ComponentDef::Decorated { modifier, inner } => {
            let inner = build_component(inner.as_deref().ok_or(DelverError::MissingWrappedComponent)?)?;
            let decorated: Component = match *modifier {
                ModifierDef::Passthrough => Box::new(Decorator::new(inner)),
                ModifierDef::Enchanted { bonus } => Box::new(Decorator::enchanted(inner, bonus)),
                ModifierDef::Appraised { percent } => Box::new(Decorator::appraised(inner, percent)),
            };
            Ok(decorated)
        },
    }
}

fn validate_def(def: &ComponentDef) -> Result<(), DelverError> {
    let errors = validate_component(def);
    if errors.is_empty() {
        return Ok(());
    }
    for err in &errors {
        warn!("inventory definition: {err}");
    }
    if errors.iter().any(|err| matches!(err, ValidationError::MissingInner { .. })) {
        return Err(DelverError::MissingWrappedComponent);
    }
    let details = errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    Err(DelverError::InvalidDefinition(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn render(component: &Component) -> String {
        let mut out = Vec::new();
        component.display(&mut out, 0, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn builds_nested_tree_in_order() -> Result<()> {
        let def = ComponentDef::container(
            "Backpack",
            vec![
                ComponentDef::item("Sword", 5.0, 50),
                ComponentDef::container("Pouch", vec![ComponentDef::item("Gem", 1.0, 100)]),
                ComponentDef::item("Ring", 1.0, 20).decorated(ModifierDef::Enchanted { bonus: 15 }),
            ],
        );

        let backpack = load_component(&def)?;
        assert_eq!(backpack.weight(), 7.0);
        assert_eq!(backpack.cost(), 185);
        assert_eq!(render(&backpack), "Backpack\n-Sword\n-Pouch\n--Gem\n-Ring (enchanted +15)\n");
        assert_eq!(backpack.to_def(), def);
        Ok(())
    }

    #[test]
    fn decorator_without_target_is_rejected() {
        let def = ComponentDef::container(
            "Backpack",
            vec![ComponentDef::Decorated {
                modifier: ModifierDef::Enchanted { bonus: 2 },
                inner: None,
            }],
        );

        assert!(matches!(load_component(&def), Err(DelverError::MissingWrappedComponent)));
        assert!(matches!(build_component(&def), Err(DelverError::MissingWrappedComponent)));
    }

    #[test]
    fn validation_problems_are_aggregated() {
        let def = ComponentDef::container(
            "",
            vec![ComponentDef::item("Anvil", f64::INFINITY, 5), ComponentDef::item(" ", 1.0, 1)],
        );

        match load_component(&def) {
            Err(DelverError::InvalidDefinition(details)) => assert_eq!(details.lines().count(), 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn build_without_validation_still_checks_names() {
        let def = ComponentDef::item("", 1.0, 1);
        assert!(matches!(build_component(&def), Err(DelverError::EmptyName)));
    }
}
