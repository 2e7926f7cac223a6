use std::fmt;

use crate::*;

/// Validation error for malformed nodes in a `ComponentDef` tree.
///
/// `context` is the slash-separated path from the root to the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName { context: String },
    MissingInner { context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName { context } => {
                write!(f, "empty name ({context})")
            },
            ValidationError::MissingInner { context } => {
                write!(f, "decorator wraps nothing ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate names, values and decorator targets across a `ComponentDef` tree.
///
/// ```
/// use delver_data::{ComponentDef, ModifierDef, validate_component};
///
/// let backpack = ComponentDef::container(
///     "Backpack",
///     vec![
///         ComponentDef::item("Sword", 5.0, 50),
///         ComponentDef::item("Ring", 1.0, 20).decorated(ModifierDef::Enchanted { bonus: 15 }),
///     ],
/// );
/// assert!(validate_component(&backpack).is_empty());
/// ```
pub fn validate_component(def: &ComponentDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_node(def, &def.describe(), &mut errors);
    errors
}

fn validate_node(def: &ComponentDef, path: &str, errors: &mut Vec<ValidationError>) {
    match def {
        ComponentDef::Item { name, weight, .. } => {
            check_name(name, path, errors);
            if !weight.is_finite() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{path} weight {weight}"),
                });
            }
        },
        ComponentDef::Container { name, children } => {
            check_name(name, path, errors);
            for child in children {
                validate_node(child, &format!("{path}/{}", child.describe()), errors);
            }
        },
        ComponentDef::Decorated { inner, .. } => {
            match inner {
                Some(inner) => validate_node(inner, &format!("{path}/{}", inner.describe()), errors),
                None => errors.push(ValidationError::MissingInner {
                    context: path.to_string(),
                }),
            }
        },
    }
}

fn check_name(name: &str, path: &str, errors: &mut Vec<ValidationError>) {
    if name.trim().is_empty() {
        errors.push(ValidationError::EmptyName {
            context: path.to_string(),
        });
    }
}
