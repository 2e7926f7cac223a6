use serde::{Deserialize, Serialize};

/// Serializable mirror of an inventory component tree.
///
/// This is the stable field mapping used by save files: every node carries a
/// `kind` tag, items and containers carry a `name`, containers list their
/// `children` in display order, and decorators hold a `modifier` plus the
/// `inner` definition they wrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ComponentDef {
    Item {
        name: String,
        weight: f64,
        cost: i64,
    },
    Container {
        name: String,
        #[serde(default)]
        children: Vec<ComponentDef>,
    },
    Decorated {
        modifier: ModifierDef,
        /// `None` only in malformed data; the engine refuses to build it.
        #[serde(default)]
        inner: Option<Box<ComponentDef>>,
    },
}

impl ComponentDef {
    /// Convenience constructor for a leaf item definition.
    pub fn item(name: impl Into<String>, weight: f64, cost: i64) -> Self {
        Self::Item {
            name: name.into(),
            weight,
            cost,
        }
    }

    /// Convenience constructor for a container definition.
    pub fn container(name: impl Into<String>, children: Vec<ComponentDef>) -> Self {
        Self::Container {
            name: name.into(),
            children,
        }
    }

    /// Wrap this definition in a decorator definition.
    pub fn decorated(self, modifier: ModifierDef) -> Self {
        Self::Decorated {
            modifier,
            inner: Some(Box::new(self)),
        }
    }

    /// Short label for the node, used in validation messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Item { name, .. } => format!("item '{name}'"),
            Self::Container { name, .. } => format!("container '{name}'"),
            Self::Decorated { modifier, .. } => format!("{} decorator", modifier.kind_name()),
        }
    }
}

/// Adjustments a decorator can apply to the component it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ModifierDef {
    /// Delegates everything unchanged.
    Passthrough,
    /// Adds a flat bonus to the wrapped cost.
    Enchanted { bonus: i64 },
    /// Scales the wrapped cost by a percentage.
    Appraised { percent: i64 },
}

impl ModifierDef {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Enchanted { .. } => "enchanted",
            Self::Appraised { .. } => "appraised",
        }
    }
}
