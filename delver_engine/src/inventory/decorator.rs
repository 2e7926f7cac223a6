//! Decorators wrap one component and adjust what it reports.
//!
//! A [`Decorator`] owns exactly one wrapped component for its whole lifetime and
//! delegates to it. What changes is decided by its [`Modifier`]: the
//! pass-through modifier changes nothing, [`Enchanted`] adds a flat cost bonus,
//! and [`Appraised`] scales cost by a percentage.
//!
//! Decorators nest. Values are computed innermost-first, so in
//! `outer(inner(leaf))` the leaf's value is adjusted by `inner` and the result
//! by `outer`. Additive modifiers commute; [`Appraised`] does not commute with
//! them.

use std::fmt;

use delver_data::{ComponentDef, ModifierDef};

use super::{Component, InventoryComponent};
use crate::idgen::{self, ComponentId};

/// An adjustment applied by a [`Decorator`] on top of the wrapped values.
///
/// Every hook defaults to returning its input, so a modifier only overrides
/// what it changes.
pub trait Modifier: fmt::Debug + Send {
    fn adjust_weight(&self, weight: f64) -> f64 {
        weight
    }

    fn adjust_cost(&self, cost: i64) -> i64 {
        cost
    }

    fn adjust_label(&self, label: String) -> String {
        label
    }

    fn to_def(&self) -> ModifierDef;
}

/// Delegates everything unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Passthrough;

impl Modifier for Passthrough {
    fn to_def(&self) -> ModifierDef {
        ModifierDef::Passthrough
    }
}

/// Adds a flat bonus to cost and tags the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enchanted {
    pub bonus: i64,
}

impl Modifier for Enchanted {
    fn adjust_cost(&self, cost: i64) -> i64 {
        cost.saturating_add(self.bonus)
    }
    fn adjust_label(&self, label: String) -> String {
        format!("{label} (enchanted {:+})", self.bonus)
    }
    fn to_def(&self) -> ModifierDef {
        ModifierDef::Enchanted { bonus: self.bonus }
    }
}

/// Scales cost to `percent`% of the wrapped cost, rounding halves away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appraised {
    pub percent: i64,
}

impl Modifier for Appraised {
    fn adjust_cost(&self, cost: i64) -> i64 {
        let scaled = i128::from(cost) * i128::from(self.percent);
        let half = if scaled < 0 { -50 } else { 50 };
        let rounded = (scaled + half) / 100;
        i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
    }
    fn adjust_label(&self, label: String) -> String {
        format!("{label} (appraised {}%)", self.percent)
    }
    fn to_def(&self) -> ModifierDef {
        ModifierDef::Appraised { percent: self.percent }
    }
}

/// Wraps one component and reports its values through a [`Modifier`].
///
/// Composite operations (`add`, `remove`, `children`) are forwarded to the
/// wrapped component, so a decorated container still holds things.
#[derive(Debug)]
pub struct Decorator<M = Passthrough> {
    id: ComponentId,
    inner: Component,
    modifier: M,
}

impl Decorator<Passthrough> {
    /// Wrap `inner` without changing anything it reports.
    pub fn new(inner: Component) -> Self {
        Self::with_modifier(inner, Passthrough)
    }
}

impl Decorator<Enchanted> {
    pub fn enchanted(inner: Component, bonus: i64) -> Self {
        Self::with_modifier(inner, Enchanted { bonus })
    }
}

impl Decorator<Appraised> {
    pub fn appraised(inner: Component, percent: i64) -> Self {
        Self::with_modifier(inner, Appraised { percent })
    }
}

impl<M: Modifier> Decorator<M> {
    pub fn with_modifier(inner: Component, modifier: M) -> Self {
        Self {
            id: idgen::new_id(),
            inner,
            modifier,
        }
    }

    pub fn inner(&self) -> &dyn InventoryComponent {
        self.inner.as_ref()
    }

    /// Unwrap, giving back the wrapped component.
    pub fn into_inner(self) -> Component {
        self.inner
    }
}

impl<M: Modifier> InventoryComponent for Decorator<M> {
    fn id(&self) -> ComponentId {
        self.id
    }
    fn name(&self) -> &str {
        self.inner.name()
    }
    fn weight(&self) -> f64 {
        self.modifier.adjust_weight(self.inner.weight())
    }
    fn cost(&self) -> i64 {
        self.modifier.adjust_cost(self.inner.cost())
    }
    fn label(&self) -> String {
        self.modifier.adjust_label(self.inner.label())
    }
    fn children(&self) -> &[Component] {
        self.inner.children()
    }
    fn wrapped(&self) -> Option<&(dyn InventoryComponent + 'static)> {
        Some(self.inner.as_ref())
    }
    fn add(&mut self, child: Component) -> Option<Component> {
        self.inner.add(child)
    }
    fn remove(&mut self, id: ComponentId) -> Option<Component> {
        self.inner.remove(id)
    }
    fn to_def(&self) -> ComponentDef {
        ComponentDef::Decorated {
            modifier: self.modifier.to_def(),
            inner: Some(Box::new(self.inner.to_def())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Container, Item};
    use anyhow::Result;

    fn ring() -> Component {
        Box::new(Item::new("Ring", 1.0, 20).unwrap())
    }

    fn render(component: &dyn InventoryComponent) -> String {
        let mut out = Vec::new();
        component.display(&mut out, 0, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn passthrough_delegates_unchanged() -> Result<()> {
        let mut pack = Container::new("Pack")?;
        pack.add(Box::new(Item::new("Rope", 2.5, 4)?));
        pack.add(ring());
        let expected = render(&pack);
        let (weight, cost) = (pack.weight(), pack.cost());

        let plain = Decorator::new(Box::new(pack));
        assert_eq!(plain.weight(), weight);
        assert_eq!(plain.cost(), cost);
        assert_eq!(render(&plain), expected);
        Ok(())
    }

    #[test]
    fn enchanted_ring_adds_bonus_to_cost_only() {
        let enchanted = Decorator::enchanted(ring(), 15);
        assert_eq!(enchanted.weight(), 1.0);
        assert_eq!(enchanted.cost(), 35);
        assert_eq!(enchanted.name(), "Ring");
        assert_eq!(render(&enchanted), "Ring (enchanted +15)\n");
    }

    #[test]
    fn stacked_enchantments_add_up_in_any_order() {
        let a = Decorator::enchanted(Box::new(Decorator::enchanted(ring(), 2)), 5);
        let b = Decorator::enchanted(Box::new(Decorator::enchanted(ring(), 5)), 2);
        assert_eq!(a.cost(), 27);
        assert_eq!(b.cost(), 27);
        assert_eq!(render(&a), "Ring (enchanted +2) (enchanted +5)\n");
    }

    #[test]
    fn appraisal_and_enchantment_apply_innermost_first() {
        // (20 + 10) * 150% = 45
        let appraised_outer = Decorator::appraised(Box::new(Decorator::enchanted(ring(), 10)), 150);
        // 20 * 150% + 10 = 40
        let enchanted_outer = Decorator::enchanted(Box::new(Decorator::appraised(ring(), 150)), 10);
        assert_eq!(appraised_outer.cost(), 45);
        assert_eq!(enchanted_outer.cost(), 40);
    }

    #[test]
    fn appraisal_rounds_halves_away_from_zero() {
        assert_eq!(Appraised { percent: 50 }.adjust_cost(5), 3);
        assert_eq!(Appraised { percent: 50 }.adjust_cost(-5), -3);
        assert_eq!(Appraised { percent: 33 }.adjust_cost(10), 3);
        assert_eq!(Appraised { percent: 200 }.adjust_cost(i64::MAX), i64::MAX);
    }

    #[test]
    fn decorated_container_still_accepts_children() -> Result<()> {
        let bag = Container::new("Bag of Holding")?;
        let mut enchanted = Decorator::enchanted(Box::new(bag), 100);
        let coin = Item::new("Coin", 0.1, 1)?;
        let coin_id = coin.id();

        assert!(enchanted.add(Box::new(coin)).is_none());
        assert_eq!(enchanted.children().len(), 1);
        assert_eq!(enchanted.cost(), 101);
        assert_eq!(render(&enchanted), "Bag of Holding (enchanted +100)\n-Coin\n");

        assert!(enchanted.remove(coin_id).is_some());
        assert_eq!(enchanted.cost(), 100);
        Ok(())
    }

    #[test]
    fn decorated_leaf_refuses_children() {
        let mut enchanted = Decorator::enchanted(ring(), 1);
        assert!(enchanted.add(ring()).is_some());
        assert!(enchanted.children().is_empty());
    }

    #[test]
    fn decorator_has_its_own_identity() {
        let inner = ring();
        let inner_id = inner.id();
        let enchanted = Decorator::enchanted(inner, 3);
        assert_ne!(enchanted.id(), inner_id);
        assert_eq!(enchanted.inner().id(), inner_id);
        assert_eq!(enchanted.into_inner().id(), inner_id);
    }

    #[test]
    fn to_def_nests_modifiers_outermost_first() {
        let def = Decorator::appraised(Box::new(Decorator::enchanted(ring(), 10)), 150).to_def();
        let expected = ComponentDef::item("Ring", 1.0, 20)
            .decorated(ModifierDef::Enchanted { bonus: 10 })
            .decorated(ModifierDef::Appraised { percent: 150 });
        assert_eq!(def, expected);
    }
}
