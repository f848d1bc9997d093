//! Rule registry.
//!
//! Indexes the rule table by normalized name so dispatch is a single lookup,
//! and derives the [`RuleEffects`] each rule declares.
//!
//! ## Invariants
//!
//! - Names are unique. A later rule with the same name replaces the earlier
//!   one.

use std::collections::HashMap;

use crate::rules::{RuleSpec, TypeEffect};

bitflags::bitflags! {
    /// The concerns a rule touches on a field's metadata.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RuleEffects: u8 {
        const REQUIRED      = 1 << 0;
        const FORCES_TYPE   = 1 << 1;
        const DEFAULTS_TYPE = 1 << 2;
        const DESCRIBES     = 1 << 3;
        const EXAMPLE       = 1 << 4;
    }
}

impl RuleEffects {
    /// Short labels for reports, e.g. `["required", "type!"]`.
    pub fn labels(self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        for (flag, label) in [
            (RuleEffects::REQUIRED, "required"),
            (RuleEffects::FORCES_TYPE, "type!"),
            (RuleEffects::DEFAULTS_TYPE, "type?"),
            (RuleEffects::DESCRIBES, "description"),
            (RuleEffects::EXAMPLE, "value"),
        ] {
            if self.contains(flag) {
                labels.push(label);
            }
        }
        labels
    }
}

impl RuleSpec {
    #[cfg(test)]
    pub(crate) fn declared_effects(&self) -> RuleEffects {
        let mut effects = RuleEffects::empty();
        effects.set(RuleEffects::REQUIRED, self.required);
        effects.set(RuleEffects::FORCES_TYPE, matches!(self.type_effect, TypeEffect::Force(_)));
        effects.set(RuleEffects::DEFAULTS_TYPE, matches!(self.type_effect, TypeEffect::Default(_)));
        effects.set(RuleEffects::DESCRIBES, self.describe.is_some());
        effects.set(RuleEffects::EXAMPLE, self.example.is_some());
        effects
    }
}

#[derive(Debug)]
pub(crate) struct RuleRegistry {
    rules: HashMap<&'static str, RuleSpec>,
}

impl RuleRegistry {
    pub fn new(rules: Vec<RuleSpec>) -> Self {
        let rules = rules.into_iter().map(|spec| (spec.name, spec)).collect();
        RuleRegistry { rules }
    }

    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.rules.get(name)
    }

    /// Rule names in sorted order.
    #[cfg(test)]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
