//! Rule dispatch.
//!
//! Applies one tokenized, normalized rule to a field's metadata:
//!
//! ```text
//! ParsedRule ── registry lookup ──┬─ unknown ──▶ no-op
//!                                 └─ RuleSpec
//!                                      required ─▶ type ─▶ describe ─▶ example
//! ```
//!
//! A failing `describe` or `example` effect is logged and skipped; the other
//! effects of the same rule still apply.

use tracing::{debug, trace};

use super::registry::{RuleEffects, RuleRegistry};
use crate::describe::DescriptionResolver;
use crate::error::RuleError;
use crate::metadata::AttributeMetadata;
use crate::rules::{RuleInput, TypeEffect};
use crate::value_source::ValueSource;
use crate::{Context, Options, ParsedRule};

/// What a dispatched rule did to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The rule name is not in the table; nothing changed.
    Unknown,
    Applied {
        /// Effects that took place.
        effects: RuleEffects,
        /// Effects dropped because a parameter was missing or malformed.
        dropped: Vec<RuleError>,
    },
}

/// Shared, read-only inputs of one aggregation.
#[derive(Clone, Copy)]
pub(crate) struct Environment<'a> {
    pub registry: &'a RuleRegistry,
    pub resolver: &'a dyn DescriptionResolver,
    pub context: &'a Context,
    pub options: &'a Options,
}

pub(crate) fn apply(
    env: &Environment<'_>,
    rule: &ParsedRule,
    name: &str,
    field: &str,
    attr: &mut AttributeMetadata,
    source: &mut ValueSource,
) -> Dispatch {
    let Some(spec) = env.registry.get(name) else {
        debug!(rule = name, field, "ignoring unknown rule");
        return Dispatch::Unknown;
    };

    let mut effects = RuleEffects::empty();
    let mut dropped = Vec::new();

    if spec.required {
        attr.required = true;
        effects |= RuleEffects::REQUIRED;
    }

    match spec.type_effect {
        TypeEffect::Keep => {}
        TypeEffect::Force(ty) => {
            attr.field_type = Some(ty);
            effects |= RuleEffects::FORCES_TYPE;
        }
        TypeEffect::Default(ty) => {
            if attr.field_type.is_none() {
                attr.field_type = Some(ty);
                effects |= RuleEffects::DEFAULTS_TYPE;
            }
        }
    }

    let input = RuleInput {
        rule: name,
        field,
        parameters: &rule.parameters,
        current_type: attr.field_type,
        context: env.context,
        options: env.options,
    };

    if let Some(describe) = spec.describe {
        match describe(&input) {
            Ok(args) => {
                attr.description.push(env.resolver.describe(name).with_args(&args));
                effects |= RuleEffects::DESCRIBES;
            }
            Err(err) => {
                debug!(%err, field, "dropping description");
                dropped.push(err);
            }
        }
    }

    if let Some(example) = spec.example {
        match example(&input, source) {
            Ok(Some(value)) => {
                attr.value = value;
                effects |= RuleEffects::EXAMPLE;
            }
            Ok(None) => {}
            Err(err) => {
                debug!(%err, field, "dropping example value");
                dropped.push(err);
            }
        }
    }

    trace!(rule = name, field, effects = ?effects.labels(), "applied rule");
    Dispatch::Applied { effects, dropped }
}
