//! The rule table.
//!
//! Each validation rule kind is a [`RuleSpec`]: a name plus up to four
//! independent effects on the field being documented.
//!
//! ```text
//! required  ── sets `required = true`
//! ty        ── Keep | Force(type) | Default(type, only when unset)
//! describe  ── RuleInput ──▶ DescriptionArgs ──▶ template ──▶ description fragment
//! example   ── RuleInput + ValueSource ──▶ example value (or none)
//! ```
//!
//! Effects run in that order, so `example` sees the type the rule itself just
//! established. `describe` and `example` may fail on a missing or malformed
//! parameter; the dispatcher drops only the effect that failed.
//!
//! New rule kinds go into one of the submodules and are picked up by [`get`].

use crate::error::RuleError;
use crate::metadata::{ExampleValue, FieldType};
use crate::value_source::ValueSource;
use crate::{Context, DescriptionArgs, Options};

mod args;
mod bounds;
mod dates;
mod inflect;
mod presence;
mod text;
mod types;

#[cfg(test)]
mod tests;

/// How a rule affects the field's type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeEffect {
    Keep,
    /// Overwrite whatever type was set before.
    Force(FieldType),
    /// Set only when no earlier rule assigned a type.
    Default(FieldType),
}

pub(crate) type DescribeFn = fn(&RuleInput<'_>) -> Result<DescriptionArgs, RuleError>;
pub(crate) type ExampleFn = fn(&RuleInput<'_>, &mut ValueSource) -> Result<Option<ExampleValue>, RuleError>;

/// One rule kind and its effects.
pub(crate) struct RuleSpec {
    pub name: &'static str,
    pub required: bool,
    pub type_effect: TypeEffect,
    pub describe: Option<DescribeFn>,
    pub example: Option<ExampleFn>,
}

impl std::fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSpec")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("type_effect", &self.type_effect)
            .field("describe", &self.describe.map(|_| "<function>"))
            .field("example", &self.example.map(|_| "<function>"))
            .finish()
    }
}

/// Everything a rule effect may read.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleInput<'a> {
    /// Normalized rule name.
    pub rule: &'a str,
    /// Name of the field being documented.
    pub field: &'a str,
    pub parameters: &'a [String],
    /// Type of the field after this rule's own type effect.
    pub current_type: Option<FieldType>,
    pub context: &'a Context,
    pub options: &'a Options,
}

impl<'a> RuleInput<'a> {
    /// Bounds-checked parameter access.
    pub fn param(&self, index: usize) -> Result<&'a str, RuleError> {
        self.parameters
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| RuleError::MissingParameter { rule: self.rule.to_string(), index })
    }

    /// Parameter `index` read as an integer. Decimal text is truncated toward zero.
    pub fn integer(&self, index: usize) -> Result<i64, RuleError> {
        let raw = self.param(index)?;
        let text = raw.trim();
        text.parse::<i64>()
            .ok()
            .or_else(|| text.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(|| RuleError::InvalidNumber { rule: self.rule.to_string(), value: raw.to_string() })
    }

    /// All parameters, failing when there are none.
    pub fn list(&self) -> Result<&'a [String], RuleError> {
        if self.parameters.is_empty() {
            return Err(RuleError::EmptyList { rule: self.rule.to_string() });
        }
        Ok(self.parameters)
    }
}

/// All built-in rule kinds.
pub(crate) fn get() -> Vec<RuleSpec> {
    let mut rules = Vec::new();
    rules.extend(presence::get());
    rules.extend(types::get());
    rules.extend(bounds::get());
    rules.extend(dates::get());
    rules.extend(text::get());
    rules
}
