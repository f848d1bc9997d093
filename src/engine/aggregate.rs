//! Per-field aggregation.
//!
//! Folds an ordered rule list into one [`AttributeMetadata`]:
//!
//! ```text
//! fresh record ──▶ for each raw rule: tokenize → normalize → dispatch ──▶ finalize
//! ```
//!
//! Later rules overwrite `type` and `value`; `description` only grows.
//! Finalization runs once: an unset type becomes `string` and an empty value
//! becomes a word drawn from the field's own [`ValueSource`].

use tracing::debug_span;

use super::dispatch::{Dispatch, Environment, apply};
use super::normalize::normalize;
use super::tokenizer::tokenize;
use crate::metadata::{AttributeMetadata, ExampleValue, FieldType};
use crate::value_source::ValueSource;

/// Trace entry for one raw rule of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// The rule as written.
    pub raw: String,
    /// Normalized rule name.
    pub rule: String,
    pub parameters: Vec<String>,
    pub dispatch: Dispatch,
}

pub(crate) fn aggregate_rules<I, S>(
    env: &Environment<'_>,
    field: &str,
    rules: I,
    seed: &str,
    mut trace: Option<&mut Vec<RuleOutcome>>,
) -> AttributeMetadata
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let _span = debug_span!("aggregate", field, seed).entered();

    let mut source = ValueSource::from_seed(seed);
    let mut attr = AttributeMetadata::default();

    for raw in rules {
        let raw = raw.as_ref();
        let parsed = tokenize(raw);
        let name = normalize(&parsed.name);
        let dispatch = apply(env, &parsed, name, field, &mut attr, &mut source);

        if let Some(trace) = trace.as_deref_mut() {
            trace.push(RuleOutcome {
                raw: raw.to_string(),
                rule: name.to_string(),
                parameters: parsed.parameters.clone(),
                dispatch,
            });
        }
    }

    finalize(&mut attr, &mut source);
    attr
}

fn finalize(attr: &mut AttributeMetadata, source: &mut ValueSource) {
    if attr.field_type.is_none() {
        attr.field_type = Some(FieldType::String);
    }
    if attr.value.is_empty() {
        attr.value = ExampleValue::Text(source.word());
    }
}
