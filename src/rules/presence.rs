//! Presence rules: `required`, `accepted` and the conditional `required_*` family.

use super::{RuleInput, RuleSpec, TypeEffect, args};
use crate::error::RuleError;
use crate::metadata::{ExampleValue, FieldType};
use crate::value_source::ValueSource;

fn accepted_value(_: &RuleInput<'_>, _: &mut ValueSource) -> Result<Option<ExampleValue>, RuleError> {
    Ok(Some(ExampleValue::Bool(true)))
}

pub(crate) fn get() -> Vec<RuleSpec> {
    vec![
        rule! { name: "required", required: true },
        rule! {
            name: "accepted",
            required: true,
            ty: TypeEffect::Force(FieldType::Boolean),
            example: accepted_value,
        },
        rule! { name: "required_if", describe: args::conditions },
        rule! { name: "required_unless", describe: args::conditions },
        rule! { name: "required_with", describe: args::any_of },
        rule! { name: "required_with_all", describe: args::all_of },
        rule! { name: "required_without", describe: args::any_of },
        rule! { name: "required_without_all", describe: args::all_of },
    ]
}
