//! Character-class, membership and cross-field rules.

use super::{RuleInput, RuleSpec, TypeEffect, args, inflect};
use crate::error::RuleError;
use crate::metadata::{ExampleValue, FieldType};
use crate::value_source::ValueSource;
use crate::DescriptionArgs;

type Example = Result<Option<ExampleValue>, RuleError>;

fn word(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(source.word())))
}

fn one_of(input: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    let choices = input.list()?;
    Ok(source.element(choices).map(|choice| ExampleValue::Text(choice.clone())))
}

/// `exists:users` → (`user`, field); `exists:users,email` → (`user`, `email`).
fn exists_description(input: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    let table = inflect::singularize(input.param(0)?);
    let column = input.param(1).unwrap_or(input.field);
    Ok(DescriptionArgs::Many(vec![table, column.to_string()]))
}

pub(crate) fn get() -> Vec<RuleSpec> {
    vec![
        rule! { name: "alpha", describe: args::bare, example: word },
        rule! { name: "alpha_dash", describe: args::bare },
        rule! { name: "alpha_num", describe: args::bare },
        rule! { name: "in", describe: args::any_of, example: one_of },
        // The word is not checked against the excluded set.
        rule! { name: "not_in", describe: args::any_of, example: word },
        rule! { name: "mimes", describe: args::any_of },
        rule! { name: "mimetypes", describe: args::any_of },
        rule! { name: "different", describe: args::first },
        rule! { name: "same", describe: args::first },
        rule! { name: "regex", ty: TypeEffect::Force(FieldType::String), describe: args::first },
        rule! { name: "exists", describe: exists_description },
    ]
}
