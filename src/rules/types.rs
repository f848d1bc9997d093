//! Type-establishing rules.
//!
//! These force the field's type and, for most kinds, synthesize a matching
//! example value. `file` and `image` only classify; `active_url` has no
//! description of its own.

use super::{RuleInput, RuleSpec, TypeEffect, args};
use crate::error::RuleError;
use crate::metadata::{ExampleValue, FieldType};
use crate::value_source::ValueSource;

type Example = Result<Option<ExampleValue>, RuleError>;

fn word(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(source.word())))
}

fn number(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Integer(source.random_number(None, false))))
}

fn truthy(_: &RuleInput<'_>, _: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Bool(true)))
}

fn date(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(source.date_formatted("%Y-%m-%d"))))
}

fn email(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(source.safe_email())))
}

fn url(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(source.url())))
}

fn ip(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(source.ipv4().to_string())))
}

fn json(_: &RuleInput<'_>, _: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(serde_json::json!(["foo", "bar", "baz"]).to_string())))
}

fn custom(_: &RuleInput<'_>, _: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text("oi".to_string())))
}

pub(crate) fn get() -> Vec<RuleSpec> {
    vec![
        rule! { name: "boolean", ty: TypeEffect::Force(FieldType::Boolean), example: truthy },
        rule! { name: "array", ty: TypeEffect::Force(FieldType::Array), example: word },
        rule! { name: "date", ty: TypeEffect::Force(FieldType::Date), example: date },
        rule! { name: "email", ty: TypeEffect::Force(FieldType::Email), example: email },
        rule! { name: "string", ty: TypeEffect::Force(FieldType::String), example: word },
        rule! { name: "integer", ty: TypeEffect::Force(FieldType::Integer), example: number },
        rule! { name: "numeric", ty: TypeEffect::Force(FieldType::Numeric), example: number },
        rule! { name: "url", ty: TypeEffect::Force(FieldType::Url), example: url },
        rule! { name: "active_url", ty: TypeEffect::Force(FieldType::Url), example: url },
        rule! { name: "ip", ty: TypeEffect::Force(FieldType::Ip), example: ip },
        rule! {
            name: "json",
            ty: TypeEffect::Force(FieldType::String),
            describe: args::bare,
            example: json,
        },
        rule! { name: "file", ty: TypeEffect::Force(FieldType::File), describe: args::bare },
        rule! { name: "image", ty: TypeEffect::Force(FieldType::Image), describe: args::bare },
        rule! { name: "custom", ty: TypeEffect::Force(FieldType::Custom), example: custom },
    ]
}
