//! Size and range rules.
//!
//! `min`/`max` only produce a bounded example when the field is already
//! numeric at the point they are applied, so `["min:5", "integer"]` and
//! `["integer", "min:5"]` document differently.

use super::{RuleInput, RuleSpec, TypeEffect, args};
use crate::error::RuleError;
use crate::metadata::{ExampleValue, FieldType};
use crate::value_source::{MAX_RANDOM, ValueSource};

type Example = Result<Option<ExampleValue>, RuleError>;

/// Below this many digits `digits:N` draws an integer; from here on a digit string.
const DIGITS_STRING_THRESHOLD: i64 = 9;

/// Longest digit count an example is synthesized for.
const MAX_DIGITS: i64 = 255;

fn min_value(input: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    if !input.current_type.is_some_and(FieldType::is_numeric) {
        return Ok(None);
    }
    let min = input.integer(0)?;
    Ok(Some(ExampleValue::Integer(source.number_between(min, MAX_RANDOM.max(min)))))
}

fn max_value(input: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    if !input.current_type.is_some_and(FieldType::is_numeric) {
        return Ok(None);
    }
    let max = input.integer(0)?;
    Ok(Some(ExampleValue::Integer(source.number_between(0, max))))
}

fn between_value(input: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    let (min, max) = (input.integer(0)?, input.integer(1)?);
    Ok(Some(ExampleValue::Integer(source.number_between(min, max))))
}

fn digits_value(input: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    let count = input.integer(0)?;
    if !(1..=MAX_DIGITS).contains(&count) {
        return Err(RuleError::InvalidNumber { rule: input.rule.to_string(), value: count.to_string() });
    }
    if count < DIGITS_STRING_THRESHOLD {
        Ok(Some(ExampleValue::Integer(source.random_number(Some(count as u32), true))))
    } else {
        Ok(Some(ExampleValue::Text(source.digit_string(count as usize))))
    }
}

pub(crate) fn get() -> Vec<RuleSpec> {
    vec![
        rule! { name: "min", describe: args::first, example: min_value },
        rule! { name: "max", describe: args::first, example: max_value },
        rule! {
            name: "between",
            ty: TypeEffect::Default(FieldType::Numeric),
            describe: args::pair,
            example: between_value,
        },
        rule! { name: "size", describe: args::first },
        rule! {
            name: "digits",
            ty: TypeEffect::Force(FieldType::Numeric),
            describe: args::first,
            example: digits_value,
        },
        rule! { name: "digits_between", ty: TypeEffect::Force(FieldType::Numeric), describe: args::pair },
    ]
}
