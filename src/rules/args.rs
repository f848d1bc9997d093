//! Description argument builders shared by several rule kinds.

use super::RuleInput;
use crate::describe::{fancy_implode, split_value_pairs};
use crate::error::RuleError;
use crate::DescriptionArgs;

/// The template is used as-is.
pub fn bare(_: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    Ok(DescriptionArgs::None)
}

/// The first parameter.
pub fn first(input: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    Ok(DescriptionArgs::One(input.param(0)?.to_string()))
}

/// The first two parameters (lower/upper bound).
pub fn pair(input: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    Ok(DescriptionArgs::Many(vec![input.param(0)?.to_string(), input.param(1)?.to_string()]))
}

/// `` `a`, `b` or `c` ``
pub fn any_of(input: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    Ok(DescriptionArgs::One(fancy_implode(input.list()?, ", ", " or ")))
}

/// `` `a`, `b` and `c` ``
pub fn all_of(input: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    Ok(DescriptionArgs::One(fancy_implode(input.list()?, ", ", " and ")))
}

/// `` `field` is `value` or `other` is `value` ``
pub fn conditions(input: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    Ok(DescriptionArgs::One(split_value_pairs(input.list()?)))
}
