#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a [`RuleSpec`](crate::rules::RuleSpec). Every effect except `name`
/// is optional: `required` defaults to `false`, `ty` to `TypeEffect::Keep`,
/// and a missing `describe`/`example` means the rule has no such effect.
#[macro_export]
macro_rules! rule {
    (@or , $default:expr) => {
        $default
    };
    (@or $value:expr, $default:expr) => {
        $value
    };
    (
        name: $name:expr
        $(, required: $required:expr)?
        $(, ty: $ty:expr)?
        $(, describe: $describe:expr)?
        $(, example: $example:expr)?
        $(,)?
    ) => {
        $crate::rules::RuleSpec {
            name: $name,
            required: $crate::rule!(@or $($required)?, false),
            type_effect: $crate::rule!(@or $($ty)?, $crate::rules::TypeEffect::Keep),
            describe: $crate::rule!(@or $(Some($describe))?, None),
            example: $crate::rule!(@or $(Some($example))?, None),
        }
    };
}
