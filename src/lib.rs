//! Interpret string-encoded validation rules (`"required|min:3|in:a,b,c"`)
//! into documentation metadata: a type classification, description fragments
//! and a deterministic example value per field.
//!
//! ```
//! use ruledoc::{ExampleValue, aggregate};
//!
//! let meta = aggregate("colour", ["required", "in:red,green,blue"], "GET /paints");
//! assert!(meta.required);
//! assert_eq!(meta.description, vec!["`red`, `green` or `blue`"]);
//! assert!(matches!(meta.value, ExampleValue::Text(ref v) if ["red", "green", "blue"].contains(&v.as_str())));
//! ```

#[macro_use]
mod macros;
mod api;
mod describe;
mod engine;
mod error;
mod metadata;
mod rules;
mod value_source;

pub use api::{
    AggregateDetails, Context, DateDialect, FieldRules, Options, aggregate, aggregate_verbose, aggregate_verbose_with,
    aggregate_with, document, document_parallel, document_with,
};
pub use describe::{DescriptionArgs, DescriptionResolver, RuleCatalog, Template, fancy_implode, split_value_pairs};
pub use engine::{Dispatch, RuleEffects, RuleOutcome, normalize, split_rules, tokenize};
pub use error::RuleError;
pub use metadata::{AttributeMetadata, ExampleValue, FieldType, Parameters};
pub use value_source::ValueSource;

/// One tokenized rule: lower-cased name and its ordered parameters.
///
/// `parameters` is empty when the rule has no `:`. For `regex` it holds the
/// raw parameter text as a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub name: String,
    pub parameters: Vec<String>,
}
