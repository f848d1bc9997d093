use crate::describe::{DescriptionResolver, RuleCatalog};
use crate::engine::{self, Environment, RuleOutcome, RuleRegistry};
use crate::metadata::{AttributeMetadata, Parameters};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<RuleRegistry> = Lazy::new(|| RuleRegistry::new(crate::rules::get()));
static DEFAULT_CATALOG: Lazy<RuleCatalog> = Lazy::new(RuleCatalog::new);

/// Aggregation context.
///
/// Holds the reference instant used to resolve relative date bounds
/// (`after:tomorrow`) and as "now" for `date_format` examples.
///
/// The default is a fixed instant, 2013-02-12 04:30:00, so documentation
/// generated with the default context never changes from one day to the next.
/// Use [`Context::now`] to anchor dates at the wall clock instead.
///
/// ```
/// use ruledoc::{ExampleValue, aggregate};
///
/// let day = aggregate("day", ["date_format:Y-m-d"], "GET /calendar");
/// assert_eq!(day.value, ExampleValue::Text("2013-02-12".to_string()));
///
/// let start = aggregate("start", ["after:tomorrow"], "GET /calendar");
/// assert!(start.description[0].starts_with("Must be a date after: `Wednesday, 13-Feb-13"));
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Context {
    /// A context anchored at the local wall clock.
    pub fn now() -> Self {
        Self { reference_time: Local::now().naive_local() }
    }
}

impl Default for Context {
    fn default() -> Self {
        let date = NaiveDate::from_ymd_opt(2013, 2, 12).unwrap_or_default();
        let time = NaiveTime::from_hms_opt(4, 30, 0).unwrap_or_default();
        Self { reference_time: NaiveDateTime::new(date, time) }
    }
}

/// Reading of ambiguous numeric dates such as `04/05/2020`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateDialect {
    /// Day first.
    #[default]
    Uk,
    /// Month first.
    Us,
}

/// Options that affect interpretation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub date_dialect: DateDialect,
}

/// The rules of one field: a pipe-delimited string or an already-split list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRules {
    Pipe(String),
    List(Vec<String>),
}

impl FieldRules {
    /// Individual rule strings in declaration order.
    pub fn rules(&self) -> Vec<&str> {
        match self {
            FieldRules::Pipe(s) => engine::split_rules(s),
            FieldRules::List(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FieldRules {
    fn from(s: &str) -> Self {
        FieldRules::Pipe(s.to_string())
    }
}

impl From<String> for FieldRules {
    fn from(s: String) -> Self {
        FieldRules::Pipe(s)
    }
}

impl From<Vec<String>> for FieldRules {
    fn from(v: Vec<String>) -> Self {
        FieldRules::List(v)
    }
}

impl From<Vec<&str>> for FieldRules {
    fn from(v: Vec<&str>) -> Self {
        FieldRules::List(v.into_iter().map(str::to_string).collect())
    }
}

/// Result of [`aggregate_verbose`] and [`aggregate_verbose_with`].
#[derive(Debug, Clone)]
pub struct AggregateDetails {
    pub field: String,
    pub seed: String,
    /// The numeric seed derived from `seed`.
    pub numeric_seed: u64,
    pub metadata: AttributeMetadata,
    /// One entry per raw rule, in order.
    pub outcomes: Vec<RuleOutcome>,
    pub elapsed: Duration,
}

/// Aggregate the rules of `field` with the bundled templates and a default [`Context`].
///
/// # Example
/// ```
/// use ruledoc::{FieldType, aggregate};
///
/// let meta = aggregate("age", ["required", "integer", "min:18"], "POST /users");
/// assert!(meta.required);
/// assert_eq!(meta.field_type, Some(FieldType::Integer));
/// ```
pub fn aggregate<I, S>(field: &str, rules: I, seed: &str) -> AttributeMetadata
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aggregate_with(field, rules, seed, &*DEFAULT_CATALOG, &Context::default(), &Options::default())
}

/// Aggregate with an explicit description resolver, context and options.
///
/// Use this for deterministic date handling by supplying a reference time.
pub fn aggregate_with<I, S>(
    field: &str,
    rules: I,
    seed: &str,
    resolver: &dyn DescriptionResolver,
    context: &Context,
    options: &Options,
) -> AttributeMetadata
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let env = Environment { registry: &DEFAULT_RULES, resolver, context, options };
    engine::aggregate_rules(&env, field, rules, seed, None)
}

/// [`aggregate_verbose_with`] with the bundled templates and a default [`Context`].
pub fn aggregate_verbose<I, S>(field: &str, rules: I, seed: &str) -> AggregateDetails
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aggregate_verbose_with(field, rules, seed, &*DEFAULT_CATALOG, &Context::default(), &Options::default())
}

/// Like [`aggregate_with`], and also report what every rule did.
pub fn aggregate_verbose_with<I, S>(
    field: &str,
    rules: I,
    seed: &str,
    resolver: &dyn DescriptionResolver,
    context: &Context,
    options: &Options,
) -> AggregateDetails
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = Instant::now();
    let env = Environment { registry: &DEFAULT_RULES, resolver, context, options };
    let mut outcomes = Vec::new();
    let metadata = engine::aggregate_rules(&env, field, rules, seed, Some(&mut outcomes));

    AggregateDetails {
        field: field.to_string(),
        seed: seed.to_string(),
        numeric_seed: u64::from(crate::value_source::seed_hash(seed)),
        metadata,
        outcomes,
        elapsed: start.elapsed(),
    }
}

/// Aggregate every field of one endpoint, sharing `seed`, preserving field order.
pub fn document<F, R>(seed: &str, fields: &[(F, R)]) -> Parameters
where
    F: AsRef<str>,
    R: Into<FieldRules> + Clone,
{
    document_with(seed, fields, &*DEFAULT_CATALOG, &Context::default(), &Options::default())
}

pub fn document_with<F, R>(
    seed: &str,
    fields: &[(F, R)],
    resolver: &dyn DescriptionResolver,
    context: &Context,
    options: &Options,
) -> Parameters
where
    F: AsRef<str>,
    R: Into<FieldRules> + Clone,
{
    fields
        .iter()
        .map(|(name, rules)| {
            let rules: FieldRules = rules.clone().into();
            let name = name.as_ref();
            (name.to_string(), aggregate_with(name, rules.rules(), seed, resolver, context, options))
        })
        .collect()
}

/// [`document_with`] spread over the rayon pool. The output is identical:
/// every field gets its own value source and results keep input order.
pub fn document_parallel<F, R>(
    seed: &str,
    fields: &[(F, R)],
    resolver: &dyn DescriptionResolver,
    context: &Context,
    options: &Options,
) -> Parameters
where
    F: AsRef<str> + Sync,
    R: Into<FieldRules> + Clone + Sync,
{
    let entries: Vec<(String, AttributeMetadata)> = fields
        .par_iter()
        .map(|(name, rules)| {
            let rules: FieldRules = rules.clone().into();
            let name = name.as_ref();
            (name.to_string(), aggregate_with(name, rules.rules(), seed, resolver, context, options))
        })
        .collect();
    entries.into_iter().collect()
}
