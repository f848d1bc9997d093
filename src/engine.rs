//! Rule interpretation engine.
//!
//! ## How the parts work together
//!
//! ```text
//! "required|between:1,10"
//!         │  split_rules                       (tokenizer.rs)
//!         v
//! ["required", "between:1,10"]
//!         │  tokenize: name + CSV parameters   (tokenizer.rs)
//!         │  normalize: int → integer, ...     (normalize.rs)
//!         v
//! ParsedRule ── RuleRegistry lookup ───────────(registry.rs)
//!         │  apply: required/type/describe/example
//!         │        with the field's ValueSource (dispatch.rs)
//!         v
//! AttributeMetadata, finalized once per field  (aggregate.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: splits one raw rule into name and parameters; the `regex`
//!   rule keeps its parameter unsplit.
//! - `normalize.rs`: alias table.
//! - `registry.rs`: indexes `RuleSpec`s by name and describes their effects.
//! - `dispatch.rs`: applies one rule's effects, dropping only those whose
//!   parameters are missing or malformed.
//! - `aggregate.rs`: the per-field fold and the finalization defaults.
//!
//! Nothing here keeps state between calls. Each aggregation owns its
//! `ValueSource`, so fields can be processed on any thread in any order.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=ruledoc=trace` to see every tokenized and applied rule,
//! or `RUST_LOG=ruledoc=debug` for unknown rules and dropped effects only.

#[path = "engine/aggregate.rs"]
mod aggregate;
#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub(crate) use aggregate::aggregate_rules;
pub use aggregate::RuleOutcome;
pub(crate) use dispatch::Environment;
pub use dispatch::Dispatch;
pub use normalize::normalize;
pub use registry::RuleEffects;
pub(crate) use registry::RuleRegistry;
pub use tokenizer::{split_rules, tokenize};
