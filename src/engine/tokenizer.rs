//! Rule tokenizer.
//!
//! Turns one raw rule (`"between:1,10"`) into a [`ParsedRule`]. The name is
//! everything before the first `:`, trimmed and lower-cased. Parameters are
//! CSV fields, so `in:"a,b",c` yields `["a,b", "c"]`. The `regex` rule is the
//! exception: its parameter is kept verbatim because patterns contain commas.
//!
//! Tokenizing never fails. Malformed CSV falls back to a plain comma split.

use crate::ParsedRule;
use tracing::trace;

/// Rule whose parameter must not be comma-split.
pub(crate) const PATTERN_RULE: &str = "regex";

pub fn tokenize(raw: &str) -> ParsedRule {
    let Some((name, params)) = raw.split_once(':') else {
        return ParsedRule { name: raw.trim().to_lowercase(), parameters: Vec::new() };
    };

    let name = name.trim().to_lowercase();
    let parameters = if name == PATTERN_RULE { vec![params.to_string()] } else { parse_csv(params) };
    trace!(rule = %name, ?parameters, "tokenized rule");

    ParsedRule { name, parameters }
}

/// Split a pipe-delimited rule string (`"required|min:3"`) into single rules.
///
/// Empty segments (`"required||integer"`) are dropped.
pub fn split_rules(rules: &str) -> Vec<&str> {
    rules.split('|').filter(|r| !r.trim().is_empty()).collect()
}

/// Parameters are one CSV row; line breaks are ordinary field text.
fn parse_csv(text: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\0'))
        .from_reader(text.as_bytes());

    match reader.records().next() {
        None => Vec::new(),
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        Some(Err(err)) => {
            trace!(%err, text, "csv parse failed, splitting on commas");
            text.split(',').map(str::to_string).collect()
        }
    }
}
