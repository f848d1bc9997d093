//! Date rules: `after`, `before`, `date_format` and `timezone`.
//!
//! Date bounds are read as ISO dates first and then as free English
//! (`tomorrow`, `next friday`, `3 days ago`) relative to the context's
//! reference time. Unparseable bounds drop the description and the example
//! but still classify the field as a date.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::{RuleInput, RuleSpec, TypeEffect, args};
use crate::error::RuleError;
use crate::metadata::{ExampleValue, FieldType};
use crate::value_source::ValueSource;
use crate::{DateDialect, DescriptionArgs};

type Example = Result<Option<ExampleValue>, RuleError>;

/// `Monday, 15-Aug-05 15:52:01 UTC`
const RFC850: &str = "%A, %d-%b-%y %H:%M:%S UTC";

/// Resolve a date parameter to a naive UTC datetime.
pub(crate) fn parse_date(input: &RuleInput<'_>, raw: &str) -> Result<NaiveDateTime, RuleError> {
    let text = raw.trim();

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        return Ok(dt);
    }

    let now = Utc.from_utc_datetime(&input.context.reference_time);
    chrono_english::parse_date_string(text, now, english_dialect(input.options.date_dialect))
        .map(|dt| dt.naive_utc())
        .map_err(|_| RuleError::InvalidDate { rule: input.rule.to_string(), value: raw.to_string() })
}

fn english_dialect(dialect: DateDialect) -> chrono_english::Dialect {
    match dialect {
        DateDialect::Uk => chrono_english::Dialect::Uk,
        DateDialect::Us => chrono_english::Dialect::Us,
    }
}

fn rfc850(dt: NaiveDateTime) -> String {
    dt.format(RFC850).to_string()
}

fn bound_description(input: &RuleInput<'_>) -> Result<DescriptionArgs, RuleError> {
    let date = parse_date(input, input.param(0)?)?;
    Ok(DescriptionArgs::One(rfc850(date)))
}

fn after_value(input: &RuleInput<'_>, _: &mut ValueSource) -> Example {
    shifted_bound(input, Duration::days(1))
}

fn before_value(input: &RuleInput<'_>, _: &mut ValueSource) -> Example {
    shifted_bound(input, Duration::days(-1))
}

/// The bound moved by `shift`. Bounds at the edge of the calendar have no neighbour.
fn shifted_bound(input: &RuleInput<'_>, shift: Duration) -> Example {
    let raw = input.param(0)?;
    let date = parse_date(input, raw)?
        .checked_add_signed(shift)
        .ok_or_else(|| RuleError::InvalidDate { rule: input.rule.to_string(), value: raw.to_string() })?;
    Ok(Some(ExampleValue::Text(rfc850(date))))
}

fn formatted_now(input: &RuleInput<'_>, _: &mut ValueSource) -> Example {
    let format = input.param(0)?;
    Ok(Some(ExampleValue::Text(format_php(input.context.reference_time, format))))
}

fn timezone_value(_: &RuleInput<'_>, source: &mut ValueSource) -> Example {
    Ok(Some(ExampleValue::Text(source.timezone().to_string())))
}

/// Render `dt` with PHP `date()` format letters (`Y-m-d H:i:s`, `D, d M Y`, ...).
///
/// Times are naive and reported as UTC. A backslash escapes the next
/// character; letters without a meaning are copied literally.
pub(crate) fn format_php(dt: NaiveDateTime, format: &str) -> String {
    let mut spec = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        let piece: Option<&str> = match c {
            'd' => Some("%d"),
            'D' => Some("%a"),
            'j' => Some("%-d"),
            'l' => Some("%A"),
            'N' => Some("%u"),
            'w' => Some("%w"),
            'W' => Some("%V"),
            'F' => Some("%B"),
            'm' => Some("%m"),
            'M' => Some("%b"),
            'n' => Some("%-m"),
            'o' => Some("%G"),
            'Y' => Some("%Y"),
            'y' => Some("%y"),
            'a' => Some("%P"),
            'A' => Some("%p"),
            'g' => Some("%-I"),
            'G' => Some("%-H"),
            'h' => Some("%I"),
            'H' => Some("%H"),
            'i' => Some("%M"),
            's' => Some("%S"),
            'u' => Some("%6f"),
            'v' => Some("%3f"),
            'U' => Some("%s"),
            'c' => Some("%Y-%m-%dT%H:%M:%S+00:00"),
            'r' => Some("%a, %d %b %Y %H:%M:%S +0000"),
            _ => None,
        };
        if let Some(piece) = piece {
            spec.push_str(piece);
            continue;
        }

        let literal = match c {
            'S' => ordinal_suffix(dt.day()).to_string(),
            'z' => dt.ordinal0().to_string(),
            't' => days_in_month(dt.year(), dt.month()).to_string(),
            'L' => u8::from(NaiveDate::from_ymd_opt(dt.year(), 2, 29).is_some()).to_string(),
            'e' | 'T' => "UTC".to_string(),
            'P' => "+00:00".to_string(),
            'p' => "Z".to_string(),
            'O' => "+0000".to_string(),
            'Z' | 'I' => "0".to_string(),
            '\\' => chars.next().map(String::from).unwrap_or_default(),
            other => other.to_string(),
        };
        spec.push_str(&literal.replace('%', "%%"));
    }

    dt.format(&spec).to_string()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(31)
}

pub(crate) fn get() -> Vec<RuleSpec> {
    vec![
        rule! {
            name: "after",
            ty: TypeEffect::Force(FieldType::Date),
            describe: bound_description,
            example: after_value,
        },
        rule! {
            name: "before",
            ty: TypeEffect::Force(FieldType::Date),
            describe: bound_description,
            example: before_value,
        },
        rule! {
            name: "date_format",
            ty: TypeEffect::Force(FieldType::Date),
            describe: args::first,
            example: formatted_now,
        },
        rule! { name: "timezone", describe: args::bare, example: timezone_value },
    ]
}
