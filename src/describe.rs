//! Description templates and argument builders.
//!
//! The engine never inspects template text. It asks a [`DescriptionResolver`]
//! for the template of a rule and fills it with [`DescriptionArgs`]; the
//! finished fragment is appended to the field's description.
//!
//! Placeholders are `:name` tokens. Arguments replace them left to right,
//! regardless of the placeholder name, and surplus placeholders are kept as-is.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Arguments handed to a template: nothing, one value, or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DescriptionArgs {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl DescriptionArgs {
    fn as_slice(&self) -> &[String] {
        match self {
            DescriptionArgs::None => &[],
            DescriptionArgs::One(s) => std::slice::from_ref(s),
            DescriptionArgs::Many(v) => v,
        }
    }
}

/// A resolved template for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: Cow<'static, str>,
}

impl Template {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitute `args` into the placeholders in order.
    ///
    /// Substituted text is never rescanned, so an argument containing `:x`
    /// stays literal.
    pub fn with_args(&self, args: &DescriptionArgs) -> String {
        let mut values = args.as_slice().iter();
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;
        for m in regex!(r":[A-Za-z][A-Za-z_]*").find_iter(&self.text) {
            let Some(value) = values.next() else { break };
            out.push_str(&self.text[last..m.start()]);
            out.push_str(value);
            last = m.end();
        }
        out.push_str(&self.text[last..]);
        out
    }
}

/// Source of human-readable description templates.
pub trait DescriptionResolver: Send + Sync {
    fn describe(&self, rule: &str) -> Template;
}

/// English fragments for every built-in rule kind.
static DEFAULT_TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("after", "Must be a date after: `:date`"),
        ("alpha", "Only alphabetic characters allowed"),
        ("alpha_dash", "Allowed: alpha-numeric characters, as well as dashes and underscores."),
        ("alpha_num", "Only alpha-numeric characters allowed"),
        ("before", "Must be a date preceding: `:date`"),
        ("between", "Between: `:min` and `:max`"),
        ("date_format", "Date format: `:format`"),
        ("different", "Must have a different value than parameter: `:field`"),
        ("digits", "Must have an exact length of `:digits`"),
        ("digits_between", "Must have a length between `:min` and `:max`"),
        ("exists", "Valid :table :column"),
        ("file", "Must be a file upload"),
        ("image", "Must be an image (jpeg, png, bmp, gif, or svg)"),
        ("in", ":values"),
        ("json", "Must be a valid JSON string."),
        ("max", "Maximum: `:max`"),
        ("mimes", "Allowed mime types: :values"),
        ("mimetypes", "Allowed mime types: :values"),
        ("min", "Minimum: `:min`"),
        ("not_in", "Not in: :values"),
        ("regex", "Must match this regular expression: `:pattern`"),
        ("required_if", "Required if :condition"),
        ("required_unless", "Required unless :condition"),
        ("required_with", "Required if the parameters :fields are present."),
        ("required_with_all", "Required if the parameters :fields are present."),
        ("required_without", "Required if the parameters :fields are not present."),
        ("required_without_all", "Required if the parameters :fields are not present."),
        ("same", "Must be the same as `:field`"),
        ("size", "Must have the size of `:size`"),
        ("timezone", "Must be a valid time zone, such as `Africa/Accra`"),
    ])
});

/// The bundled English resolver. Individual templates can be overridden.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    overrides: HashMap<String, String>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.overrides.insert(rule.into(), template.into());
        self
    }
}

impl DescriptionResolver for RuleCatalog {
    /// Unknown rules resolve to their own name.
    fn describe(&self, rule: &str) -> Template {
        if let Some(text) = self.overrides.get(rule) {
            return Template::new(text.clone());
        }
        match DEFAULT_TEMPLATES.get(rule) {
            Some(text) => Template::new(*text),
            None => Template::new(rule.to_string()),
        }
    }
}

/// Backtick-quote every item, join the last two with `last` and the rest with `sep`.
///
/// `["a", "b", "c"]` with `", "` / `" or "` renders as `` `a`, `b` or `c` ``.
pub fn fancy_implode<S: AsRef<str>>(items: &[S], sep: &str, last: &str) -> String {
    let mut quoted: Vec<String> = items.iter().map(|item| format!("`{}`", item.as_ref())).collect();
    let tail = quoted.split_off(quoted.len().saturating_sub(2));
    quoted.push(tail.join(last));
    quoted.join(sep)
}

/// Render parameters two at a time as `` `field` is `value` ``, joined by `or`.
///
/// An odd trailing field keeps its dangling `is`.
pub fn split_value_pairs<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        out.push('`');
        out.push_str(item.as_ref());
        out.push_str("` ");
        out.push_str(if (idx + 1) % 2 == 0 { "or " } else { "is " });
    }
    out.trim_end_matches(['o', 'r', ' ']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fancy_implode_joins_final_pair() {
        assert_eq!(fancy_implode(&["red", "green", "blue"], ", ", " or "), "`red`, `green` or `blue`");
        assert_eq!(fancy_implode(&["a", "b", "c", "d"], ", ", " and "), "`a`, `b`, `c` and `d`");
        assert_eq!(fancy_implode(&["x", "y"], ", ", " or "), "`x` or `y`");
        assert_eq!(fancy_implode(&["solo"], ", ", " or "), "`solo`");
    }

    #[test]
    fn split_value_pairs_renders_conditions() {
        assert_eq!(split_value_pairs(&["type", "car"]), "`type` is `car`");
        assert_eq!(split_value_pairs(&["type", "car", "wheels", "4"]), "`type` is `car` or `wheels` is `4`");
        assert_eq!(split_value_pairs(&["type", "car", "color"]), "`type` is `car` or `color` is");
    }

    #[test]
    fn template_substitutes_in_order() {
        let template = Template::new("Between: `:min` and `:max`");
        let args = DescriptionArgs::Many(vec!["1".into(), "10".into()]);
        assert_eq!(template.with_args(&args), "Between: `1` and `10`");
    }

    #[test]
    fn template_keeps_surplus_placeholders_and_literal_args() {
        let template = Template::new("Between: `:min` and `:max`");
        assert_eq!(template.with_args(&DescriptionArgs::One(":max".into())), "Between: `:max` and `:max`");
        assert_eq!(template.with_args(&DescriptionArgs::None), "Between: `:min` and `:max`");
    }

    #[test]
    fn catalog_overrides_and_falls_back_to_name() {
        let catalog = RuleCatalog::new().with_template("min", "At least :n");
        assert_eq!(catalog.describe("min").with_args(&DescriptionArgs::One("3".into())), "At least 3");
        assert_eq!(catalog.describe("max").text(), "Maximum: `:max`");
        assert_eq!(catalog.describe("made_up").text(), "made_up");
    }
}
