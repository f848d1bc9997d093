//! Per-field output records.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Normalized type classification of a documented field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Numeric,
    Boolean,
    Array,
    Date,
    File,
    Image,
    Url,
    Ip,
    Email,
    Custom,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Numeric => "numeric",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::Image => "image",
            FieldType::Url => "url",
            FieldType::Ip => "ip",
            FieldType::Email => "email",
            FieldType::Custom => "custom",
        }
    }

    /// True for the two classifications that let `min`/`max` synthesize a bounded number.
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Numeric | FieldType::Integer)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized example value.
///
/// `Empty` is the sentinel a record starts with; finalization replaces it with
/// a generic word, so callers of [`crate::aggregate`] never observe it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExampleValue {
    #[default]
    Empty,
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl ExampleValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, ExampleValue::Empty)
    }
}

impl fmt::Display for ExampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleValue::Empty => Ok(()),
            ExampleValue::Bool(b) => write!(f, "{b}"),
            ExampleValue::Integer(n) => write!(f, "{n}"),
            ExampleValue::Text(s) => f.write_str(s),
        }
    }
}

/// Aggregated metadata for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeMetadata {
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    pub value: ExampleValue,
    pub description: Vec<String>,
}

/// Ordered field name → metadata mapping for one endpoint.
///
/// Insertion order is preserved, including when serialized as a JSON object,
/// so rendered documentation lists fields in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters {
    entries: IndexMap<String, AttributeMetadata>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `field`. An earlier entry of the same name keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, metadata: AttributeMetadata) {
        self.entries.insert(field.into(), metadata);
    }

    pub fn get(&self, field: &str) -> Option<&AttributeMetadata> {
        self.entries.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeMetadata)> {
        self.entries.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, AttributeMetadata)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, AttributeMetadata)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
