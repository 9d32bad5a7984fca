use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The declared value type of a form field.
///
/// Built-in names map to dedicated variants. Any other name is preserved verbatim in
/// `Custom` so that a descriptor always serializes back to exactly what was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Int,
    Decimal,
    Boolean,
    File,
    Date,
    DateTime,
    Custom(String),
}

impl FieldType {
    /// The wire name of this type, e.g. `"boolean"` or `"dateTime"`.
    pub fn name(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Decimal => "decimal",
            FieldType::Boolean => "boolean",
            FieldType::File => "file",
            FieldType::Date => "date",
            FieldType::DateTime => "dateTime",
            FieldType::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, FieldType::Custom(_))
    }

    /// Whether values of this type travel as JSON strings.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            FieldType::String | FieldType::File | FieldType::Date | FieldType::DateTime
        )
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => FieldType::String,
            "int" => FieldType::Int,
            "decimal" => FieldType::Decimal,
            "boolean" => FieldType::Boolean,
            "file" => FieldType::File,
            "date" => FieldType::Date,
            "dateTime" => FieldType::DateTime,
            _ => FieldType::Custom(name),
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        FieldType::from(name.to_string())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Custom(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How many values a field may or must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    /// Exactly one non-null value.
    OneAndOnlyOne,
    /// A single value or nothing.
    OneOrNone,
    /// One value, or a non-empty list of values.
    AtLeastOne,
    /// Nothing, one value, or a list of values.
    Any,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::OneAndOnlyOne => "ONE_AND_ONLY_ONE",
            Cardinality::OneOrNone => "ONE_OR_NONE",
            Cardinality::AtLeastOne => "AT_LEAST_ONE",
            Cardinality::Any => "ANY",
        }
    }

    /// Whether an absent or null value violates this cardinality.
    pub fn is_required(&self) -> bool {
        matches!(self, Cardinality::OneAndOnlyOne | Cardinality::AtLeastOne)
    }

    /// Whether a list of values is acceptable.
    pub fn allows_many(&self) -> bool {
        matches!(self, Cardinality::AtLeastOne | Cardinality::Any)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema entry for a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub cardinality: Cardinality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Allowed values. Only enforced when this is a JSON array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Value>,
    /// Keys this crate does not interpret (`placeholder`, `readonly`, ...), kept for round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDefinition {
    pub fn new(field_type: impl Into<FieldType>, cardinality: Cardinality) -> Self {
        Self {
            field_type: field_type.into(),
            cardinality,
            label: None,
            allow: None,
            extra: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_allowed(mut self, allowed: Vec<Value>) -> Self {
        self.allow = Some(Value::Array(allowed));
        self
    }

    /// The allowed values, if the definition restricts them.
    pub fn allowed_values(&self) -> Option<&[Value]> {
        match &self.allow {
            Some(Value::Array(values)) => Some(values),
            _ => None,
        }
    }
}
