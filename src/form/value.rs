use serde_json::Value;
use std::fmt;

/// Coarse runtime kind of a JSON value, used when reporting what a form actually holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    List,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// Renders a value on a single line, shortening multi-line strings to their first line.
///
/// Plan transcripts run to dozens of lines, so `"first line (+N more lines)"` is shown
/// instead of the full text.
pub fn preview(value: &Value) -> String {
    match value {
        Value::String(text) => {
            let mut lines = text.lines();
            let first = lines.next().unwrap_or_default();
            let remaining = lines.count();
            if remaining == 0 {
                format!("{:?}", first)
            } else {
                format!("{:?} (+{} more lines)", first, remaining)
            }
        }
        other => other.to_string(),
    }
}
