use super::field::{Cardinality, FieldDefinition};
use crate::error::{FormError, ValidationError};
use crate::validation::Validator;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// Key under which every form carries the id of the process that requested it.
pub const PROCESS_ID_KEY: &str = "processId";

/// Field schema, in declaration order.
pub type FieldDefinitions = IndexMap<String, FieldDefinition>;

/// Field values, in insertion order.
pub type FieldValues = Map<String, Value>;

/// One instance of a dynamic form awaiting (or having completed) submission.
///
/// The wire shape is preserved exactly:
///
/// ```json
/// {
///   "submitUrl": "/api/service/custom_form/<processId>/<formId>/continue",
///   "success": false,
///   "definitions": { "approved": { "type": "boolean", "cardinality": "ONE_AND_ONLY_ONE" } },
///   "values": { "processId": "<processId>", "approved": false }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInstanceDescriptor {
    pub submit_url: String,
    pub success: bool,
    pub definitions: FieldDefinitions,
    pub values: FieldValues,
    /// Top-level keys this crate does not interpret, kept for round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormInstanceDescriptor {
    /// Creates a form that has not been submitted yet.
    pub fn new(
        submit_url: impl Into<String>,
        definitions: FieldDefinitions,
        values: FieldValues,
    ) -> Self {
        Self {
            submit_url: submit_url.into(),
            success: false,
            definitions,
            values,
            extra: Map::new(),
        }
    }

    /// Parses a form from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| FormError::Parse(e.to_string()))
    }

    /// Loads a form from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FormError> {
        let content = fs::read_to_string(path).map_err(|e| FormError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Writes the form to a file as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), FormError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| FormError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, FormError> {
        serde_json::to_string(self).map_err(|e| FormError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, FormError> {
        serde_json::to_string_pretty(self).map_err(|e| FormError::Serialize(e.to_string()))
    }

    /// The correlation id of the originating process, if present and a string.
    pub fn process_id(&self) -> Option<&str> {
        self.values.get(PROCESS_ID_KEY).and_then(Value::as_str)
    }

    pub fn definition(&self, name: &str) -> Option<&FieldDefinition> {
        self.definitions.get(name)
    }

    /// The current value of a field. A JSON `null` counts as absent.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// Names of all fields declared `ONE_AND_ONLY_ONE` or `AT_LEAST_ONE`.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions
            .iter()
            .filter(|(_, definition)| definition.cardinality.is_required())
            .map(|(name, _)| name.as_str())
    }

    /// Names of all fields declared with the given cardinality.
    pub fn fields_with(&self, cardinality: Cardinality) -> impl Iterator<Item = &str> + '_ {
        self.definitions
            .iter()
            .filter(move |(_, definition)| definition.cardinality == cardinality)
            .map(|(name, _)| name.as_str())
    }

    pub fn is_submitted(&self) -> bool {
        self.success
    }

    /// Checks that `values` conform to `definitions`.
    pub fn validate(&self, validator: &Validator) -> Result<(), ValidationError> {
        validator.validate(self)
    }
}
