use crate::error::ValidationError;
use crate::form::{Cardinality, FieldDefinition, FormInstanceDescriptor, PROCESS_ID_KEY};
use ahash::AHashMap;
use serde_json::Value;

pub mod checkers;

use checkers::*;

/// Knobs controlling how strictly a form is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// `values.processId` must be present and a string.
    pub require_process_id: bool,
    /// Keys in `values` without a definition (other than `processId`) are rejected.
    pub reject_unknown_values: bool,
    /// Fields of unregistered types pass without a type check.
    pub allow_unknown_types: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            require_process_id: true,
            reject_unknown_values: false,
            allow_unknown_types: false,
        }
    }
}

impl ValidationOptions {
    /// Default options, but every key in `values` must be declared.
    pub fn strict() -> Self {
        Self {
            reject_unknown_values: true,
            ..Self::default()
        }
    }
}

/// Checks form values against their co-located definitions.
pub struct Validator {
    registry: AHashMap<String, Box<dyn FieldTypeChecker>>,
    options: ValidationOptions,
}

pub struct ValidatorBuilder {
    registry: AHashMap<String, Box<dyn FieldTypeChecker>>,
    options: ValidationOptions,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn FieldTypeChecker>> = AHashMap::new();
        register_default_checkers(&mut registry);
        Self {
            registry,
            options: ValidationOptions::default(),
        }
    }

    /// Lets a custom type name reuse one of the built-in checks, e.g. `"text"` → `"string"`.
    /// Unknown built-in names are ignored.
    pub fn with_type_alias(mut self, user_type_name: &str, builtin_type_name: &str) -> Self {
        if let Some(checker) = create_checker_by_name(builtin_type_name) {
            self.registry.insert(user_type_name.to_string(), checker);
        }
        self
    }

    /// Registers (or replaces) the checker for `checker.type_name()`.
    pub fn with_custom_checker(mut self, checker: Box<dyn FieldTypeChecker>) -> Self {
        self.registry.insert(checker.type_name().to_string(), checker);
        self
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            registry: self.registry,
            options: self.options,
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Validator {
    fn default() -> Self {
        ValidatorBuilder::new().build()
    }
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Returns the first violation found, visiting fields in definition order.
    pub fn validate(&self, form: &FormInstanceDescriptor) -> Result<(), ValidationError> {
        let mut first = None;
        self.walk(form, |violation| {
            first = Some(violation);
            false
        });

        match first {
            None => {
                tracing::debug!(fields = form.definitions.len(), "form values are valid");
                Ok(())
            }
            Some(violation) => {
                tracing::debug!("form values are invalid: {}", violation);
                Err(violation)
            }
        }
    }

    /// Collects every violation in the form.
    pub fn check_all(&self, form: &FormInstanceDescriptor) -> Vec<ValidationError> {
        let mut violations = Vec::new();
        self.walk(form, |violation| {
            violations.push(violation);
            true
        });
        tracing::debug!(count = violations.len(), "collected form violations");
        violations
    }

    /// Checks a single field's value against its definition. `None` and `null` mean absent.
    pub fn check_field(
        &self,
        name: &str,
        definition: &FieldDefinition,
        value: Option<&Value>,
    ) -> Result<(), ValidationError> {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return if definition.cardinality.is_required() {
                Err(ValidationError::MissingRequiredField(name.to_string()))
            } else {
                Ok(())
            };
        };

        match value {
            Value::Array(items) if definition.cardinality.allows_many() => {
                if items.is_empty() && definition.cardinality == Cardinality::AtLeastOne {
                    return Err(ValidationError::CardinalityViolation {
                        field: name.to_string(),
                        cardinality: definition.cardinality,
                        message: "expected at least one value, but the list is empty".to_string(),
                    });
                }
                items
                    .iter()
                    .try_for_each(|item| self.check_single(name, definition, item))
            }
            Value::Array(items) => Err(ValidationError::CardinalityViolation {
                field: name.to_string(),
                cardinality: definition.cardinality,
                message: format!("expected a single value, but found a list of {}", items.len()),
            }),
            single => self.check_single(name, definition, single),
        }
    }

    fn check_single(
        &self,
        name: &str,
        definition: &FieldDefinition,
        value: &Value,
    ) -> Result<(), ValidationError> {
        let type_name = definition.field_type.name();
        match self.registry.get(type_name) {
            Some(checker) if !checker.accepts(value) => {
                return Err(ValidationError::SchemaMismatch {
                    field: name.to_string(),
                    expected: checker.expected().to_string(),
                    found: value.clone(),
                });
            }
            Some(_) => {}
            None if self.options.allow_unknown_types => {}
            None => {
                return Err(ValidationError::UnknownFieldType {
                    field: name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        match definition.allowed_values() {
            Some(allowed) if !allowed.contains(value) => Err(ValidationError::ValueNotAllowed {
                field: name.to_string(),
                found: value.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn check_process_id(&self, form: &FormInstanceDescriptor) -> Result<(), ValidationError> {
        if !self.options.require_process_id {
            return Ok(());
        }
        match form.values.get(PROCESS_ID_KEY) {
            None | Some(Value::Null) => Err(ValidationError::MissingProcessId),
            Some(Value::String(_)) => Ok(()),
            Some(other) => Err(ValidationError::SchemaMismatch {
                field: PROCESS_ID_KEY.to_string(),
                expected: "string".to_string(),
                found: other.clone(),
            }),
        }
    }

    /// Feeds violations to `sink` in a stable order until it returns `false`.
    fn walk<F>(&self, form: &FormInstanceDescriptor, mut sink: F)
    where
        F: FnMut(ValidationError) -> bool,
    {
        for (name, definition) in &form.definitions {
            if let Err(violation) = self.check_field(name, definition, form.values.get(name)) {
                if !sink(violation) {
                    return;
                }
            }
        }

        if let Err(violation) = self.check_process_id(form) {
            if !sink(violation) {
                return;
            }
        }

        if self.options.reject_unknown_values {
            let unexpected = form
                .values
                .keys()
                .filter(|key| *key != PROCESS_ID_KEY && !form.definitions.contains_key(*key));
            for key in unexpected {
                if !sink(ValidationError::UnexpectedField(key.clone())) {
                    return;
                }
            }
        }
    }
}
