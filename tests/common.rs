//! Common test utilities for building forms and loading the approval fixture.
use approval_form::prelude::*;
use serde_json::Value;

/// The terraform approval form exactly as the workflow server publishes it.
#[allow(dead_code)]
pub const APPROVAL_FORM_JSON: &str = include_str!("fixtures/approval_form.json");

/// The plan transcript carried in the fixture's `plan` value.
#[allow(dead_code)]
pub const PLAN_OUTPUT: &str = include_str!("fixtures/plan_output.txt");

#[allow(dead_code)]
pub const PROCESS_ID: &str = "6cf435f0-b85c-42ea-a454-1ac308aff8c3";

#[allow(dead_code)]
pub const FORM_ID: &str = "9fe117b3-5dec-4de2-afe7-1765a0e4e305";

/// Parses the approval fixture.
#[allow(dead_code)]
pub fn approval_form() -> FormInstanceDescriptor {
    FormInstanceDescriptor::from_json(APPROVAL_FORM_JSON).expect("fixture must parse")
}

/// Builds an unsubmitted form from `(name, type, cardinality)` triples and a JSON object of
/// values. A `processId` is added unless the values already carry one.
#[allow(dead_code)]
pub fn form_with(
    fields: &[(&str, FieldType, Cardinality)],
    values: Value,
) -> FormInstanceDescriptor {
    let mut definitions = FieldDefinitions::new();
    for (name, field_type, cardinality) in fields {
        definitions.insert(
            name.to_string(),
            FieldDefinition::new(field_type.clone(), *cardinality),
        );
    }

    let mut form_values = match values {
        Value::Object(map) => map,
        other => panic!("form values must be a JSON object, got {}", other),
    };
    if !form_values.contains_key(PROCESS_ID_KEY) {
        form_values.insert(PROCESS_ID_KEY.to_string(), Value::String(PROCESS_ID.to_string()));
    }

    FormInstanceDescriptor::new(
        "/api/service/custom_form/test/test/continue",
        definitions,
        form_values,
    )
}

/// A single-field form, for exercising one type or cardinality rule at a time.
#[allow(dead_code)]
pub fn single_field_form(
    field_type: FieldType,
    cardinality: Cardinality,
    value: Option<Value>,
) -> FormInstanceDescriptor {
    let values = match value {
        Some(value) => serde_json::json!({ "field": value }),
        None => serde_json::json!({}),
    };
    form_with(&[("field", field_type, cardinality)], values)
}
