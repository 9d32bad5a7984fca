//! Tests for checking form values against their definitions.
mod common;
use approval_form::prelude::*;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[test]
fn test_fixture_is_valid() {
    let form = approval_form();
    let validator = Validator::default();
    assert_eq!(form.validate(&validator), Ok(()));
    assert!(validator.check_all(&form).is_empty());
}

#[test]
fn test_approved_false_satisfies_boolean_required_field() {
    let form = form_with(
        &[("approved", FieldType::Boolean, Cardinality::OneAndOnlyOne)],
        json!({ "approved": false }),
    );
    assert!(Validator::default().validate(&form).is_ok());
}

#[test]
fn test_non_boolean_approved_is_a_schema_mismatch() {
    let mut form = approval_form();
    form.values.insert("approved".to_string(), json!("yes"));

    let err = Validator::default().validate(&form).unwrap_err();
    assert_eq!(
        err,
        ValidationError::SchemaMismatch {
            field: "approved".to_string(),
            expected: "boolean".to_string(),
            found: json!("yes"),
        }
    );
}

#[test]
fn test_missing_required_field() {
    let mut form = approval_form();
    form.values.remove("approved");

    let err = Validator::default().validate(&form).unwrap_err();
    assert_eq!(err, ValidationError::MissingRequiredField("approved".to_string()));
}

#[test]
fn test_null_required_field_is_missing() {
    let mut form = approval_form();
    form.values.insert("approved".to_string(), Value::Null);

    let err = Validator::default().validate(&form).unwrap_err();
    assert_eq!(err, ValidationError::MissingRequiredField("approved".to_string()));
}

#[test]
fn test_optional_plan_may_be_absent() {
    let mut form = approval_form();
    form.values.remove("plan");
    assert!(Validator::default().validate(&form).is_ok());
}

#[test]
fn test_cardinality_rules() {
    let validator = Validator::default();
    let check = |cardinality: Cardinality, value: Option<Value>| {
        validator.validate(&single_field_form(FieldType::String, cardinality, value))
    };

    // ONE_AND_ONLY_ONE
    assert!(check(Cardinality::OneAndOnlyOne, Some(json!("a"))).is_ok());
    assert!(matches!(
        check(Cardinality::OneAndOnlyOne, None),
        Err(ValidationError::MissingRequiredField(_))
    ));
    assert!(matches!(
        check(Cardinality::OneAndOnlyOne, Some(json!(["a"]))),
        Err(ValidationError::CardinalityViolation { .. })
    ));

    // ONE_OR_NONE
    assert!(check(Cardinality::OneOrNone, None).is_ok());
    assert!(check(Cardinality::OneOrNone, Some(json!("a"))).is_ok());
    assert!(matches!(
        check(Cardinality::OneOrNone, Some(json!(["a", "b"]))),
        Err(ValidationError::CardinalityViolation { .. })
    ));

    // AT_LEAST_ONE
    assert!(check(Cardinality::AtLeastOne, Some(json!("a"))).is_ok());
    assert!(check(Cardinality::AtLeastOne, Some(json!(["a", "b"]))).is_ok());
    assert!(matches!(
        check(Cardinality::AtLeastOne, None),
        Err(ValidationError::MissingRequiredField(_))
    ));
    assert!(matches!(
        check(Cardinality::AtLeastOne, Some(json!([]))),
        Err(ValidationError::CardinalityViolation { .. })
    ));

    // ANY
    assert!(check(Cardinality::Any, None).is_ok());
    assert!(check(Cardinality::Any, Some(json!([]))).is_ok());
    assert!(check(Cardinality::Any, Some(json!(["a", "b"]))).is_ok());
    assert!(check(Cardinality::Any, Some(json!("a"))).is_ok());
}

#[test]
fn test_list_items_are_type_checked() {
    let form = single_field_form(FieldType::Int, Cardinality::Any, Some(json!([1, "two", 3])));
    let err = Validator::default().validate(&form).unwrap_err();
    match err {
        ValidationError::SchemaMismatch { field, found, .. } => {
            assert_eq!(field, "field");
            assert_eq!(found, json!("two"));
        }
        other => panic!("expected a schema mismatch, got {:?}", other),
    }
}

#[test]
fn test_builtin_type_checks() {
    let validator = Validator::default();
    let accepts = |field_type: FieldType, value: Value| {
        validator
            .validate(&single_field_form(field_type, Cardinality::OneAndOnlyOne, Some(value)))
            .is_ok()
    };

    assert!(accepts(FieldType::String, json!("text")));
    assert!(!accepts(FieldType::String, json!(1)));

    assert!(accepts(FieldType::Int, json!(42)));
    assert!(accepts(FieldType::Int, json!(-7)));
    assert!(!accepts(FieldType::Int, json!(4.5)));
    assert!(!accepts(FieldType::Int, json!("42")));

    assert!(accepts(FieldType::Decimal, json!(4.5)));
    assert!(accepts(FieldType::Decimal, json!(3)));
    assert!(!accepts(FieldType::Decimal, json!("4.5")));

    assert!(accepts(FieldType::Boolean, json!(true)));
    assert!(!accepts(FieldType::Boolean, json!("true")));
    assert!(!accepts(FieldType::Boolean, json!(0)));

    assert!(accepts(FieldType::File, json!("_attachments/report.pdf")));
    assert!(!accepts(FieldType::File, json!({ "name": "report.pdf" })));

    assert!(accepts(FieldType::Date, json!("2026-10-17")));
    assert!(!accepts(FieldType::Date, json!("2026-13-01")));
    assert!(!accepts(FieldType::Date, json!("17/10/2026")));

    assert!(accepts(FieldType::DateTime, json!("2026-10-17T09:30:00Z")));
    assert!(accepts(FieldType::DateTime, json!("2026-10-17T09:30:00+02:00")));
    assert!(!accepts(FieldType::DateTime, json!("2026-10-17")));
}

#[test]
fn test_unknown_type_is_rejected_by_default() {
    let form = single_field_form(
        FieldType::Custom("awsRegion".to_string()),
        Cardinality::OneAndOnlyOne,
        Some(json!("us-east-1")),
    );

    let err = Validator::default().validate(&form).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownFieldType {
            field: "field".to_string(),
            type_name: "awsRegion".to_string(),
        }
    );

    let lenient = Validator::builder()
        .with_options(ValidationOptions {
            allow_unknown_types: true,
            ..ValidationOptions::default()
        })
        .build();
    assert!(lenient.validate(&form).is_ok());
}

#[test]
fn test_type_alias_reuses_builtin_check() {
    let validator = Validator::builder().with_type_alias("text", "string").build();

    let ok = single_field_form(
        FieldType::from("text"),
        Cardinality::OneAndOnlyOne,
        Some(json!("hi")),
    );
    assert!(validator.validate(&ok).is_ok());

    let bad = single_field_form(
        FieldType::from("text"),
        Cardinality::OneAndOnlyOne,
        Some(json!(1)),
    );
    assert!(matches!(
        validator.validate(&bad),
        Err(ValidationError::SchemaMismatch { .. })
    ));
}

#[test]
fn test_alias_to_unknown_builtin_is_ignored() {
    let validator = Validator::builder().with_type_alias("text", "nope").build();
    let form = single_field_form(
        FieldType::from("text"),
        Cardinality::OneAndOnlyOne,
        Some(json!("hi")),
    );
    assert!(matches!(
        validator.validate(&form),
        Err(ValidationError::UnknownFieldType { .. })
    ));
}

struct RegionChecker;

impl FieldTypeChecker for RegionChecker {
    fn type_name(&self) -> &str {
        "awsRegion"
    }

    fn expected(&self) -> &str {
        "an AWS region like us-east-1"
    }

    fn accepts(&self, value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|s| s.split('-').count() == 3 && s.ends_with(|c: char| c.is_ascii_digit()))
    }
}

#[test]
fn test_custom_checker() {
    let validator = Validator::builder()
        .with_custom_checker(Box::new(RegionChecker))
        .build();
    let region = FieldType::Custom("awsRegion".to_string());

    let ok = single_field_form(
        region.clone(),
        Cardinality::AtLeastOne,
        Some(json!(["us-east-1", "eu-west-2"])),
    );
    assert!(validator.validate(&ok).is_ok());

    let bad = single_field_form(region, Cardinality::OneAndOnlyOne, Some(json!("mars")));
    let err = validator.validate(&bad).unwrap_err();
    assert!(err.to_string().contains("an AWS region like us-east-1"));
}

#[test]
fn test_allowed_values_are_enforced() {
    let mut form =
        single_field_form(FieldType::String, Cardinality::Any, Some(json!(["dev", "prod"])));
    let definition = form.definitions.get_mut("field").unwrap();
    *definition = definition.clone().with_allowed(vec![json!("dev"), json!("staging")]);

    let err = Validator::default().validate(&form).unwrap_err();
    assert_eq!(
        err,
        ValidationError::ValueNotAllowed {
            field: "field".to_string(),
            found: json!("prod"),
        }
    );

    form.values.insert("field".to_string(), json!(["staging"]));
    assert!(Validator::default().validate(&form).is_ok());
}

#[test]
fn test_process_id_is_required_by_default() {
    let mut form = approval_form();
    form.values.remove(PROCESS_ID_KEY);
    assert_eq!(
        Validator::default().validate(&form),
        Err(ValidationError::MissingProcessId)
    );

    let relaxed = Validator::builder()
        .with_options(ValidationOptions {
            require_process_id: false,
            ..ValidationOptions::default()
        })
        .build();
    assert!(relaxed.validate(&form).is_ok());
}

#[test]
fn test_non_string_process_id_is_a_mismatch() {
    let mut form = approval_form();
    form.values.insert(PROCESS_ID_KEY.to_string(), json!(42));
    let err = Validator::default().validate(&form).unwrap_err();
    assert_eq!(err.field(), Some(PROCESS_ID_KEY));
}

#[test]
fn test_strict_mode_rejects_undeclared_values() {
    let mut form = approval_form();
    form.values.insert("comment".to_string(), json!("looks fine"));

    assert!(Validator::default().validate(&form).is_ok());

    let strict = Validator::builder()
        .with_options(ValidationOptions::strict())
        .build();
    assert_eq!(
        strict.validate(&form),
        Err(ValidationError::UnexpectedField("comment".to_string()))
    );
}

#[test]
fn test_check_all_reports_every_violation_in_order() {
    let form = form_with(
        &[
            ("approved", FieldType::Boolean, Cardinality::OneAndOnlyOne),
            ("replicas", FieldType::Int, Cardinality::OneOrNone),
            ("reviewers", FieldType::String, Cardinality::AtLeastOne),
        ],
        json!({
            "processId": 7,
            "replicas": "three",
            "reviewers": [],
            "extra": true,
        }),
    );

    let strict = Validator::builder()
        .with_options(ValidationOptions::strict())
        .build();
    let violations = strict.check_all(&form);
    let fields: Vec<_> = violations.iter().map(|v| v.field()).collect();
    assert_eq!(
        fields,
        vec![
            Some("approved"),
            Some("replicas"),
            Some("reviewers"),
            Some(PROCESS_ID_KEY),
            Some("extra"),
        ]
    );

    // `validate` stops at the first of them.
    assert_eq!(
        strict.validate(&form),
        Err(ValidationError::MissingRequiredField("approved".to_string()))
    );
}

#[test]
fn test_check_field_directly() {
    let validator = Validator::default();
    let definition = FieldDefinition::new(FieldType::Boolean, Cardinality::OneAndOnlyOne);
    assert!(validator.check_field("approved", &definition, Some(&json!(true))).is_ok());
    assert!(validator.check_field("approved", &definition, None).is_err());
}
