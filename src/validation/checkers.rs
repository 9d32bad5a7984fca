use ahash::AHashMap;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Defines the contract for checking that a JSON value matches a declared field type.
pub trait FieldTypeChecker: Send + Sync {
    /// The type name this checker is registered under, as it appears in `definitions`.
    fn type_name(&self) -> &str;

    /// Human-readable description of the accepted values, used in error messages.
    fn expected(&self) -> &str {
        self.type_name()
    }

    fn accepts(&self, value: &Value) -> bool;
}

fn is_date(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| Date::parse(s, format_description!("[year]-[month]-[day]")).is_ok())
}

fn is_date_time(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| OffsetDateTime::parse(s, &Rfc3339).is_ok())
}

/// Master macro to define all built-in type checkers, their registration, and their creation.
macro_rules! define_type_checkers {
    ( $( ($struct_name:ident, $type_name:literal, $expected:literal, $accepts:expr) ),* $(,)? ) => {
        $(
            struct $struct_name;
            impl FieldTypeChecker for $struct_name {
                fn type_name(&self) -> &str { $type_name }
                fn expected(&self) -> &str { $expected }
                fn accepts(&self, value: &Value) -> bool { ($accepts)(value) }
            }
        )*

        pub(super) fn register_default_checkers(
            registry: &mut AHashMap<String, Box<dyn FieldTypeChecker>>,
        ) {
            $( registry.insert($type_name.to_string(), Box::new($struct_name)); )*
        }

        pub(super) fn create_checker_by_name(name: &str) -> Option<Box<dyn FieldTypeChecker>> {
            match name {
                $( $type_name => Some(Box::new($struct_name)), )*
                _ => None,
            }
        }
    };
}

define_type_checkers! {
    (StringChecker, "string", "string", |v: &Value| v.is_string()),
    (IntChecker, "int", "int (a whole number)", |v: &Value| v.as_i64().is_some()),
    (DecimalChecker, "decimal", "decimal (any number)", |v: &Value| v.is_number()),
    (BooleanChecker, "boolean", "boolean", |v: &Value| v.is_boolean()),
    (FileChecker, "file", "file (a path or attachment name)", |v: &Value| v.is_string()),
    (DateChecker, "date", "date (YYYY-MM-DD)", is_date),
    (DateTimeChecker, "dateTime", "dateTime (RFC 3339)", is_date_time),
}
