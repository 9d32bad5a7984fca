use super::descriptor::FormInstanceDescriptor;
use crate::error::FormConversionError;

/// A trait for workflow requests that can be turned into a form descriptor.
///
/// This is the extension point for producing forms from your own data. Implement it on
/// whatever a workflow step hands you when it needs human input, and the resulting
/// descriptor can be validated, rendered and submitted like any other form.
///
/// # Example
///
/// ```rust,no_run
/// use approval_form::prelude::*;
/// use approval_form::error::FormConversionError;
///
/// struct ReleaseSignOff {
///     process_id: String,
///     version: String,
/// }
///
/// impl IntoForm for ReleaseSignOff {
///     fn into_form(self) -> std::result::Result<FormInstanceDescriptor, FormConversionError> {
///         let mut definitions = FieldDefinitions::new();
///         definitions.insert(
///             "signedOff".to_string(),
///             FieldDefinition::new(FieldType::Boolean, Cardinality::OneAndOnlyOne),
///         );
///
///         let mut values = FieldValues::new();
///         values.insert("processId".to_string(), self.process_id.into());
///         values.insert("version".to_string(), self.version.into());
///         values.insert("signedOff".to_string(), false.into());
///
///         Ok(FormInstanceDescriptor::new("/forms/sign-off", definitions, values))
///     }
/// }
/// ```
pub trait IntoForm {
    /// Consumes the request and converts it into a form descriptor.
    fn into_form(self) -> Result<FormInstanceDescriptor, FormConversionError>;
}
