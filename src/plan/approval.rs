use super::transcript::PlanTranscript;
use crate::error::FormConversionError;
use crate::form::{
    Cardinality, FieldDefinition, FieldDefinitions, FieldType, FieldValues, FormInstanceDescriptor,
    IntoForm, PROCESS_ID_KEY,
};
use serde_json::Value;
use uuid::Uuid;

/// Field holding the plan transcript shown to the approver.
pub const PLAN_FIELD: &str = "plan";
/// Field holding the approver's decision.
pub const APPROVED_FIELD: &str = "approved";

/// URL a custom form for `process_id` posts to in order to resume the process.
pub fn custom_form_submit_url(process_id: &Uuid, form_id: &Uuid) -> String {
    format!("/api/service/custom_form/{}/{}/continue", process_id, form_id)
}

/// A request for a human to approve a terraform plan before it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanApproval {
    pub process_id: Uuid,
    pub form_id: Uuid,
    pub plan: PlanTranscript,
}

impl PlanApproval {
    pub fn new(process_id: Uuid, form_id: Uuid, output: impl Into<String>) -> Self {
        Self {
            process_id,
            form_id,
            plan: PlanTranscript::new(output),
        }
    }
}

impl IntoForm for PlanApproval {
    fn into_form(self) -> Result<FormInstanceDescriptor, FormConversionError> {
        if self.plan.raw().trim().is_empty() {
            return Err(FormConversionError::ValidationError(
                "plan output is empty, there is nothing to approve".to_string(),
            ));
        }

        let mut definitions = FieldDefinitions::new();
        definitions.insert(
            PLAN_FIELD.to_string(),
            FieldDefinition::new(FieldType::String, Cardinality::OneOrNone),
        );
        definitions.insert(
            APPROVED_FIELD.to_string(),
            FieldDefinition::new(FieldType::Boolean, Cardinality::OneAndOnlyOne),
        );

        let mut values = FieldValues::new();
        values.insert(
            PROCESS_ID_KEY.to_string(),
            Value::String(self.process_id.to_string()),
        );
        values.insert(PLAN_FIELD.to_string(), Value::String(self.plan.into_raw()));
        values.insert(APPROVED_FIELD.to_string(), Value::Bool(false));

        Ok(FormInstanceDescriptor::new(
            custom_form_submit_url(&self.process_id, &self.form_id),
            definitions,
            values,
        ))
    }
}

/// Where an approval form stands.
///
/// Reads `success` and `approved` independently: an unsubmitted form is pending no matter
/// what `approved` is pre-filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalOutcome {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalOutcome {
    /// `None` when a submitted form has no boolean `approved` value.
    pub fn of(form: &FormInstanceDescriptor) -> Option<Self> {
        if !form.success {
            return Some(ApprovalOutcome::Pending);
        }
        match form.value(APPROVED_FIELD)?.as_bool()? {
            true => Some(ApprovalOutcome::Approved),
            false => Some(ApprovalOutcome::Rejected),
        }
    }
}
