//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the approval-form
//! crate. Import this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use approval_form::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let form = FormInstanceDescriptor::from_file("forms/approvalForm/data.json")?;
//! let validator = Validator::default();
//! form.validate(&validator)?;
//!
//! let submission = FormSubmission::new().with_value("approved", true);
//! let submitted = form.submit(&validator, &submission)?;
//! println!("Outcome: {:?}", ApprovalOutcome::of(&submitted));
//! # Ok(())
//! # }
//! ```

// Form model
pub use crate::form::{
    Cardinality, FieldDefinition, FieldDefinitions, FieldType, FieldValues,
    FormInstanceDescriptor, IntoForm, PROCESS_ID_KEY, ValueKind,
};

// Validation
pub use crate::validation::checkers::FieldTypeChecker;
pub use crate::validation::{ValidationOptions, Validator, ValidatorBuilder};

// Submission
pub use crate::submission::FormSubmission;

// Terraform plan approvals
pub use crate::plan::{ApprovalOutcome, PlanApproval, PlanSummary, PlanTranscript};

// Error types
pub use crate::error::{FormConversionError, FormError, SubmissionError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
