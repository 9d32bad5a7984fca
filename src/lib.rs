//! # approval-form - Form Instance Descriptors for Workflow Approvals
//!
//! When a workflow step needs a human decision it pauses and publishes a **form instance
//! descriptor**: a self-describing record holding the URL to post the answer to, a schema of
//! field definitions, and the pre-filled values (including the `processId` of the waiting
//! process). This crate models that record with strong types, keeps its JSON shape exact,
//! and validates values against the co-located schema instead of trusting their shape.
//!
//! ## Core Workflow
//!
//! 1.  **Load or Build a Form**: Parse a descriptor with `FormInstanceDescriptor::from_json`,
//!     or produce one from your own request type by implementing `IntoForm`.
//! 2.  **Validate**: Create a `Validator` (optionally through `Validator::builder` to add
//!     type aliases, custom type checkers, or stricter options) and check the form.
//! 3.  **Submit**: Apply a `FormSubmission` to obtain the submitted descriptor. The original
//!     form is never mutated.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use approval_form::prelude::*;
//! use uuid::Uuid;
//!
//! fn main() -> Result<()> {
//!     let output = std::fs::read_to_string("plan.txt")?;
//!     let approval = PlanApproval::new(Uuid::new_v4(), Uuid::new_v4(), output);
//!
//!     if let Some(summary) = approval.plan.summary() {
//!         println!("Plan: {}", summary);
//!     }
//!
//!     // Build the approval form and check it against its own schema.
//!     let form = approval.into_form()?;
//!     let validator = Validator::default();
//!     form.validate(&validator)?;
//!
//!     // A reviewer approves the plan.
//!     let submission = FormSubmission::new().with_value("approved", true);
//!     let submitted = form.submit(&validator, &submission)?;
//!
//!     println!("{}", submitted.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod form;
pub mod plan;
pub mod prelude;
pub mod submission;
pub mod validation;
