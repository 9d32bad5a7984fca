use crate::error::SubmissionError;
use crate::form::{FieldValues, FormInstanceDescriptor, PROCESS_ID_KEY};
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Values posted by a user to complete a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission {
    values: FieldValues,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Builds a submission from `name=value` pairs.
    ///
    /// The value is read as JSON when it parses as JSON (`true`, `42`, `["a","b"]`),
    /// and taken as a plain string otherwise.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, SubmissionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_pairs(pairs, |_, raw| {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        })
    }

    /// Builds a submission from `name=value` pairs, reading each value by the type `form`
    /// declares for it.
    ///
    /// Values for textual fields (`string`, `file`, `date`, `dateTime`) stay plain strings
    /// so that `ticket=12345` submits `"12345"`. Only a JSON array or quoted string is
    /// decoded for them. Other fields behave as in [`FormSubmission::from_pairs`].
    pub fn from_pairs_for<I, S>(
        form: &FormInstanceDescriptor,
        pairs: I,
    ) -> Result<Self, SubmissionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_pairs(pairs, |name, raw| {
            let parsed = serde_json::from_str(raw).ok();
            let textual = form
                .definition(name)
                .is_some_and(|definition| definition.field_type.is_textual());
            match parsed {
                Some(value @ (Value::Array(_) | Value::String(_))) => value,
                Some(value) if !textual => value,
                _ => Value::String(raw.to_string()),
            }
        })
    }

    fn parse_pairs<I, S, F>(pairs: I, mut read_value: F) -> Result<Self, SubmissionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str, &str) -> Value,
    {
        let mut submission = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, raw) = pair
                .split_once('=')
                .filter(|(name, _)| !name.trim().is_empty())
                .ok_or_else(|| SubmissionError::InvalidPair(pair.to_string()))?;
            let name = name.trim();
            let value = read_value(name, raw);
            submission.values.insert(name.to_string(), value);
        }
        Ok(submission)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Applies the submission to `form`, returning the submitted form.
    ///
    /// The original form is left untouched. On success the returned form has the submitted
    /// values merged over the pre-filled ones and `success` set. The `success` flag says
    /// nothing about what was submitted: a rejected approval is still a successful submission.
    pub fn apply(
        &self,
        validator: &Validator,
        form: &FormInstanceDescriptor,
    ) -> Result<FormInstanceDescriptor, SubmissionError> {
        if form.success {
            return Err(SubmissionError::AlreadySubmitted);
        }

        for name in self.values.keys() {
            if name == PROCESS_ID_KEY {
                return Err(SubmissionError::ReadOnlyField(name.clone()));
            }
            if !form.definitions.contains_key(name) {
                return Err(SubmissionError::UnknownField(name.clone()));
            }
        }

        let mut submitted = form.clone();
        for (name, value) in &self.values {
            submitted.values.insert(name.clone(), value.clone());
        }
        validator.validate(&submitted)?;
        submitted.success = true;

        tracing::info!(
            process_id = submitted.process_id().unwrap_or("<none>"),
            fields = self.values.len(),
            "form submitted"
        );
        Ok(submitted)
    }
}

impl FormInstanceDescriptor {
    /// Shorthand for [`FormSubmission::apply`].
    pub fn submit(
        &self,
        validator: &Validator,
        submission: &FormSubmission,
    ) -> Result<FormInstanceDescriptor, SubmissionError> {
        submission.apply(validator, self)
    }
}
