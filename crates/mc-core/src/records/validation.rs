use crate::errors::FormErrors;
use crate::wizard::SubmissionShape;

use super::{FormRow, StepRecord};

/// A client-side problem with one field of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "This field is required.".to_string(),
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub(crate) fn require(issues: &mut Vec<FieldIssue>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        issues.push(FieldIssue::required(field));
    }
}

pub(crate) fn require_some<T>(issues: &mut Vec<FieldIssue>, field: &'static str, value: &Option<T>) {
    if value.is_none() {
        issues.push(FieldIssue::required(field));
    }
}

/// Validate every row and collect issues under their form paths.
///
/// Rows of single-record steps use bare field names; everything else is
/// addressed as `data.<index>.<field>`.
pub fn validate_rows<T: StepRecord>(rows: &[FormRow<T>]) -> FormErrors {
    let shape = T::STEP.shape();
    let mut errors = FormErrors::default();

    for (index, row) in rows.iter().enumerate() {
        for issue in row.record.validate() {
            let path = match shape {
                SubmissionShape::Single => issue.field.to_string(),
                SubmissionShape::Batch | SubmissionShape::PerRecord => {
                    FormErrors::record_path(index, issue.field)
                }
            };
            errors.set(path, issue.message);
        }
    }

    let primaries = rows
        .iter()
        .filter(|row| row.record.primary() == Some(true))
        .count();
    if primaries > 1 {
        errors.push_global("Only one record can be marked as primary.");
    }

    errors
}
