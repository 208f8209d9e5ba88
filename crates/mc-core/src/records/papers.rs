use serde::{Deserialize, Serialize};

use super::validation::{require, require_some, FieldIssue};
use super::StepRecord;
use crate::wizard::WizardStep;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "super::null_as_default")]
    pub document_type: String,
    /// Uploaded file URL.
    pub document: Option<String>,
}

/// Academic or professional certificate, submitted one request per record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub certificate_number: String,
    pub certificate_document: Option<String>,
}

impl StepRecord for Document {
    const STEP: WizardStep = WizardStep::Document;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "document_type", &self.document_type);
        require_some(&mut issues, "document", &self.document);
        issues
    }
}

impl StepRecord for Certificate {
    const STEP: WizardStep = WizardStep::Certificate;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        issues
    }
}
