use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{require, require_some, FieldIssue};
use super::StepRecord;
use crate::wizard::WizardStep;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub organization_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_description: String,
}

/// Date the organization tracks for a member (birthday, anniversary, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialDay {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    pub date: Option<NaiveDate>,
}

impl StepRecord for Job {
    const STEP: WizardStep = WizardStep::Job;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        require(&mut issues, "organization_name", &self.organization_name);
        issues
    }
}

impl StepRecord for SpecialDay {
    const STEP: WizardStep = WizardStep::SpecialDays;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        require_some(&mut issues, "date", &self.date);
        issues
    }
}
