use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{require, FieldIssue};
use super::StepRecord;
use crate::wizard::WizardStep;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spouse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub spouse_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub contact_number: String,
    pub spouse_dob: Option<NaiveDate>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub current_status: String,
    /// Uploaded photo URL.
    pub image: Option<String>,
}

/// Child or other descendant. Each one is submitted on its own request
/// because it carries its own upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Descendant {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub relation_type: String,
    pub date_of_birth: Option<NaiveDate>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Companion {
    #[serde(deserialize_with = "super::null_as_default")]
    pub companion_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub relation: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub companion_card_number: String,
    pub companion_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyContact {
    #[serde(deserialize_with = "super::null_as_default")]
    pub contact_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub contact_number: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub relation_with_member: String,
}

impl StepRecord for Spouse {
    const STEP: WizardStep = WizardStep::Spouse;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "spouse_name", &self.spouse_name);
        issues
    }
}

impl StepRecord for Descendant {
    const STEP: WizardStep = WizardStep::Descendants;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "name", &self.name);
        require(&mut issues, "relation_type", &self.relation_type);
        issues
    }
}

impl StepRecord for Companion {
    const STEP: WizardStep = WizardStep::Companion;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "companion_name", &self.companion_name);
        require(&mut issues, "relation", &self.relation);
        issues
    }
}

impl StepRecord for EmergencyContact {
    const STEP: WizardStep = WizardStep::EmergencyContact;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "contact_name", &self.contact_name);
        require(&mut issues, "contact_number", &self.contact_number);
        issues
    }
}
