use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{require, FieldIssue};
use super::StepRecord;
use crate::wizard::WizardStep;

/// Core membership record (step 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Membership {
    #[serde(deserialize_with = "super::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub membership_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub institute_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub batch_number: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub blood_group: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub nationality: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub marital_status: String,
    pub anniversary_date: Option<NaiveDate>,
    pub profile_photo: Option<String>,
}

impl StepRecord for Membership {
    const STEP: WizardStep = WizardStep::Membership;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "first_name", &self.first_name);
        require(&mut issues, "last_name", &self.last_name);
        require(&mut issues, "gender", &self.gender);
        require(&mut issues, "membership_type", &self.membership_type);
        require(&mut issues, "institute_name", &self.institute_name);
        if let (Some(born), Some(anniversary)) = (self.date_of_birth, self.anniversary_date) {
            if anniversary < born {
                issues.push(FieldIssue::invalid(
                    "anniversary_date",
                    "Anniversary cannot be before date of birth.",
                ));
            }
        }
        issues
    }
}
