use serde::{Deserialize, Serialize};

use super::validation::{require, FieldIssue};
use super::{PrimaryFlag, StepRecord};
use crate::wizard::WizardStep;

/// Phone number of a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "super::null_as_default")]
    pub contact_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub number: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_primary: bool,
}

/// E-mail address of a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    #[serde(deserialize_with = "super::null_as_default")]
    pub email_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_primary: bool,
}

/// Postal address of a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "super::null_as_default")]
    pub address_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_primary: bool,
}

macro_rules! impl_primary_flag {
    ($($name:ident),* $(,)?) => {
        $(
            impl PrimaryFlag for $name {
                fn is_primary(&self) -> bool {
                    self.is_primary
                }

                fn set_is_primary(&mut self, value: bool) {
                    self.is_primary = value;
                }
            }
        )*
    };
}

impl_primary_flag!(Contact, Email, Address);

impl StepRecord for Contact {
    const STEP: WizardStep = WizardStep::Contact;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "number", &self.number);
        let digits = self.number.chars().filter(char::is_ascii_digit).count();
        let allowed = self
            .number
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
        if !self.number.trim().is_empty() && (!allowed || digits < 6) {
            issues.push(FieldIssue::invalid("number", "Enter a valid phone number."));
        }
        issues
    }

    fn primary(&self) -> Option<bool> {
        Some(self.is_primary)
    }
}

impl StepRecord for Email {
    const STEP: WizardStep = WizardStep::Email;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "email", &self.email);
        if !self.email.trim().is_empty() && !looks_like_email(self.email.trim()) {
            issues.push(FieldIssue::invalid("email", "Enter a valid email address."));
        }
        issues
    }

    fn primary(&self) -> Option<bool> {
        Some(self.is_primary)
    }
}

impl StepRecord for Address {
    const STEP: WizardStep = WizardStep::Address;

    fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "address", &self.address);
        require(&mut issues, "city", &self.city);
        require(&mut issues, "country", &self.country);
        issues
    }

    fn primary(&self) -> Option<bool> {
        Some(self.is_primary)
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("member@club.org"));
        assert!(!looks_like_email("member@club"));
        assert!(!looks_like_email("@club.org"));
        assert!(!looks_like_email("a@b@club.org"));
        assert!(!looks_like_email("mem ber@club.org"));
    }

    #[test]
    fn test_contact_number_validation() {
        let ok = Contact {
            number: "+880 1711-000000".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_empty());

        let bad = Contact {
            number: "call me".to_string(),
            ..Default::default()
        };
        assert_eq!(bad.validate()[0].field, "number");
    }

    #[test]
    fn test_address_required_fields() {
        let fields: Vec<_> = Address::default()
            .validate()
            .into_iter()
            .map(|i| i.field)
            .collect();
        assert_eq!(fields, vec!["address", "city", "country"]);
    }
}
