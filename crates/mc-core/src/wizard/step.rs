use serde::{Deserialize, Serialize};

/// Number of wizard steps.
pub const TOTAL_STEPS: usize = 12;

/// One entity-scoped sub-form of the member wizard, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Membership,
    Contact,
    Email,
    Address,
    Spouse,
    Descendants,
    Companion,
    EmergencyContact,
    Document,
    Certificate,
    Job,
    SpecialDays,
}

/// How a step's records travel to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionShape {
    /// One record, sent as a flat object.
    Single,
    /// All records in one `{ member_ID, data: [...] }` request.
    Batch,
    /// One request per record, executed concurrently.
    PerRecord,
}

impl WizardStep {
    pub const ALL: [WizardStep; TOTAL_STEPS] = [
        WizardStep::Membership,
        WizardStep::Contact,
        WizardStep::Email,
        WizardStep::Address,
        WizardStep::Spouse,
        WizardStep::Descendants,
        WizardStep::Companion,
        WizardStep::EmergencyContact,
        WizardStep::Document,
        WizardStep::Certificate,
        WizardStep::Job,
        WizardStep::SpecialDays,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Membership => "Membership",
            WizardStep::Contact => "Contact",
            WizardStep::Email => "Email",
            WizardStep::Address => "Address",
            WizardStep::Spouse => "Spouse",
            WizardStep::Descendants => "Descendants",
            WizardStep::Companion => "Companion",
            WizardStep::EmergencyContact => "Emergency Contact",
            WizardStep::Document => "Document",
            WizardStep::Certificate => "Certificate",
            WizardStep::Job => "Job",
            WizardStep::SpecialDays => "Special Days",
        }
    }

    pub fn shape(self) -> SubmissionShape {
        match self {
            WizardStep::Membership | WizardStep::Spouse => SubmissionShape::Single,
            WizardStep::Descendants | WizardStep::Certificate => SubmissionShape::PerRecord,
            _ => SubmissionShape::Batch,
        }
    }

    /// Whether a successful update-mode save moves the wizard forward.
    ///
    /// Contact and email edits on an existing member are standalone saves.
    pub fn advances_on_update(self) -> bool {
        !matches!(self, WizardStep::Contact | WizardStep::Email)
    }

    /// Whether the step's records carry an exclusive `is_primary` flag.
    pub fn has_primary(self) -> bool {
        matches!(
            self,
            WizardStep::Contact | WizardStep::Email | WizardStep::Address
        )
    }

    /// Key of this step's collection inside the member detail document.
    ///
    /// `None` for the membership step, whose fields are the document itself.
    pub fn detail_key(self) -> Option<&'static str> {
        match self {
            WizardStep::Membership => None,
            WizardStep::Contact => Some("contact_numbers"),
            WizardStep::Email => Some("emails"),
            WizardStep::Address => Some("addresses"),
            WizardStep::Spouse => Some("spouse"),
            WizardStep::Descendants => Some("descendants"),
            WizardStep::Companion => Some("companions"),
            WizardStep::EmergencyContact => Some("emergency_contacts"),
            WizardStep::Document => Some("documents"),
            WizardStep::Certificate => Some("certificates"),
            WizardStep::Job => Some("jobs"),
            WizardStep::SpecialDays => Some("special_days"),
        }
    }

    pub fn is_last(self) -> bool {
        self.index() == TOTAL_STEPS - 1
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_in_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert_eq!(WizardStep::from_index(TOTAL_STEPS), None);
    }

    #[test]
    fn test_fixed_order_endpoints() {
        assert_eq!(WizardStep::ALL[0], WizardStep::Membership);
        assert_eq!(WizardStep::ALL[11], WizardStep::SpecialDays);
        assert!(WizardStep::SpecialDays.is_last());
        assert!(!WizardStep::Job.is_last());
    }

    #[test]
    fn test_update_mode_advancement_policy() {
        let standalone: Vec<_> = WizardStep::ALL
            .iter()
            .filter(|s| !s.advances_on_update())
            .collect();
        assert_eq!(standalone, vec![&WizardStep::Contact, &WizardStep::Email]);
    }

    #[test]
    fn test_fan_out_steps() {
        let fan_out: Vec<_> = WizardStep::ALL
            .iter()
            .filter(|s| s.shape() == SubmissionShape::PerRecord)
            .collect();
        assert_eq!(fan_out, vec![&WizardStep::Descendants, &WizardStep::Certificate]);
    }
}
