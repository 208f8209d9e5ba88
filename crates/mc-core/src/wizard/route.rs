use crate::ids::MemberId;

/// Page route as seen by the wizard.
///
/// The wizard derives create/update mode from this boundary:
/// `/member/add` vs `/member/update/<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardRoute {
    Add,
    Update { member_id: MemberId },
    Other,
}

impl WizardRoute {
    pub fn parse(path: &str) -> Self {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["member", "add"] => WizardRoute::Add,
            ["member", "update", id] => match MemberId::parse(id) {
                Some(member_id) => WizardRoute::Update { member_id },
                None => WizardRoute::Other,
            },
            _ => WizardRoute::Other,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, WizardRoute::Update { .. })
    }
}
