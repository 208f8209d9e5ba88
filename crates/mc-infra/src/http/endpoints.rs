//! Backend endpoint paths, relative to the configured base URL.

use mc_core::ids::{MemberId, RecordId};
use mc_core::wizard::WizardStep;

pub const USER_PERMISSIONS: &str = "/authorization/get_user_all_permissions/";
pub const NEXT_MEMBER_ID: &str = "/members/get_latest_id/";

/// Sub-resource name of each wizard step.
pub fn step_resource(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Membership => "member",
        WizardStep::Contact => "contact_numbers",
        WizardStep::Email => "email_address",
        WizardStep::Address => "address",
        WizardStep::Spouse => "spouse",
        WizardStep::Descendants => "descendants",
        WizardStep::Companion => "companion",
        WizardStep::EmergencyContact => "emergency_contact",
        WizardStep::Document => "documents",
        WizardStep::Certificate => "certificate",
        WizardStep::Job => "job",
        WizardStep::SpecialDays => "special_day",
    }
}

pub fn member_detail(member_id: &MemberId) -> String {
    format!("/members/{member_id}/")
}

/// POST target for new records.
pub fn step_collection(step: WizardStep) -> String {
    format!("/members/{}/", step_resource(step))
}

/// PATCH target for a member's records of one step.
pub fn step_member(step: WizardStep, member_id: &str) -> String {
    format!("/members/{}/{member_id}/", step_resource(step))
}

pub fn step_record(step: WizardStep, record_id: RecordId) -> String {
    format!("/members/{}/{record_id}/", step_resource(step))
}
