//! Wizard step records.
//!
//! Each step edits a small collection of records keyed by `member_ID`.
//! Rows are tagged with their server `id` once persisted.

mod career;
mod contact_info;
mod family;
mod form_row;
mod member_detail;
mod membership;
mod papers;
pub mod payload;
mod primary;
mod validation;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::wizard::WizardStep;

pub use career::{Job, SpecialDay};
pub use contact_info::{Address, Contact, Email};
pub use family::{Companion, Descendant, EmergencyContact, Spouse};
pub use form_row::{rows_or_template, FormRow};
pub use member_detail::MemberDetail;
pub use membership::Membership;
pub use papers::{Certificate, Document};
pub use primary::{primary_count, set_primary, PrimaryFlag};
pub use validation::{validate_rows, FieldIssue};

/// A record edited by one wizard step.
pub trait StepRecord:
    Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const STEP: WizardStep;

    /// Client-side shape checks run before any request is made.
    fn validate(&self) -> Vec<FieldIssue>;

    /// Exclusive primary flag, for records that carry one.
    fn primary(&self) -> Option<bool> {
        None
    }
}

/// Reads an explicit `null` as the field's default. The backend sends
/// `null` for blank nullable columns.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
