use serde::{Deserialize, Serialize};

use super::id_macro::impl_string_id;

/// Organization-issued member identifier (e.g. `LM-0042`).
///
/// This is the `member_ID` every sub-resource payload is keyed by. It is
/// assigned either by the ID generation flow or taken from the update route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl_string_id!(MemberId);

impl MemberId {
    /// Parse a raw identifier, treating blank input as "no member".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }
}
