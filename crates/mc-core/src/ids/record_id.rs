use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned primary key of a persisted sub-resource row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-side key identifying a form row, saved or not.
///
/// 本地行标识，用于在服务器分配 id 之前区分表单行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(uuid::Uuid);

impl RowKey {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RowKey {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RowKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keys_are_distinct() {
        assert_ne!(RowKey::new(), RowKey::new());
    }

    #[test]
    fn test_record_id_from_json_number() {
        let id: RecordId = serde_json::from_str("17").unwrap();
        assert_eq!(id.get(), 17);
    }
}
