use serde::Deserialize;
use serde_json::Value;

use super::StepRecord;
use crate::ids::{RecordId, RowKey};

/// One editable row of a step form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRow<T> {
    pub key: RowKey,
    /// Server id, present once the row has been persisted.
    pub id: Option<RecordId>,
    pub record: T,
}

impl<T: StepRecord> FormRow<T> {
    pub fn new(record: T) -> Self {
        Self {
            key: RowKey::new(),
            id: None,
            record,
        }
    }

    /// Empty template row.
    pub fn blank() -> Self {
        Self::new(T::default())
    }

    /// Build a row from a server object, picking up its `id` when present.
    pub fn from_server(value: &Value) -> Result<Self, serde_json::Error> {
        let record = T::deserialize(value)?;
        let id = value.get("id").and_then(Value::as_u64).map(RecordId::new);
        Ok(Self {
            key: RowKey::new(),
            id,
            record,
        })
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Record fields as a JSON object, with `id` added for saved rows.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(&self.record)?;
        if let (Some(id), Value::Object(map)) = (self.id, &mut value) {
            map.insert("id".to_string(), Value::from(id.get()));
        }
        Ok(value)
    }
}

/// Existing rows, or exactly one blank template when there are none.
pub fn rows_or_template<T: StepRecord>(existing: Vec<FormRow<T>>) -> Vec<FormRow<T>> {
    if existing.is_empty() {
        vec![FormRow::blank()]
    } else {
        existing
    }
}
