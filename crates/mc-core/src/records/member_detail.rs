use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{FormRow, StepRecord};
use crate::wizard::WizardStep;

/// Member detail document: membership fields plus one collection per step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberDetail(Map<String, Value>);

impl MemberDetail {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw server objects for `step`.
    ///
    /// A collection may be absent, `null`, a single object (singleton
    /// steps) or an array.
    pub fn raw_records(&self, step: WizardStep) -> Vec<Value> {
        let Some(key) = step.detail_key() else {
            return vec![Value::Object(self.0.clone())];
        };
        match self.0.get(key) {
            Some(Value::Array(items)) => items.clone(),
            Some(object @ Value::Object(_)) => vec![object.clone()],
            _ => Vec::new(),
        }
    }

    /// Existing rows for `T`'s step.
    pub fn rows<T: StepRecord>(&self) -> Result<Vec<FormRow<T>>, serde_json::Error> {
        self.raw_records(T::STEP)
            .iter()
            .map(FormRow::<T>::from_server)
            .collect()
    }
}
