use std::collections::BTreeMap;

use serde::Serialize;

/// Errors attached to a step form.
///
/// Field errors are keyed by form path: `data.<index>.<field>` for
/// multi-record steps, a bare field name for single-record steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
    global: Vec<String>,
}

impl FormErrors {
    pub fn record_path(index: usize, field: &str) -> String {
        format!("data.{index}.{field}")
    }

    pub fn set(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(path.into(), message.into());
    }

    pub fn push_global(&mut self, message: impl Into<String>) {
        self.global.push(message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.fields.get(path).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn global(&self) -> &[String] {
        &self.global
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.global.is_empty()
    }

    /// Whether any field error targets the record at `index`.
    pub fn has_record(&self, index: usize) -> bool {
        let prefix = format!("data.{index}.");
        self.fields.keys().any(|path| path.starts_with(&prefix))
    }

    pub fn merge(&mut self, other: FormErrors) {
        self.fields.extend(other.fields);
        self.global.extend(other.global);
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.global.clear();
    }
}
