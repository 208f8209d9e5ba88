//! Server error envelope.
//!
//! The backend reports failures as
//! `{ message, detail, errors }` where `errors` is one of:
//! - `{ field: [msg, ...] }` for single-record submissions,
//! - `{ data: [ { field: [msg] }, ... ], other_key: [...] }` for batches,
//! - `[ { field: [msg] }, ... ]` for batches on some endpoints.
//!
//! [`ServerErrors`] names those shapes so callers never probe raw JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::FormErrors;

pub const DEFAULT_FAILURE_TEXT: &str = "Unexpected error occurred";

/// Field name to its messages.
pub type FieldMessages = BTreeMap<String, Vec<String>>;

/// Raw failure body returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
    pub message: Option<String>,
    pub detail: Option<String>,
    pub errors: Option<Value>,
}

/// Known shapes of the `errors` member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerErrors {
    /// No usable structure.
    None,
    /// Flat `{ field: [msg] }`.
    Fields(FieldMessages),
    /// Per-record messages, by position in the submitted `data` array, plus
    /// any keys that sat next to `data`.
    Records {
        records: BTreeMap<usize, FieldMessages>,
        top_level: FieldMessages,
    },
}

/// Where a failure should be reported on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTarget {
    /// Single-record form: field errors use bare names.
    Single,
    /// Batch form: per-record errors use `data.<i>.<field>`, flat keys go to
    /// the notification.
    Batch,
    /// One record of a fan-out submission, at this row index.
    Record(usize),
}

/// Result of mapping an envelope onto a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    pub field_errors: FormErrors,
    /// Text for the single global notification, if any.
    pub notification: Option<String>,
}

impl ErrorEnvelope {
    /// Lenient parse: a body that is not an envelope yields an empty one.
    /// Members are read one by one, so a mistyped member only loses itself.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                message: text_member(&map, "message"),
                detail: text_member(&map, "detail"),
                errors: map.remove("errors").filter(|errors| !errors.is_null()),
            },
            Value::String(text) => Self {
                detail: Some(text),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<Value>(body)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::default()
        }
    }

    pub fn server_errors(&self) -> ServerErrors {
        match &self.errors {
            Some(Value::Array(items)) => ServerErrors::records(items, FieldMessages::new()),
            Some(Value::Object(map)) => match map.get("data") {
                Some(Value::Array(items)) => {
                    let top_level = field_messages(map.iter().filter(|(key, _)| *key != "data"));
                    ServerErrors::records(items, top_level)
                }
                _ => {
                    let fields = field_messages(map.iter());
                    if fields.is_empty() {
                        ServerErrors::None
                    } else {
                        ServerErrors::Fields(fields)
                    }
                }
            },
            _ => ServerErrors::None,
        }
    }

    /// `detail`, else `message`, else the default failure text.
    pub fn fallback_text(&self) -> String {
        non_blank(self.detail.as_deref())
            .or_else(|| non_blank(self.message.as_deref()))
            .unwrap_or(DEFAULT_FAILURE_TEXT)
            .to_string()
    }

    pub fn to_report(&self, target: ErrorTarget) -> ErrorReport {
        let mut report = ErrorReport::default();

        match self.server_errors() {
            ServerErrors::None => {
                report.notification = Some(self.fallback_text());
            }
            ServerErrors::Fields(fields) => match target {
                ErrorTarget::Single => {
                    for (field, messages) in fields {
                        if let Some(first) = messages.into_iter().next() {
                            report.field_errors.set(field, first);
                        }
                    }
                }
                ErrorTarget::Record(index) => {
                    for (field, messages) in fields {
                        if let Some(first) = messages.into_iter().next() {
                            report
                                .field_errors
                                .set(FormErrors::record_path(index, &field), first);
                        }
                    }
                }
                ErrorTarget::Batch => {
                    report.notification = Some(join_messages(&fields));
                }
            },
            ServerErrors::Records { records, top_level } => {
                for (position, fields) in records {
                    let index = match target {
                        ErrorTarget::Record(index) => index,
                        ErrorTarget::Single | ErrorTarget::Batch => position,
                    };
                    for (field, messages) in fields {
                        if let Some(first) = messages.into_iter().next() {
                            let path = match target {
                                ErrorTarget::Single => field,
                                _ => FormErrors::record_path(index, &field),
                            };
                            report.field_errors.set(path, first);
                        }
                    }
                }
                if !top_level.is_empty() {
                    report.notification = Some(join_messages(&top_level));
                } else if report.field_errors.is_empty() {
                    report.notification = Some(self.fallback_text());
                }
            }
        }

        report
    }
}

impl ServerErrors {
    fn records(items: &[Value], top_level: FieldMessages) -> Self {
        let records = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Value::Object(map) => {
                    let fields = field_messages(map.iter());
                    (!fields.is_empty()).then_some((index, fields))
                }
                _ => None,
            })
            .collect();
        ServerErrors::Records { records, top_level }
    }
}

fn field_messages<'a>(entries: impl Iterator<Item = (&'a String, &'a Value)>) -> FieldMessages {
    entries
        .filter_map(|(field, value)| {
            let messages = messages_of(value);
            (!messages.is_empty()).then(|| (field.clone(), messages))
        })
        .collect()
}

fn messages_of(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items.iter().flat_map(messages_of).collect(),
        Value::Object(map) => nested_messages(map),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

fn nested_messages(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .flat_map(|(key, value)| {
            messages_of(value)
                .into_iter()
                .map(move |message| format!("{key}: {message}"))
        })
        .collect()
}

fn join_messages(fields: &FieldMessages) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_member(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> ErrorEnvelope {
        ErrorEnvelope::from_value(value)
    }

    #[test]
    fn test_detail_used_verbatim_when_no_errors() {
        let env = envelope(json!({ "detail": "Member LM-9 is archived." }));
        assert_eq!(env.server_errors(), ServerErrors::None);
        let report = env.to_report(ErrorTarget::Batch);
        assert_eq!(report.notification.as_deref(), Some("Member LM-9 is archived."));
        assert!(report.field_errors.is_empty());
    }

    #[test]
    fn test_message_then_default_fallback() {
        assert_eq!(
            envelope(json!({ "message": "Nope" })).fallback_text(),
            "Nope"
        );
        assert_eq!(envelope(json!({})).fallback_text(), DEFAULT_FAILURE_TEXT);
        assert_eq!(
            envelope(json!({ "detail": "  ", "message": "m" })).fallback_text(),
            "m"
        );
    }

    #[test]
    fn test_flat_errors_on_single_form() {
        let env = envelope(json!({
            "message": "Validation failed",
            "errors": { "spouse_name": ["This field may not be blank."] }
        }));
        let report = env.to_report(ErrorTarget::Single);
        assert_eq!(
            report.field_errors.get("spouse_name"),
            Some("This field may not be blank.")
        );
        assert!(report.notification.is_none());
    }

    #[test]
    fn test_flat_errors_on_batch_become_notification() {
        let env = envelope(json!({ "errors": { "member_ID": ["Member not found."] } }));
        let report = env.to_report(ErrorTarget::Batch);
        assert!(report.field_errors.is_empty());
        assert_eq!(
            report.notification.as_deref(),
            Some("member_ID: Member not found.")
        );
    }

    #[test]
    fn test_nested_data_errors_map_to_record_paths() {
        let env = envelope(json!({
            "errors": {
                "data": [
                    {},
                    { "email": ["Enter a valid email address."] },
                    { "email": ["Duplicate."], "email_type": ["Invalid choice."] }
                ],
                "non_field_errors": ["Only one primary email allowed."]
            }
        }));

        let report = env.to_report(ErrorTarget::Batch);

        assert_eq!(
            report.field_errors.get("data.1.email"),
            Some("Enter a valid email address.")
        );
        assert_eq!(report.field_errors.get("data.2.email"), Some("Duplicate."));
        assert_eq!(
            report.field_errors.get("data.2.email_type"),
            Some("Invalid choice.")
        );
        assert!(!report.field_errors.has_record(0));
        assert_eq!(
            report.notification.as_deref(),
            Some("non_field_errors: Only one primary email allowed.")
        );
    }

    #[test]
    fn test_array_shaped_errors() {
        let env = envelope(json!({ "errors": [ { "number": ["Too short."] } ] }));
        match env.server_errors() {
            ServerErrors::Records { records, top_level } => {
                assert_eq!(records.len(), 1);
                assert!(top_level.is_empty());
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_record_target_rewrites_index() {
        let env = envelope(json!({ "errors": { "name": ["Required."] } }));
        let report = env.to_report(ErrorTarget::Record(1));
        assert_eq!(report.field_errors.get("data.1.name"), Some("Required."));
    }

    #[test]
    fn test_string_messages_and_nested_objects() {
        let env = envelope(json!({
            "errors": { "title": "Required.", "meta": { "size": ["Too large."] } }
        }));
        let report = env.to_report(ErrorTarget::Single);
        assert_eq!(report.field_errors.get("title"), Some("Required."));
        assert_eq!(report.field_errors.get("meta"), Some("size: Too large."));
    }

    #[test]
    fn test_mistyped_member_keeps_the_others() {
        let env = envelope(json!({
            "message": 500,
            "detail": "Member LM-9 is archived.",
            "errors": { "name": ["Required."] }
        }));
        assert_eq!(env.message, None);
        assert_eq!(env.detail.as_deref(), Some("Member LM-9 is archived."));
        assert_eq!(env.fallback_text(), "Member LM-9 is archived.");
        assert_eq!(
            env.to_report(ErrorTarget::Single).field_errors.get("name"),
            Some("Required.")
        );
    }

    #[test]
    fn test_non_json_body_is_empty_envelope() {
        let env = ErrorEnvelope::from_body("<html>502 Bad Gateway</html>");
        assert_eq!(env, ErrorEnvelope::default());
        assert_eq!(
            env.to_report(ErrorTarget::Batch).notification.as_deref(),
            Some(DEFAULT_FAILURE_TEXT)
        );
    }

    #[test]
    fn test_empty_records_fall_back_to_text() {
        let env = envelope(json!({ "message": "Rejected", "errors": { "data": [{}, {}] } }));
        let report = env.to_report(ErrorTarget::Batch);
        assert_eq!(report.notification.as_deref(), Some("Rejected"));
    }
}
