//! Error presentation domain: server error envelopes, per-field form errors
//! and user notifications.

mod envelope;
mod form_errors;
mod notification;

pub use envelope::{ErrorEnvelope, ErrorReport, ErrorTarget, FieldMessages, ServerErrors};
pub use form_errors::FormErrors;
pub use notification::{Notification, NotificationLevel};
