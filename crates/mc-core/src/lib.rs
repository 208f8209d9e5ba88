//! # mc-core
//!
//! Core domain models and business rules for the member console.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod errors;
pub mod ids;
pub mod navigation;
pub mod ports;
pub mod records;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use errors::{ErrorEnvelope, FormErrors, Notification, NotificationLevel};
pub use ids::{MemberId, RecordId, RowKey};
pub use navigation::{filter_navigation, NavigationNode, PermissionRequirements, PermissionSet};
pub use wizard::{
    WizardAction, WizardError, WizardEvent, WizardRoute, WizardState, WizardStateMachine,
    WizardStep, TOTAL_STEPS,
};
