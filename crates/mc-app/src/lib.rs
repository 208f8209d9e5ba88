//! Member Console Application Orchestration Layer
//!
//! This crate contains the use cases behind the dashboard: navigation
//! loading and the member wizard (controller, step forms, submission).

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::UseCases;
