//! Core data models for the Offboarding Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod entitlement;
mod record;
mod state;
mod summary;

pub use entitlement::{EntitlementResult, FinancialInputs, ServiceDuration};
pub use record::{DataEntryForm, EmployeeRecord, Field, FieldUpdate};
pub use state::WorkflowState;
pub use summary::OffboardingSummary;
