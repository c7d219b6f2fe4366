//! Offboarding Workflow and Entitlement Engine
//!
//! This crate drives an employee offboarding process through its three stages
//! (data entry, department clearance, completed) and computes end-of-service
//! entitlements from salary, service dates, and unused leave.
//!
//! The engine is purely in-memory and single-threaded: every operation on
//! [`workflow::OffboardingWorkflow`] runs to completion before the next is
//! accepted, and all derived figures (service duration, entitlements,
//! checklist completeness) are recomputed on demand rather than cached.

#![warn(missing_docs)]

pub mod calculation;
pub mod checklist;
pub mod error;
pub mod models;
pub mod workflow;
