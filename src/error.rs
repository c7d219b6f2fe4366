//! Error types for the Offboarding Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all recoverable conditions in the offboarding workflow. None of them
//! is fatal: every error corresponds to a rejected user action, and the
//! workflow state is left unchanged when one is returned.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{Field, WorkflowState};

/// Per-field validation messages produced by a failed data-entry submission.
///
/// Keyed by [`Field`] so the presentation layer can attach each message to
/// the input it belongs to. A `BTreeMap` keeps the iteration order stable.
pub type ValidationErrors = BTreeMap<Field, String>;

/// The main error type for the Offboarding Engine.
///
/// All fallible operations on the workflow return this error type.
///
/// # Example
///
/// ```
/// use offboarding_engine::error::WorkflowError;
///
/// let error = WorkflowError::ItemNotFound {
///     id: "parking-pass".to_string(),
/// };
/// assert_eq!(error.to_string(), "Clearance item not found: parking-pass");
/// ```
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Data-entry submission failed field validation.
    ///
    /// The contained map has one message per offending field; the workflow
    /// also retains a copy so the presentation layer can re-read it.
    #[error("Data entry rejected: {} field(s) failed validation", errors.len())]
    Validation {
        /// The field-to-message map describing what was rejected.
        errors: ValidationErrors,
    },

    /// A clearance item id did not match any entry in the five-item catalog.
    #[error("Clearance item not found: {id}")]
    ItemNotFound {
        /// The id that was not found.
        id: String,
    },

    /// A checklist mutation arrived while the checklist is not open.
    ///
    /// The checklist accepts mutations only during the `Clearance` stage;
    /// before data entry is submitted there is nothing to sign, and once
    /// the workflow is `Completed` the sign-offs are locked.
    #[error("Clearance checklist is not open in the {state} stage")]
    ChecklistInactive {
        /// The stage the workflow was in when the mutation arrived.
        state: WorkflowState,
    },

    /// A field update arrived after the workflow completed.
    ///
    /// The employee record is mutable only until the workflow reaches
    /// `Completed`; after that, only `restart` can change it.
    #[error("Employee record is locked in the {state} stage")]
    RecordLocked {
        /// The stage the workflow was in when the update arrived.
        state: WorkflowState,
    },

    /// Data entry was submitted outside the data-entry stage.
    #[error("Data entry already submitted; workflow is in the {state} stage")]
    AlreadySubmitted {
        /// The stage the workflow was in when the submission arrived.
        state: WorkflowState,
    },
}

/// A type alias for Results that return WorkflowError.
pub type WorkflowResult<T> = Result<T, WorkflowError>;
