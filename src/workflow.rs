//! The offboarding workflow state machine.
//!
//! [`OffboardingWorkflow`] owns the employee record and the clearance
//! checklist, drives the stage transitions (`DataEntry` → `Clearance` →
//! `Completed`, with a restart back to `DataEntry` from anywhere), invokes
//! validation, and composes the duration and entitlement calculators.
//!
//! Every operation runs to completion against the single in-memory instance
//! before the next is accepted; there is no interleaving, no I/O, and no
//! cached derived state.

use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{compute_entitlement, compute_service_duration, duration_label};
use crate::checklist::ClearanceChecklist;
use crate::error::{ValidationErrors, WorkflowError, WorkflowResult};
use crate::models::{
    DataEntryForm, EmployeeRecord, EntitlementResult, FieldUpdate, FinancialInputs,
    OffboardingSummary, ServiceDuration, WorkflowState,
};

/// A single employee's offboarding workflow.
///
/// # Example
///
/// ```
/// use offboarding_engine::models::{DataEntryForm, WorkflowState};
/// use offboarding_engine::workflow::OffboardingWorkflow;
/// use chrono::NaiveDate;
///
/// let mut workflow = OffboardingWorkflow::new();
/// workflow
///     .submit_data_entry(DataEntryForm {
///         name: "Ali".to_string(),
///         job_title: "Engineer".to_string(),
///         start_date: None,
///         resignation_date: NaiveDate::from_ymd_opt(2024, 6, 1),
///         reason: String::new(),
///     })
///     .unwrap();
/// assert_eq!(workflow.state(), WorkflowState::Clearance);
/// ```
#[derive(Debug, Clone)]
pub struct OffboardingWorkflow {
    id: Uuid,
    state: WorkflowState,
    record: EmployeeRecord,
    validation_errors: ValidationErrors,
    checklist: ClearanceChecklist,
}

impl OffboardingWorkflow {
    /// Creates a workflow in the `DataEntry` stage with an empty record.
    pub fn new() -> Self {
        OffboardingWorkflow {
            id: Uuid::new_v4(),
            state: WorkflowState::DataEntry,
            record: EmployeeRecord::default(),
            validation_errors: ValidationErrors::new(),
            checklist: ClearanceChecklist::new(),
        }
    }

    /// The id of this workflow instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The current workflow stage.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// The live employee record.
    pub fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    /// The field messages from the most recent failed submission.
    ///
    /// Entries are cleared optimistically by [`update_field`] and wholesale
    /// by a successful submission or a restart.
    ///
    /// [`update_field`]: OffboardingWorkflow::update_field
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    /// The clearance checklist in catalog order.
    pub fn checklist(&self) -> &ClearanceChecklist {
        &self.checklist
    }

    /// Validates and stores the data-entry form, advancing to `Clearance`.
    ///
    /// On validation failure the field messages are returned (and retained
    /// for [`validation_errors`]), and the stage does not change; there is
    /// no partial transition. Outside the `DataEntry` stage the submission
    /// is rejected with [`WorkflowError::AlreadySubmitted`].
    ///
    /// Entering `Clearance` re-initializes the checklist catalog, so no
    /// sign-off outlives the submission that opened it.
    ///
    /// [`validation_errors`]: OffboardingWorkflow::validation_errors
    pub fn submit_data_entry(&mut self, form: DataEntryForm) -> WorkflowResult<()> {
        if self.state != WorkflowState::DataEntry {
            return Err(WorkflowError::AlreadySubmitted { state: self.state });
        }

        let errors = form.validate();
        if !errors.is_empty() {
            debug!(fields = errors.len(), "data entry rejected by validation");
            self.validation_errors = errors.clone();
            return Err(WorkflowError::Validation { errors });
        }

        self.record = form.into_record();
        self.validation_errors.clear();
        self.checklist = ClearanceChecklist::new();
        self.state = WorkflowState::Clearance;
        info!(workflow_id = %self.id, name = %self.record.name, "data entry accepted, entering clearance");
        Ok(())
    }

    /// Mutates one employee-record field.
    ///
    /// If the field previously carried a validation error, the error is
    /// cleared optimistically without re-running full validation. Rejected
    /// with [`WorkflowError::RecordLocked`] once the workflow is
    /// `Completed`.
    pub fn update_field(&mut self, update: FieldUpdate) -> WorkflowResult<()> {
        if self.state == WorkflowState::Completed {
            return Err(WorkflowError::RecordLocked { state: self.state });
        }

        self.validation_errors.remove(&update.field());
        self.record.apply(update);
        Ok(())
    }

    /// Marks one clearance item done or not done.
    ///
    /// Valid only during the `Clearance` stage; the checklist is locked
    /// once the workflow completes and does not exist before clearance is
    /// entered.
    pub fn toggle_clearance_item(&mut self, id: &str, completed: bool) -> WorkflowResult<()> {
        self.open_checklist()?.toggle(id, completed)
    }

    /// Records the responsible officer's signature on one clearance item.
    pub fn set_clearance_signature(&mut self, id: &str, signature: &str) -> WorkflowResult<()> {
        self.open_checklist()?.set_signature(id, signature)
    }

    /// Attaches reviewer notes to one clearance item.
    pub fn set_clearance_comments(
        &mut self,
        id: &str,
        comments: Option<String>,
    ) -> WorkflowResult<()> {
        self.open_checklist()?.set_comments(id, comments)
    }

    /// Returns true when every clearance item is done and signed.
    pub fn is_clearance_complete(&self) -> bool {
        self.checklist.is_complete()
    }

    /// Completes the clearance, advancing to `Completed`.
    ///
    /// Returns whether the transition happened. When any item is incomplete
    /// or unsigned, or the workflow is not in `Clearance`, the call is a
    /// no-op; callers are expected to gate the action on
    /// [`is_clearance_complete`] rather than handle a failure here.
    ///
    /// [`is_clearance_complete`]: OffboardingWorkflow::is_clearance_complete
    pub fn complete_clearance(&mut self) -> bool {
        if self.state != WorkflowState::Clearance || !self.checklist.is_complete() {
            return false;
        }

        self.state = WorkflowState::Completed;
        info!(workflow_id = %self.id, "clearance complete, offboarding finished");
        true
    }

    /// Resets the workflow to `DataEntry` from any stage.
    ///
    /// Clears the employee record and validation errors and reinitializes
    /// the checklist to the default five-item catalog, discarding all
    /// sign-off progress.
    pub fn restart(&mut self) {
        info!(workflow_id = %self.id, from = %self.state, "workflow restarted");
        self.state = WorkflowState::DataEntry;
        self.record = EmployeeRecord::default();
        self.validation_errors.clear();
        self.checklist = ClearanceChecklist::new();
    }

    /// Service duration derived from the record's own start and resignation
    /// dates. Recomputed on every call.
    pub fn service_duration(&self) -> ServiceDuration {
        compute_service_duration(self.record.start_date, self.record.resignation_date)
    }

    /// Computes the entitlement for the given financial inputs.
    ///
    /// The service length runs from `inputs.start_date` — not the record's
    /// start date — to the record's resignation date, so the calculator can
    /// be driven with a service-start override.
    pub fn entitlement(&self, inputs: &FinancialInputs) -> EntitlementResult {
        let duration =
            compute_service_duration(Some(inputs.start_date), self.record.resignation_date);
        compute_entitlement(&duration, inputs)
    }

    /// Takes a read-only snapshot for the presentation layer.
    pub fn summary(&self) -> OffboardingSummary {
        OffboardingSummary {
            workflow_id: self.id,
            state: self.state,
            record: self.record.clone(),
            items: self.checklist.items().to_vec(),
            service_duration: self.service_duration(),
            service_duration_label: duration_label(
                self.record.start_date,
                self.record.resignation_date,
            ),
        }
    }

    fn open_checklist(&mut self) -> WorkflowResult<&mut ClearanceChecklist> {
        if self.state != WorkflowState::Clearance {
            return Err(WorkflowError::ChecklistInactive { state: self.state });
        }
        Ok(&mut self.checklist)
    }
}

impl Default for OffboardingWorkflow {
    fn default() -> Self {
        OffboardingWorkflow::new()
    }
}
