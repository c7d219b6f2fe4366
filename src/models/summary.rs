//! Read-only workflow snapshot for the presentation layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checklist::ClearanceItem;

use super::{EmployeeRecord, ServiceDuration, WorkflowState};

/// A read-only snapshot of an offboarding workflow.
///
/// Produced on demand for printing, sharing, and display; every field is a
/// copy, so holding a summary never blocks further workflow mutations and a
/// stale summary never leaks later edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffboardingSummary {
    /// The id of the workflow instance the snapshot was taken from.
    pub workflow_id: Uuid,
    /// The stage the workflow was in when the snapshot was taken.
    pub state: WorkflowState,
    /// A copy of the employee record.
    pub record: EmployeeRecord,
    /// The clearance items in catalog order.
    pub items: Vec<ClearanceItem>,
    /// Service duration derived from the record's own date pair.
    pub service_duration: ServiceDuration,
    /// Human-readable duration, e.g. `"2 years 3 months 12 days"`; absent
    /// when either record date is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_duration_label: Option<String>,
}
