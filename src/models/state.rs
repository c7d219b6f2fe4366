//! Workflow stage enumeration.

use serde::{Deserialize, Serialize};

/// Represents the stage an offboarding workflow is in.
///
/// Exactly one stage is active at a time. The workflow only advances
/// `DataEntry` → `Clearance` → `Completed` under validation gates, and may
/// reset fully back to `DataEntry` via a restart, discarding all clearance
/// progress.
///
/// # Example
///
/// ```
/// use offboarding_engine::models::WorkflowState;
///
/// let state = WorkflowState::DataEntry;
/// assert_eq!(format!("{:?}", state), "DataEntry");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Resignation details are being captured and validated.
    DataEntry,
    /// Department sign-offs are being collected on the clearance checklist.
    Clearance,
    /// Every clearance item is completed and signed; the record is locked.
    Completed,
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowState::DataEntry => write!(f, "DataEntry"),
            WorkflowState::Clearance => write!(f, "Clearance"),
            WorkflowState::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serialization() {
        assert_eq!(
            serde_json::to_string(&WorkflowState::DataEntry).unwrap(),
            "\"data_entry\""
        );
        assert_eq!(
            serde_json::to_string(&WorkflowState::Clearance).unwrap(),
            "\"clearance\""
        );
        assert_eq!(
            serde_json::to_string(&WorkflowState::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn test_state_display() {
        assert_eq!(WorkflowState::DataEntry.to_string(), "DataEntry");
        assert_eq!(WorkflowState::Clearance.to_string(), "Clearance");
        assert_eq!(WorkflowState::Completed.to_string(), "Completed");
    }
}
