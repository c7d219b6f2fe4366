//! Department clearance checklist.
//!
//! The checklist holds a fixed catalog of exactly five sign-off items, each
//! bound permanently to one department. Items are created once and mutated
//! in place; they are never reordered, added, or removed, and the insertion
//! order is also the display and print order.

use serde::{Deserialize, Serialize};

use crate::error::{WorkflowError, WorkflowResult};

/// The fixed item catalog: id, title, responsible department.
const CATALOG: [(&str, &str, &str); 5] = [
    ("it-equipment", "Return all IT equipment", "Information Technology"),
    ("access-cards", "Hand over access cards and keys", "Security"),
    (
        "financial-clearance",
        "Settle all outstanding financial dues",
        "Finance",
    ),
    (
        "hr-documents",
        "Sign all Human Resources documents",
        "Human Resources",
    ),
    ("property", "Return all company property", "Administration"),
];

/// One department sign-off required before offboarding can complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearanceItem {
    /// Stable unique id, e.g. `"it-equipment"`.
    pub id: String,
    /// What the employee must hand over or settle.
    pub title: String,
    /// The department responsible for signing the item off.
    pub department: String,
    /// Whether the item has been marked done.
    pub completed: bool,
    /// The responsible officer's signature; empty until signed.
    pub signature: String,
    /// Optional reviewer notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl ClearanceItem {
    /// Returns true if the item is both marked done and signed.
    pub fn is_cleared(&self) -> bool {
        self.completed && !self.signature.is_empty()
    }
}

/// The ordered five-item clearance checklist.
///
/// # Example
///
/// ```
/// use offboarding_engine::checklist::ClearanceChecklist;
///
/// let mut checklist = ClearanceChecklist::new();
/// assert_eq!(checklist.items().len(), 5);
/// assert!(!checklist.is_complete());
///
/// checklist.toggle("it-equipment", true).unwrap();
/// checklist.set_signature("it-equipment", "R. Hassan").unwrap();
/// assert!(checklist.items()[0].is_cleared());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearanceChecklist {
    items: Vec<ClearanceItem>,
}

impl ClearanceChecklist {
    /// Creates a checklist with the default catalog, all items unsigned.
    pub fn new() -> Self {
        ClearanceChecklist {
            items: CATALOG
                .iter()
                .map(|(id, title, department)| ClearanceItem {
                    id: (*id).to_string(),
                    title: (*title).to_string(),
                    department: (*department).to_string(),
                    completed: false,
                    signature: String::new(),
                    comments: None,
                })
                .collect(),
        }
    }

    /// The items in their fixed catalog order.
    pub fn items(&self) -> &[ClearanceItem] {
        &self.items
    }

    /// Marks one item done or not done.
    ///
    /// Returns [`WorkflowError::ItemNotFound`] for an unknown id; the
    /// catalog is never altered by a failed lookup.
    pub fn toggle(&mut self, id: &str, completed: bool) -> WorkflowResult<()> {
        self.find_mut(id)?.completed = completed;
        Ok(())
    }

    /// Records the responsible officer's signature on one item.
    pub fn set_signature(&mut self, id: &str, signature: &str) -> WorkflowResult<()> {
        self.find_mut(id)?.signature = signature.to_string();
        Ok(())
    }

    /// Attaches reviewer notes to one item, or clears them with `None`.
    pub fn set_comments(&mut self, id: &str, comments: Option<String>) -> WorkflowResult<()> {
        self.find_mut(id)?.comments = comments;
        Ok(())
    }

    /// Returns true when every item is marked done and carries a signature.
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(ClearanceItem::is_cleared)
    }

    /// Resets every item to not done, unsigned, and without comments.
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.completed = false;
            item.signature.clear();
            item.comments = None;
        }
    }

    fn find_mut(&mut self, id: &str) -> WorkflowResult<&mut ClearanceItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| WorkflowError::ItemNotFound { id: id.to_string() })
    }
}

impl Default for ClearanceChecklist {
    fn default() -> Self {
        ClearanceChecklist::new()
    }
}
