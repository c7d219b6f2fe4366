//! Employee record model and field-level update types.
//!
//! This module defines the mutable record an offboarding workflow owns,
//! the typed field identifiers used for validation error maps, and the
//! data-entry form the first workflow stage validates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;

/// Identifies one field of the employee record.
///
/// Used as the key of validation error maps so the presentation layer can
/// attach each message to the input it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The employee's full name.
    Name,
    /// The employee's job title.
    JobTitle,
    /// The date the employee started service.
    StartDate,
    /// The date the resignation takes effect.
    ResignationDate,
    /// The free-text resignation reason.
    Reason,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::JobTitle => write!(f, "job_title"),
            Field::StartDate => write!(f, "start_date"),
            Field::ResignationDate => write!(f, "resignation_date"),
            Field::Reason => write!(f, "reason"),
        }
    }
}

/// A single-field update to the employee record.
///
/// Each variant carries the new value for exactly one field, so applying an
/// update is an exhaustive match with no stringly-typed field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldUpdate {
    /// Replace the employee's full name.
    Name(String),
    /// Replace the employee's job title.
    JobTitle(String),
    /// Set or clear the service start date.
    StartDate(Option<NaiveDate>),
    /// Set or clear the resignation date.
    ResignationDate(Option<NaiveDate>),
    /// Replace the resignation reason.
    Reason(String),
}

impl FieldUpdate {
    /// Returns the [`Field`] this update targets.
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Name(_) => Field::Name,
            FieldUpdate::JobTitle(_) => Field::JobTitle,
            FieldUpdate::StartDate(_) => Field::StartDate,
            FieldUpdate::ResignationDate(_) => Field::ResignationDate,
            FieldUpdate::Reason(_) => Field::Reason,
        }
    }
}

/// The employee record owned by an offboarding workflow.
///
/// Mutable until the workflow reaches the `Completed` stage. The start date
/// is optional and not required for submission; the entitlement calculator
/// accepts its own service-start date independently of this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's full name.
    pub name: String,
    /// The employee's job title.
    pub job_title: String,
    /// The date the employee started service, if provided.
    pub start_date: Option<NaiveDate>,
    /// The date the resignation takes effect, if provided.
    pub resignation_date: Option<NaiveDate>,
    /// Free-text resignation reason; optional, may stay empty.
    pub reason: String,
}

impl EmployeeRecord {
    /// Applies a single-field update in place.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.name = value,
            FieldUpdate::JobTitle(value) => self.job_title = value,
            FieldUpdate::StartDate(value) => self.start_date = value,
            FieldUpdate::ResignationDate(value) => self.resignation_date = value,
            FieldUpdate::Reason(value) => self.reason = value,
        }
    }
}

/// The fields submitted at the data-entry stage.
///
/// # Example
///
/// ```
/// use offboarding_engine::models::DataEntryForm;
/// use chrono::NaiveDate;
///
/// let form = DataEntryForm {
///     name: "Ali".to_string(),
///     job_title: "Engineer".to_string(),
///     start_date: None,
///     resignation_date: NaiveDate::from_ymd_opt(2024, 6, 1),
///     reason: String::new(),
/// };
/// assert!(form.validate().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataEntryForm {
    /// The employee's full name; required, whitespace-only is rejected.
    pub name: String,
    /// The employee's job title; required, whitespace-only is rejected.
    pub job_title: String,
    /// The service start date; optional at submission.
    pub start_date: Option<NaiveDate>,
    /// The resignation date; required.
    pub resignation_date: Option<NaiveDate>,
    /// Free-text resignation reason; optional.
    pub reason: String,
}

impl DataEntryForm {
    /// Validates the form, returning one message per offending field.
    ///
    /// An empty map means the form is valid. Note that the resignation date
    /// is not checked against the start date; the workflow deliberately
    /// accepts a resignation date earlier than the start date.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required".to_string());
        }

        if self.job_title.trim().is_empty() {
            errors.insert(Field::JobTitle, "Job title is required".to_string());
        }

        if self.resignation_date.is_none() {
            errors.insert(
                Field::ResignationDate,
                "Resignation date is required".to_string(),
            );
        }

        errors
    }

    /// Consumes the form, producing the employee record it describes.
    pub fn into_record(self) -> EmployeeRecord {
        EmployeeRecord {
            name: self.name,
            job_title: self.job_title,
            start_date: self.start_date,
            resignation_date: self.resignation_date,
            reason: self.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> DataEntryForm {
        DataEntryForm {
            name: "Ali".to_string(),
            job_title: "Engineer".to_string(),
            start_date: None,
            resignation_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            reason: String::new(),
        }
    }

    #[test]
    fn test_valid_form_produces_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let errors = form.validate();
        assert_eq!(errors.get(&Field::Name).unwrap(), "Name is required");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_blank_job_title_is_rejected() {
        let mut form = valid_form();
        form.job_title = String::new();
        let errors = form.validate();
        assert_eq!(
            errors.get(&Field::JobTitle).unwrap(),
            "Job title is required"
        );
    }

    #[test]
    fn test_missing_resignation_date_is_rejected() {
        let mut form = valid_form();
        form.resignation_date = None;
        let errors = form.validate();
        assert_eq!(
            errors.get(&Field::ResignationDate).unwrap(),
            "Resignation date is required"
        );
    }

    #[test]
    fn test_all_blank_reports_every_required_field() {
        let form = DataEntryForm::default();
        let errors = form.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(&Field::Name));
        assert!(errors.contains_key(&Field::JobTitle));
        assert!(errors.contains_key(&Field::ResignationDate));
    }

    #[test]
    fn test_start_date_is_not_required() {
        let mut form = valid_form();
        form.start_date = None;
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_resignation_before_start_is_accepted() {
        // The workflow imposes no ordering between the two dates.
        let mut form = valid_form();
        form.start_date = NaiveDate::from_ymd_opt(2025, 1, 1);
        form.resignation_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_apply_updates_single_field() {
        let mut record = EmployeeRecord::default();
        record.apply(FieldUpdate::Name("Ali".to_string()));
        assert_eq!(record.name, "Ali");
        assert_eq!(record.job_title, "");

        record.apply(FieldUpdate::ResignationDate(NaiveDate::from_ymd_opt(
            2024, 6, 1,
        )));
        assert_eq!(record.resignation_date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn test_field_update_reports_target_field() {
        assert_eq!(FieldUpdate::Name("x".to_string()).field(), Field::Name);
        assert_eq!(FieldUpdate::StartDate(None).field(), Field::StartDate);
        assert_eq!(
            FieldUpdate::Reason("moving on".to_string()).field(),
            Field::Reason
        );
    }

    #[test]
    fn test_record_round_trips_through_serde() {
        let record = valid_form().into_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_field_serialization() {
        assert_eq!(serde_json::to_string(&Field::JobTitle).unwrap(), "\"job_title\"");
        assert_eq!(
            serde_json::to_string(&Field::ResignationDate).unwrap(),
            "\"resignation_date\""
        );
    }
}
