//! Calendar date-duration arithmetic.
//!
//! This module is the sole basis for all duration math in the engine: whole
//! years and whole months are calendar differences, not elapsed-second
//! divisions, and the day residue uses a fixed 30-day-month approximation.
//! All callers pass `start <= end`; the service-duration derivation clamps a
//! reversed pair to zero before reaching these helpers.

use chrono::{Datelike, NaiveDate};

use crate::models::ServiceDuration;

/// Returns the number of whole calendar years from `start` to `end`.
///
/// A year counts only once the anniversary of `start` has been reached.
///
/// # Example
///
/// ```
/// use offboarding_engine::calculation::whole_years;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2023, 6, 14).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
/// assert_eq!(whole_years(start, day_before), 2);
/// assert_eq!(whole_years(start, anniversary), 3);
/// ```
pub fn whole_years(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    if end.month() < start.month()
        || (end.month() == start.month() && !day_of_month_reached(start, end))
    {
        years -= 1;
    }
    years
}

/// Returns the number of whole calendar months from `start` to `end`.
///
/// A month counts once the day-of-month of `start` has been reached in the
/// target month. The last day of a shorter month counts as reached: a month
/// begun on Jan 31 is whole on Feb 28 (or Feb 29 in a leap year), since no
/// 31st exists to reach.
pub fn whole_months(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if !day_of_month_reached(start, end) {
        months -= 1;
    }
    months
}

/// Whether `end` has reached `start`'s day-of-month.
///
/// Shared by the year and month diffs so the year count and the month
/// residue always agree: `whole_years * 12 + whole_months_mod12` equals
/// `whole_months` for every ordered date pair.
fn day_of_month_reached(start: NaiveDate, end: NaiveDate) -> bool {
    end.day() >= start.day() || is_last_day_of_month(end)
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

/// Returns the whole-month residue after full years: `whole_months % 12`.
///
/// For `start <= end` the result is always in `0..=11`.
pub fn whole_months_mod12(start: NaiveDate, end: NaiveDate) -> i32 {
    whole_months(start, end) % 12
}

/// Returns the day residue after full 30-day months: elapsed days `% 30`.
///
/// The 30-day divisor is a deliberate approximation, not an exact calendar
/// day-of-month subtraction; it matches the daily-rate convention used by
/// the vacation compensation calculation.
pub fn whole_days_mod30(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() % 30
}

/// Derives the service duration for an optional date pair.
///
/// Returns [`ServiceDuration::ZERO`] when either date is unset, and also
/// when `end` precedes `start` — the workflow deliberately does not reject
/// a resignation date before the service start, and a reversed range earns
/// no service.
///
/// # Example
///
/// ```
/// use offboarding_engine::calculation::compute_service_duration;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2021, 3, 1);
/// let end = NaiveDate::from_ymd_opt(2024, 6, 15);
/// let duration = compute_service_duration(start, end);
/// assert_eq!((duration.years, duration.months), (3, 3));
/// ```
pub fn compute_service_duration(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ServiceDuration {
    let (Some(start), Some(end)) = (start, end) else {
        return ServiceDuration::ZERO;
    };
    if end < start {
        return ServiceDuration::ZERO;
    }

    ServiceDuration::new(
        whole_years(start, end) as u32,
        whole_months_mod12(start, end) as u32,
    )
}

/// Formats a duration as `"X years Y months Z days"` for display.
///
/// Returns `None` when either date is unset. Leading zero units are elided:
/// years appear only when non-zero, months whenever years are zero or the
/// residue is non-zero, and days whenever non-zero or everything is zero.
pub fn duration_label(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<String> {
    let (start, end) = (start?, end?);
    if end < start {
        return None;
    }

    let years = whole_years(start, end);
    let months = whole_months_mod12(start, end);
    let days = whole_days_mod30(start, end);

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} year{}", years, plural(years as i64)));
    }
    if months > 0 || years == 0 {
        parts.push(format!("{} month{}", months, plural(months as i64)));
    }
    if days > 0 || (years == 0 && months == 0) {
        parts.push(format!("{} day{}", days, plural(days)));
    }

    Some(parts.join(" "))
}

fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}
