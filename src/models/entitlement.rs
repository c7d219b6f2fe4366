//! Service duration and financial entitlement models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Elapsed service expressed as whole years and residual whole months.
///
/// The decimal-year figure the benefit tiers are keyed on is derived via
/// [`ServiceDuration::decimal_years`] and is never stored, so it can not
/// drift from the year/month pair.
///
/// # Example
///
/// ```
/// use offboarding_engine::models::ServiceDuration;
/// use rust_decimal::Decimal;
///
/// let duration = ServiceDuration::new(3, 6);
/// assert_eq!(duration.decimal_years(), Decimal::new(35, 1)); // 3.5
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDuration {
    /// Whole years of service.
    pub years: u32,
    /// Residual whole months of service, always in `0..=11`.
    pub months: u32,
}

impl ServiceDuration {
    /// A zero-length service duration.
    pub const ZERO: ServiceDuration = ServiceDuration { years: 0, months: 0 };

    /// Creates a duration from whole years and residual months.
    ///
    /// Debug builds assert `months < 12`; the residual is produced by the
    /// duration calculator and is a calendar month count, not a free value.
    pub fn new(years: u32, months: u32) -> Self {
        debug_assert!(months < 12, "residual months must be in 0..=11");
        ServiceDuration { years, months }
    }

    /// The combined decimal-year figure: `years + months / 12`.
    pub fn decimal_years(&self) -> Decimal {
        Decimal::from(self.years) + Decimal::from(self.months) / Decimal::from(12)
    }

    /// Returns true if no whole month of service has accrued.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0
    }
}

/// The inputs the entitlement calculator works from.
///
/// The start date here is deliberately independent of the employee record's
/// start date: the benefit calculation may use a different service-start
/// date than the one shown on the clearance summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// Monthly salary; never negative.
    pub salary: Decimal,
    /// The service-start date used for the benefit calculation.
    pub start_date: NaiveDate,
    /// Unused vacation days to compensate; never negative.
    pub vacation_days: Decimal,
}

impl FinancialInputs {
    /// Creates inputs, clamping negative salary or vacation days to zero.
    ///
    /// Upstream inputs arrive from free-form user entry; a negative or
    /// unparseable number is treated as zero rather than rejected.
    pub fn new(salary: Decimal, start_date: NaiveDate, vacation_days: Decimal) -> Self {
        FinancialInputs {
            salary: salary.max(Decimal::ZERO),
            start_date,
            vacation_days: vacation_days.max(Decimal::ZERO),
        }
    }

    /// Display defaults: zero salary and vacation days, start date one year
    /// before `today`.
    ///
    /// `today` is supplied by the caller; the engine itself never reads the
    /// clock, and the current date feeds display defaults only, never
    /// decision logic.
    pub fn defaults_from(today: NaiveDate) -> Self {
        let start_date = today
            .with_year(today.year() - 1)
            // Feb 29 has no previous-year counterpart
            .or_else(|| NaiveDate::from_ymd_opt(today.year() - 1, 2, 28))
            .unwrap_or(today);

        FinancialInputs {
            salary: Decimal::ZERO,
            start_date,
            vacation_days: Decimal::ZERO,
        }
    }
}

/// The monetary outcome of an entitlement calculation.
///
/// A pure function of [`ServiceDuration`] and [`FinancialInputs`];
/// recomputed on every request, never cached across input changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// The tiered end-of-service benefit.
    pub end_of_service_benefit: Decimal,
    /// Compensation for unused vacation days.
    pub vacation_compensation: Decimal,
    /// Sum of the benefit and the vacation compensation.
    pub total: Decimal,
}
