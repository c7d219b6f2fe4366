//! Entitlement composition.
//!
//! Ties the end-of-service benefit and the vacation compensation together
//! into a single [`EntitlementResult`]. Pure and total: the same inputs
//! always reproduce the same result, and no intermediate is cached.

use rust_decimal::Decimal;

use crate::models::{EntitlementResult, FinancialInputs, ServiceDuration};

use super::end_of_service::compute_end_of_service_benefit;
use super::vacation::compute_vacation_compensation;

/// Sums an end-of-service benefit and a vacation compensation.
pub fn compute_total_entitlement(benefit: Decimal, vacation_compensation: Decimal) -> Decimal {
    benefit + vacation_compensation
}

/// Computes the full entitlement for a service duration and set of inputs.
///
/// # Example
///
/// ```
/// use offboarding_engine::calculation::compute_entitlement;
/// use offboarding_engine::models::{FinancialInputs, ServiceDuration};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let inputs = FinancialInputs::new(
///     Decimal::from(10000),
///     NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(),
///     Decimal::from(0),
/// );
/// let result = compute_entitlement(&ServiceDuration::new(7, 0), &inputs);
/// assert_eq!(result.end_of_service_benefit, Decimal::from(70000));
/// assert_eq!(result.total, Decimal::from(70000));
/// ```
pub fn compute_entitlement(
    duration: &ServiceDuration,
    inputs: &FinancialInputs,
) -> EntitlementResult {
    let end_of_service_benefit =
        compute_end_of_service_benefit(duration.decimal_years(), inputs.salary);
    let vacation_compensation =
        compute_vacation_compensation(inputs.salary, inputs.vacation_days);

    EntitlementResult {
        end_of_service_benefit,
        vacation_compensation,
        total: compute_total_entitlement(end_of_service_benefit, vacation_compensation),
    }
}
