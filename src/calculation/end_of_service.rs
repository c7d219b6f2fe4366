//! End-of-service benefit calculation.
//!
//! This module implements the tiered severance policy: no benefit below two
//! years of service, half a month's salary per year between two and five
//! years, and a full month's salary per year once five years are exceeded.

use rust_decimal::Decimal;

/// Service length below which no end-of-service benefit accrues: 2 years.
pub fn minimum_qualifying_years() -> Decimal {
    Decimal::TWO
}

/// Service length beyond which the full-rate tier applies: 5 years.
pub fn full_rate_threshold_years() -> Decimal {
    Decimal::from(5)
}

/// Computes the end-of-service benefit for a service length and salary.
///
/// # Policy
///
/// * Under 2 years: no entitlement.
/// * 2 to 5 years inclusive: half a month's salary per year of service,
///   `(salary / 2) * decimal_years`.
/// * Over 5 years: a full month's salary per year applied uniformly,
///   `5 * salary + (decimal_years - 5) * salary` — once the five-year
///   threshold is exceeded, the first five years are also paid at the full
///   rate.
///
/// The tier switch produces a discontinuity at exactly five years: 5.0
/// years pays `2.5 * salary` (half-rate tier), while any service beyond it
/// pays more than `5 * salary`. This is the encoded business rule; callers
/// must not smooth it over.
///
/// # Example
///
/// ```
/// use offboarding_engine::calculation::compute_end_of_service_benefit;
/// use rust_decimal::Decimal;
///
/// let benefit = compute_end_of_service_benefit(Decimal::from(3), Decimal::from(10000));
/// assert_eq!(benefit, Decimal::from(15000));
/// ```
pub fn compute_end_of_service_benefit(decimal_years: Decimal, salary: Decimal) -> Decimal {
    if decimal_years < minimum_qualifying_years() {
        Decimal::ZERO
    } else if decimal_years <= full_rate_threshold_years() {
        salary / Decimal::TWO * decimal_years
    } else {
        let threshold = full_rate_threshold_years();
        threshold * salary + (decimal_years - threshold) * salary
    }
}
