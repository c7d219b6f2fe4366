//! Unused-vacation compensation calculation.

use rust_decimal::Decimal;

/// The fixed month length used to derive a daily rate: 30 days.
///
/// The same approximation underlies the day residue in the duration math.
pub fn days_per_month() -> Decimal {
    Decimal::from(30)
}

/// Computes compensation for unused vacation days.
///
/// The daily rate is `salary / 30`; the compensation is the daily rate
/// multiplied by the number of unused days.
///
/// # Example
///
/// ```
/// use offboarding_engine::calculation::compute_vacation_compensation;
/// use rust_decimal::Decimal;
///
/// let pay = compute_vacation_compensation(Decimal::from(6000), Decimal::from(15));
/// assert_eq!(pay, Decimal::from(3000));
/// ```
pub fn compute_vacation_compensation(salary: Decimal, vacation_days: Decimal) -> Decimal {
    let daily_rate = salary / days_per_month();
    daily_rate * vacation_days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_spec_example() {
        // salary=6000, 15 days -> (6000/30)*15 = 3000
        assert_eq!(compute_vacation_compensation(dec(6000), dec(15)), dec(3000));
    }

    #[test]
    fn test_zero_days_pays_nothing() {
        assert_eq!(
            compute_vacation_compensation(dec(9000), Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_fractional_days_are_paid_pro_rata() {
        // (3000/30) * 2.5 = 250
        assert_eq!(
            compute_vacation_compensation(dec(3000), Decimal::new(25, 1)),
            dec(250)
        );
    }

    #[test]
    fn test_compensation_scales_with_salary() {
        let days = dec(10);
        assert!(
            compute_vacation_compensation(dec(6001), days)
                > compute_vacation_compensation(dec(6000), days)
        );
    }
}
