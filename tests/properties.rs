//! Property-based tests for the calculation layer.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use offboarding_engine::calculation::{
    compute_end_of_service_benefit, compute_service_duration, compute_vacation_compensation,
    whole_months, whole_months_mod12, whole_years,
};

/// Any date between 1990-01-01 and ~2060 as an offset in days.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    (0i64..25_000).prop_map(move |days| epoch + Duration::days(days))
}

/// An ordered (start, end) pair with end no more than ~68 years out.
fn arb_date_pair() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (arb_date(), 0i64..25_000)
        .prop_map(|(start, span)| (start, start + Duration::days(span)))
}

proptest! {
    #[test]
    fn months_residue_is_always_under_twelve((start, end) in arb_date_pair()) {
        let residue = whole_months_mod12(start, end);
        prop_assert!((0..=11).contains(&residue));
    }

    #[test]
    fn year_count_and_month_residue_agree((start, end) in arb_date_pair()) {
        // Month-end compensation applies to both diffs, so they never
        // disagree about where a year boundary falls.
        prop_assert_eq!(
            whole_years(start, end) * 12 + whole_months_mod12(start, end),
            whole_months(start, end)
        );
    }

    #[test]
    fn decimal_years_matches_year_month_pair((start, end) in arb_date_pair()) {
        let duration = compute_service_duration(Some(start), Some(end));
        let expected = Decimal::from(duration.years)
            + Decimal::from(duration.months) / Decimal::from(12);
        prop_assert_eq!(duration.decimal_years(), expected);
    }

    #[test]
    fn same_day_duration_is_zero(d in arb_date()) {
        let duration = compute_service_duration(Some(d), Some(d));
        prop_assert_eq!(duration.years, 0);
        prop_assert_eq!(duration.months, 0);
        prop_assert_eq!(duration.decimal_years(), Decimal::ZERO);
    }

    #[test]
    fn benefit_is_monotonic_in_salary(
        salary in 0i64..1_000_000,
        raise in 1i64..100_000,
        twelfths in 24u32..600,
    ) {
        // Service of at least two years, in whole twelfths of a year.
        let years = Decimal::from(twelfths) / Decimal::from(12);
        let low = compute_end_of_service_benefit(years, Decimal::from(salary));
        let high = compute_end_of_service_benefit(years, Decimal::from(salary + raise));
        prop_assert!(high >= low);
    }

    #[test]
    fn benefit_is_zero_below_two_years(
        salary in 0i64..1_000_000,
        twelfths in 0u32..24,
    ) {
        let years = Decimal::from(twelfths) / Decimal::from(12);
        prop_assert_eq!(
            compute_end_of_service_benefit(years, Decimal::from(salary)),
            Decimal::ZERO
        );
    }

    #[test]
    fn vacation_compensation_is_nonnegative(
        salary in 0i64..1_000_000,
        days in 0i64..365,
    ) {
        let pay = compute_vacation_compensation(Decimal::from(salary), Decimal::from(days));
        prop_assert!(pay >= Decimal::ZERO);
    }
}
