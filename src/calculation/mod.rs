//! Calculation logic for the Offboarding Engine.
//!
//! This module contains the pure calculation functions: calendar
//! date-duration arithmetic, service-duration derivation, the tiered
//! end-of-service benefit, unused-vacation compensation, and the combined
//! entitlement result. Every function here is total over its declared
//! domain and free of I/O.

mod duration;
mod end_of_service;
mod entitlement;
mod vacation;

pub use duration::{
    compute_service_duration, duration_label, whole_days_mod30, whole_months,
    whole_months_mod12, whole_years,
};
pub use end_of_service::{
    compute_end_of_service_benefit, full_rate_threshold_years, minimum_qualifying_years,
};
pub use entitlement::{compute_entitlement, compute_total_entitlement};
pub use vacation::{compute_vacation_compensation, days_per_month};
