//! Derived-value calculation engine
//!
//! Every report type shares the same handful of calculations: temperature
//! correction of insulation-resistance readings, dielectric-absorption and
//! polarization-index ratios, percentage deviations, and threshold
//! classification. This module is the single home for that arithmetic; the
//! report types in [`crate::reports`] only wire fields to it.
//!
//! All functions here are pure and infallible. Unparseable input, zero
//! denominators, and out-of-range temperatures degrade to empty or neutral
//! output rather than errors; the surrounding report simply renders the
//! blank.

pub mod accept;
pub mod derived;
pub mod reading;
pub mod tcf;

pub use accept::{
    absorption_flag, within_limit, Acceptability, Assessment, ABSORPTION_THRESHOLD,
    CONTACT_RESISTANCE_LIMIT, RESISTANCE_BALANCE_LIMIT, TURNS_RATIO_LIMIT,
};
pub use derived::{corrected, deviation, ratio, turns_ratio_deviation};
pub use reading::Reading;
pub use tcf::{correction_factor, TemperatureReading};
