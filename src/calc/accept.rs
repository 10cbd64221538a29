//! Threshold classification of derived values
//!
//! A classifier only ever sees already-formatted derived strings. A
//! non-numeric contributor (sentinel, blank) makes the result indeterminate
//! rather than a forced failure; callers skip rows with no entered readings
//! so untouched template rows do not blank the whole flag.

use serde::{Deserialize, Serialize};

use crate::calc::reading::Reading;

/// Dielectric absorption and polarization index must exceed this ratio
pub const ABSORPTION_THRESHOLD: f64 = 1.0;

/// Winding resistance balance band, percent deviation from the reference phase
pub const RESISTANCE_BALANCE_LIMIT: f64 = 3.0;

/// Turns-ratio deviation band, percent
pub const TURNS_RATIO_LIMIT: f64 = 0.5;

/// Contact resistance band, percent deviation from the lowest pole
pub const CONTACT_RESISTANCE_LIMIT: f64 = 50.0;

/// Yes/No acceptability for DA/PI ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acceptability {
    Yes,
    No,
    /// Not computable from the given readings; rendered blank
    Indeterminate,
}

impl std::fmt::Display for Acceptability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Acceptability::Yes => write!(f, "Yes"),
            Acceptability::No => write!(f, "No"),
            Acceptability::Indeterminate => write!(f, ""),
        }
    }
}

/// Pass/Fail assessment for deviation bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    Pass,
    Fail,
    /// Not computable from the given readings; rendered blank
    Indeterminate,
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Assessment::Pass => write!(f, "Pass"),
            Assessment::Fail => write!(f, "Fail"),
            Assessment::Indeterminate => write!(f, ""),
        }
    }
}

/// Classify a set of DA/PI ratio strings against [`ABSORPTION_THRESHOLD`]
///
/// `Yes` iff every contributing ratio is numeric and strictly above the
/// threshold. `No` iff all are numeric and at least one is at or below it.
/// Any non-numeric contributor, or no contributors at all, is indeterminate.
pub fn absorption_flag<'a, I>(ratios: I) -> Acceptability
where
    I: IntoIterator<Item = &'a str>,
{
    let mut all_above = true;
    let mut any = false;

    for raw in ratios {
        any = true;
        match Reading::parse(raw).as_numeric() {
            Some(v) => {
                if v <= ABSORPTION_THRESHOLD {
                    all_above = false;
                }
            }
            None => return Acceptability::Indeterminate,
        }
    }

    if !any {
        return Acceptability::Indeterminate;
    }
    if all_above {
        Acceptability::Yes
    } else {
        Acceptability::No
    }
}

/// Classify a set of deviation strings against a symmetric percent band
///
/// `Pass` iff every contributing deviation is numeric with magnitude at or
/// below `limit_percent`. `Fail` iff all are numeric and at least one is out
/// of band. Any non-numeric contributor, or no contributors, is
/// indeterminate.
pub fn within_limit<'a, I>(deviations: I, limit_percent: f64) -> Assessment
where
    I: IntoIterator<Item = &'a str>,
{
    let mut all_within = true;
    let mut any = false;

    for raw in deviations {
        any = true;
        match Reading::parse(raw).as_numeric() {
            Some(v) => {
                if v.abs() > limit_percent {
                    all_within = false;
                }
            }
            None => return Assessment::Indeterminate,
        }
    }

    if !any {
        return Assessment::Indeterminate;
    }
    if all_within {
        Assessment::Pass
    } else {
        Assessment::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorption_all_above() {
        assert_eq!(absorption_flag(["1.50", "1.33"]), Acceptability::Yes);
    }

    #[test]
    fn test_absorption_at_threshold_is_no() {
        // strictly greater than 1.0 is required
        assert_eq!(absorption_flag(["1.00", "1.50"]), Acceptability::No);
        assert_eq!(absorption_flag(["0.90"]), Acceptability::No);
    }

    #[test]
    fn test_absorption_non_numeric_is_indeterminate() {
        assert_eq!(absorption_flag(["", "1.50"]), Acceptability::Indeterminate);
        assert_eq!(absorption_flag([] as [&str; 0]), Acceptability::Indeterminate);
    }

    #[test]
    fn test_absorption_display() {
        assert_eq!(Acceptability::Yes.to_string(), "Yes");
        assert_eq!(Acceptability::No.to_string(), "No");
        assert_eq!(Acceptability::Indeterminate.to_string(), "");
    }

    #[test]
    fn test_within_limit_pass() {
        // -0.50% is inside the +/-0.5% turns-ratio band
        assert_eq!(within_limit(["-0.50"], TURNS_RATIO_LIMIT), Assessment::Pass);
        assert_eq!(
            within_limit(["2.99", "-3.00"], RESISTANCE_BALANCE_LIMIT),
            Assessment::Pass
        );
    }

    #[test]
    fn test_within_limit_fail() {
        assert_eq!(within_limit(["0.51"], TURNS_RATIO_LIMIT), Assessment::Fail);
        assert_eq!(
            within_limit(["1.00", "-3.01"], RESISTANCE_BALANCE_LIMIT),
            Assessment::Fail
        );
    }

    #[test]
    fn test_within_limit_indeterminate() {
        assert_eq!(
            within_limit(["", "1.00"], RESISTANCE_BALANCE_LIMIT),
            Assessment::Indeterminate
        );
        assert_eq!(
            within_limit([] as [&str; 0], TURNS_RATIO_LIMIT),
            Assessment::Indeterminate
        );
    }
}
