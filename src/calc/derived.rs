//! Corrected values, ratios, and deviation percentages
//!
//! Output is always a display-ready string: two-decimal numeric, a sentinel
//! passed through unchanged, or empty when the value is not computable.

use crate::calc::reading::Reading;

/// Project a raw reading through a correction factor
///
/// Sentinels (">2000", "N/A") pass through unchanged; blank or unparseable
/// input yields an empty string.
pub fn corrected(raw: &str, factor: f64) -> String {
    match Reading::parse(raw) {
        Reading::Numeric(v) => format!("{:.2}", v * factor),
        Reading::Sentinel(token) => token,
        Reading::Blank => String::new(),
    }
}

/// Quotient of two readings, two decimals
///
/// Empty when either side is non-numeric or the denominator is zero.
/// Dielectric absorption is `ratio(one_minute, half_minute)`; polarization
/// index is `ratio(ten_minute, one_minute)`.
pub fn ratio(numerator: &str, denominator: &str) -> String {
    match (
        Reading::parse(numerator).as_numeric(),
        Reading::parse(denominator).as_numeric(),
    ) {
        (Some(n), Some(d)) if d != 0.0 => format!("{:.2}", n / d),
        _ => String::new(),
    }
}

/// Percentage deviation of a measured value from a reference value
///
/// `((measured - reference) / reference) * 100`, two decimals. Empty when
/// either value is non-numeric or the reference is zero.
pub fn deviation(measured: &str, reference: &str) -> String {
    match (
        Reading::parse(measured).as_numeric(),
        Reading::parse(reference).as_numeric(),
    ) {
        (Some(m), Some(r)) if r != 0.0 => format!("{:.2}", (m - r) / r * 100.0),
        _ => String::new(),
    }
}

/// Turns-ratio deviation: `((calculated - measured) / calculated) * 100`
///
/// The TTR forms use the inverse sign convention relative to [`deviation`].
/// Empty when either value is non-numeric or the calculated ratio is zero.
pub fn turns_ratio_deviation(calculated: &str, measured: &str) -> String {
    match (
        Reading::parse(calculated).as_numeric(),
        Reading::parse(measured).as_numeric(),
    ) {
        (Some(c), Some(m)) if c != 0.0 => format!("{:.2}", (c - m) / c * 100.0),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_numeric() {
        assert_eq!(corrected("100", 1.25), "125.00");
        assert_eq!(corrected("2.5", 0.40), "1.00");
    }

    #[test]
    fn test_corrected_identity_factor() {
        // factor 1.0 just reformats the parsed value
        assert_eq!(corrected("10", 1.0), "10.00");
        assert_eq!(corrected("10.005", 1.0), "10.01");
    }

    #[test]
    fn test_corrected_sentinel_passthrough() {
        assert_eq!(corrected(">2000", 1.25), ">2000");
        assert_eq!(corrected("N/A", 0.40), "N/A");
        assert_eq!(corrected("<0.5", 2.0), "<0.5");
    }

    #[test]
    fn test_corrected_blank() {
        assert_eq!(corrected("", 1.25), "");
        assert_eq!(corrected("bad", 1.25), "");
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio("15", "10"), "1.50");
        assert_eq!(ratio("20", "15"), "1.33");
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio("15", "0"), "");
        assert_eq!(ratio("15", "0.0"), "");
    }

    #[test]
    fn test_ratio_non_numeric() {
        assert_eq!(ratio(">2000", "10"), "");
        assert_eq!(ratio("15", "N/A"), "");
        assert_eq!(ratio("", "10"), "");
    }

    #[test]
    fn test_deviation() {
        // phase at 1.03 ohms against a 1.00 ohm reference: +3.00%
        assert_eq!(deviation("1.03", "1.00"), "3.00");
        assert_eq!(deviation("0.97", "1.00"), "-3.00");
    }

    #[test]
    fn test_deviation_zero_reference() {
        assert_eq!(deviation("1.0", "0"), "");
    }

    #[test]
    fn test_turns_ratio_deviation() {
        // calculated 2.000, measured 2.010 -> -0.50%
        assert_eq!(turns_ratio_deviation("2.000", "2.010"), "-0.50");
        assert_eq!(turns_ratio_deviation("2.000", "1.990"), "0.50");
    }

    #[test]
    fn test_turns_ratio_deviation_invalid() {
        assert_eq!(turns_ratio_deviation("0", "2.010"), "");
        assert_eq!(turns_ratio_deviation("", "2.010"), "");
        assert_eq!(turns_ratio_deviation("2.000", "N/A"), "");
    }
}
