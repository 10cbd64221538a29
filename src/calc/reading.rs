//! Operator-entered reading values
//!
//! Field readings arrive as free-form strings: a plain number, a comparison
//! sentinel like `">2000"` (meter pegged above its range), or `"N/A"`.
//! Parsing happens once, here, into a tagged value; the calculators dispatch
//! on the tag instead of re-checking substrings.

use serde::{Deserialize, Serialize};

/// A parsed operator-entered reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reading {
    /// A finite numeric value
    Numeric(f64),
    /// A pass-through token: comparison marker (">2000", "<0.5") or "N/A"
    Sentinel(String),
    /// Empty or unparseable input
    Blank,
}

impl Reading {
    /// Parse a raw input string into a reading
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Reading::Blank;
        }
        if trimmed.contains('>') || trimmed.contains('<') || trimmed.eq_ignore_ascii_case("n/a") {
            return Reading::Sentinel(trimmed.to_string());
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Reading::Numeric(v),
            _ => Reading::Blank,
        }
    }

    /// Get the numeric value, if any
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Reading::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    /// True for sentinel tokens that pass through calculations unchanged
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Reading::Sentinel(_))
    }

    /// True when the input was empty or unparseable
    pub fn is_blank(&self) -> bool {
        matches!(self, Reading::Blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(Reading::parse("10"), Reading::Numeric(10.0));
        assert_eq!(Reading::parse(" 2.5 "), Reading::Numeric(2.5));
        assert_eq!(Reading::parse("-0.4"), Reading::Numeric(-0.4));
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(
            Reading::parse(">2000"),
            Reading::Sentinel(">2000".to_string())
        );
        assert_eq!(Reading::parse("<0.5"), Reading::Sentinel("<0.5".to_string()));
        assert_eq!(Reading::parse("N/A"), Reading::Sentinel("N/A".to_string()));
        assert_eq!(Reading::parse("n/a"), Reading::Sentinel("n/a".to_string()));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Reading::parse(""), Reading::Blank);
        assert_eq!(Reading::parse("   "), Reading::Blank);
        assert_eq!(Reading::parse("abc"), Reading::Blank);
        assert_eq!(Reading::parse("NaN"), Reading::Blank);
        assert_eq!(Reading::parse("inf"), Reading::Blank);
    }

    #[test]
    fn test_as_numeric() {
        assert_eq!(Reading::parse("42").as_numeric(), Some(42.0));
        assert_eq!(Reading::parse(">2000").as_numeric(), None);
        assert_eq!(Reading::parse("").as_numeric(), None);
    }
}
