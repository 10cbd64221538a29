//! Temperature correction factor lookup
//!
//! Insulation-resistance readings are normalized to a 20 °C reference by
//! multiplying with an empirical temperature correction factor (TCF). The
//! table maps integer Celsius degrees from −24 to 110; 20 °C is the identity
//! point. Temperatures outside the table silently fall back to a factor of
//! 1.0 rather than raising an error.

use serde::{Deserialize, Serialize};

/// Ambient temperature with its derived conversion and correction factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Ambient temperature in Fahrenheit, rounded to the nearest degree
    pub fahrenheit: i32,

    /// Ambient temperature in Celsius, rounded to the nearest degree
    pub celsius: i32,

    /// Correction factor looked up by rounded Celsius (1.0 if out of range)
    pub correction_factor: f64,
}

impl TemperatureReading {
    /// Build from an ambient Fahrenheit value
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        let celsius = ((fahrenheit - 32.0) * 5.0 / 9.0).round() as i32;
        Self {
            fahrenheit: fahrenheit.round() as i32,
            celsius,
            correction_factor: correction_factor(celsius),
        }
    }

    /// Build from an ambient Celsius value
    pub fn from_celsius(celsius: f64) -> Self {
        let rounded = celsius.round() as i32;
        Self {
            fahrenheit: (celsius * 9.0 / 5.0 + 32.0).round() as i32,
            celsius: rounded,
            correction_factor: correction_factor(rounded),
        }
    }
}

/// Look up the correction factor for a rounded Celsius temperature
///
/// Returns 1.0 for temperatures outside the table range.
pub fn correction_factor(celsius: i32) -> f64 {
    TCF_TABLE
        .binary_search_by_key(&celsius, |entry| entry.0)
        .map(|idx| TCF_TABLE[idx].1)
        .unwrap_or(1.0)
}

/// The full correction table, sorted by degree
pub fn table() -> &'static [(i32, f64)] {
    TCF_TABLE
}

/// Insulation-resistance correction factors to a 20 °C reference, one entry
/// per integer degree.
const TCF_TABLE: &[(i32, f64)] = &[
    (-24, 0.14), (-23, 0.14), (-22, 0.15), (-21, 0.15), (-20, 0.16),
    (-19, 0.17), (-18, 0.18), (-17, 0.19), (-16, 0.20), (-15, 0.21),
    (-14, 0.22), (-13, 0.23), (-12, 0.24), (-11, 0.25), (-10, 0.26),
    (-9, 0.27), (-8, 0.28), (-7, 0.30), (-6, 0.31), (-5, 0.32),
    (-4, 0.34), (-3, 0.35), (-2, 0.37), (-1, 0.38), (0, 0.40),
    (1, 0.42), (2, 0.44), (3, 0.46), (4, 0.48), (5, 0.50),
    (6, 0.53), (7, 0.55), (8, 0.58), (9, 0.60), (10, 0.63),
    (11, 0.67), (12, 0.70), (13, 0.74), (14, 0.77), (15, 0.81),
    (16, 0.85), (17, 0.89), (18, 0.92), (19, 0.96), (20, 1.00),
    (21, 1.05), (22, 1.10), (23, 1.15), (24, 1.20), (25, 1.25),
    (26, 1.32), (27, 1.38), (28, 1.45), (29, 1.51), (30, 1.58),
    (31, 1.66), (32, 1.74), (33, 1.81), (34, 1.89), (35, 1.97),
    (36, 2.08), (37, 2.18), (38, 2.29), (39, 2.39), (40, 2.50),
    (41, 2.62), (42, 2.75), (43, 2.87), (44, 3.00), (45, 3.12),
    (46, 3.29), (47, 3.45), (48, 3.62), (49, 3.78), (50, 3.95),
    (51, 4.14), (52, 4.33), (53, 4.52), (54, 4.71), (55, 4.90),
    (56, 5.16), (57, 5.43), (58, 5.69), (59, 5.96), (60, 6.22),
    (61, 6.53), (62, 6.83), (63, 7.14), (64, 7.44), (65, 7.75),
    (66, 8.17), (67, 8.59), (68, 9.01), (69, 9.43), (70, 9.85),
    (71, 10.32), (72, 10.79), (73, 11.26), (74, 11.73), (75, 12.20),
    (76, 12.84), (77, 13.48), (78, 14.12), (79, 14.76), (80, 15.40),
    (81, 16.18), (82, 16.96), (83, 17.74), (84, 18.52), (85, 19.30),
    (86, 20.28), (87, 21.26), (88, 22.24), (89, 23.22), (90, 24.20),
    (91, 25.44), (92, 26.68), (93, 27.92), (94, 29.16), (95, 30.40),
    (96, 31.94), (97, 33.48), (98, 35.02), (99, 36.56), (100, 38.10),
    (101, 40.04), (102, 41.98), (103, 43.92), (104, 45.86), (105, 47.80),
    (106, 50.24), (107, 52.68), (108, 55.12), (109, 57.56), (110, 60.00),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_point() {
        // 68F -> 20C -> factor 1.0
        let t = TemperatureReading::from_fahrenheit(68.0);
        assert_eq!(t.celsius, 20);
        assert_eq!(t.correction_factor, 1.0);
    }

    #[test]
    fn test_freezing_point() {
        // 32F -> 0C -> factor 0.40
        let t = TemperatureReading::from_fahrenheit(32.0);
        assert_eq!(t.celsius, 0);
        assert_eq!(t.correction_factor, 0.40);
    }

    #[test]
    fn test_fractional_input_rounds() {
        let t = TemperatureReading::from_fahrenheit(68.4);
        assert_eq!(t.celsius, 20);
        let t = TemperatureReading::from_fahrenheit(69.8); // 21.0C
        assert_eq!(t.celsius, 21);
        assert_eq!(t.correction_factor, 1.05);
    }

    #[test]
    fn test_from_celsius() {
        let t = TemperatureReading::from_celsius(25.0);
        assert_eq!(t.fahrenheit, 77);
        assert_eq!(t.correction_factor, 1.25);
    }

    #[test]
    fn test_out_of_range_defaults_to_one() {
        assert_eq!(correction_factor(-25), 1.0);
        assert_eq!(correction_factor(111), 1.0);
        assert_eq!(correction_factor(500), 1.0);
    }

    #[test]
    fn test_table_bounds() {
        assert_eq!(correction_factor(-24), 0.14);
        assert_eq!(correction_factor(110), 60.00);
    }

    #[test]
    fn test_lookup_matches_every_table_entry() {
        for (celsius, factor) in table() {
            assert_eq!(correction_factor(*celsius), *factor);
        }
    }

    #[test]
    fn test_table_is_contiguous_and_sorted() {
        for pair in table().windows(2) {
            assert_eq!(pair[1].0, pair[0].0 + 1);
            assert!(pair[1].1 >= pair[0].1);
        }
    }

    #[test]
    fn test_conversion_roundtrip() {
        for c in -24..=110 {
            let t = TemperatureReading::from_celsius(c as f64);
            let back = TemperatureReading::from_fahrenheit(t.fahrenheit as f64);
            // F rounds to a whole degree, so C can shift by at most one
            assert!((back.celsius - c).abs() <= 1);
        }
    }
}
