//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{
    AlertSettings, BEAUFORT_DESCRIPTIONS, GeoLocation, LocationQuery, Stability,
    UNKNOWN_BEAUFORT_LABEL, beaufort_description, kmh_to_knots, kmh_to_ms,
};
use proptest::prelude::*;

// ============================================================================
// Unit conversion property tests
// ============================================================================

mod conversion_tests {
    use super::*;

    proptest! {
        #[test]
        fn ms_is_speed_over_3_6_rounded(speed in 0.0f64..500.0f64) {
            let expected = (speed / 3.6 * 10.0).round() / 10.0;
            prop_assert!((kmh_to_ms(speed) - expected).abs() < 1e-9);
        }

        #[test]
        fn knots_is_speed_times_factor_rounded(speed in 0.0f64..500.0f64) {
            let expected = (speed * 0.539_957 * 10.0).round() / 10.0;
            prop_assert!((kmh_to_knots(speed) - expected).abs() < 1e-9);
        }

        #[test]
        fn conversions_have_one_decimal(speed in 0.0f64..500.0f64) {
            let ms = kmh_to_ms(speed) * 10.0;
            let knots = kmh_to_knots(speed) * 10.0;
            prop_assert!((ms - ms.round()).abs() < 1e-6);
            prop_assert!((knots - knots.round()).abs() < 1e-6);
        }
    }
}

// ============================================================================
// Stability and alert property tests
// ============================================================================

mod classification_tests {
    use super::*;

    proptest! {
        #[test]
        fn above_fifty_is_unstable(speed in 50.0001f64..400.0f64) {
            prop_assert_eq!(Stability::from_speed(speed), Stability::Unstable);
        }

        #[test]
        fn up_to_fifty_is_stable(speed in 0.0f64..=50.0f64) {
            prop_assert_eq!(Stability::from_speed(speed), Stability::Stable);
        }

        #[test]
        fn alert_fires_iff_enabled_and_at_threshold(
            threshold in 10u32..=150u32,
            speed in 0.0f64..300.0f64,
            enabled in any::<bool>()
        ) {
            let settings = AlertSettings::new(threshold, enabled);
            let expected = enabled && speed >= f64::from(threshold);
            prop_assert_eq!(settings.is_triggered_by(speed), expected);
        }

        #[test]
        fn equal_speed_triggers_when_enabled(threshold in 10u32..=150u32) {
            let settings = AlertSettings::new(threshold, true);
            prop_assert!(settings.is_triggered_by(f64::from(threshold)));
        }

        #[test]
        fn beaufort_in_range_matches_table(scale in 0i32..=12i32) {
            #[allow(clippy::cast_sign_loss)]
            let expected = BEAUFORT_DESCRIPTIONS[scale as usize];
            prop_assert_eq!(beaufort_description(scale), expected);
        }

        #[test]
        fn beaufort_out_of_range_is_unknown(
            scale in prop_oneof![(i32::MIN..0i32), (13i32..i32::MAX)]
        ) {
            prop_assert_eq!(beaufort_description(scale), UNKNOWN_BEAUFORT_LABEL);
        }
    }
}

// ============================================================================
// Location property tests
// ============================================================================

mod location_tests {
    use super::*;

    proptest! {
        #[test]
        fn coordinates_round_trip_through_query(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            let query = LocationQuery::from_coordinates(&loc);
            let (lat_text, lon_text) = query.as_str().split_once(", ").unwrap();
            prop_assert_eq!(lat_text.parse::<f64>().unwrap(), lat);
            prop_assert_eq!(lon_text.parse::<f64>().unwrap(), lon);
        }

        #[test]
        fn non_blank_queries_are_trimmed(text in "[A-Za-z][A-Za-z ,.-]{0,40}") {
            let padded = format!("  {text}  ");
            let query = LocationQuery::new(&padded).unwrap();
            prop_assert_eq!(query.as_str(), text.trim());
        }

        #[test]
        fn whitespace_queries_are_rejected(text in "[ \t\n]{0,10}") {
            prop_assert!(LocationQuery::new(&text).is_err());
        }
    }
}
