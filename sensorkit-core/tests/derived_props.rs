//! Property tests for the derived-value calculators

use proptest::prelude::*;

use sensorkit_core::calc::{mag_heading, wind_speed_mph};
use sensorkit_core::config::ANEMOMETER_MPH_FACTOR;

proptest! {
    #[test]
    fn heading_matches_formula_for_positive_my(
        mx in -100.0f32..100.0,
        my in 0.001f32..100.0,
    ) {
        let h = mag_heading(mx, my, 0.0);
        let expected = 90.0 - (mx / my).atan().to_degrees();
        prop_assert!((h - expected).abs() < 1e-2);
    }

    #[test]
    fn heading_matches_formula_for_negative_my(
        mx in -100.0f32..100.0,
        my in -100.0f32..-0.001,
    ) {
        let h = mag_heading(mx, my, 0.0);
        let expected = -((mx / my).atan().to_degrees());
        prop_assert!((h - expected).abs() < 1e-2);
    }

    // The legacy formula is unwrapped but still bounded: my > 0 lands in
    // (0, 180), my < 0 in (-90, 90), the my == 0 edges at 0 or 180.
    #[test]
    fn heading_stays_within_legacy_bounds(
        mx in -1000.0f32..1000.0,
        my in -1000.0f32..1000.0,
    ) {
        let h = mag_heading(mx, my, 0.0);
        prop_assert!(h >= -90.0 && h < 270.0);
    }

    #[test]
    fn wind_speed_is_positive_and_inverse_in_interval(
        ms in 1u32..1_000_000,
    ) {
        let v = wind_speed_mph(Some(ms));
        prop_assert!(v > 0.0);
        prop_assert!((v * ms as f32 / 1000.0 - ANEMOMETER_MPH_FACTOR).abs() < 1e-3);
    }

    #[test]
    fn faster_rotation_is_never_slower(
        short in 1u32..10_000,
        extra in 1u32..10_000,
    ) {
        let long = short + extra;
        prop_assert!(wind_speed_mph(Some(short)) >= wind_speed_mph(Some(long)));
    }
}
