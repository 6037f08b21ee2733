//! Derived-Value Calculators
//!
//! Pure functions with no hardware dependency: compass heading from raw
//! magnetometer axes and wind speed from the anemometer tick interval.
//! Both are recomputed from scratch every polling cycle and are independently
//! testable without any device mocks.

use crate::config::ANEMOMETER_MPH_FACTOR;

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Compass heading in degrees from raw magnetometer axes
///
/// Standard two-axis heading from the horizontal field components with
/// quadrant correction:
///
/// - `my > 0`: `90 - atan(mx/my) * (180/π)`
/// - `my < 0`: `-atan(mx/my) * (180/π)`
/// - `my == 0`: 180 if `mx < 0`, else 0
///
/// The vertical component `mz` does not enter the two-axis formula; the
/// signature carries it because callers hand over the full vector.
///
/// The result is deliberately *not* wrapped into [0, 360): the formula can
/// return small negative values and has discontinuities around `my == 0`.
/// That matches the board's established heading output, and downstream
/// consumers already normalize where they need to.
pub fn mag_heading(mx: f32, my: f32, mz: f32) -> f32 {
    let _ = mz;

    if my > 0.0 {
        90.0 - libm::atanf(mx / my) * RAD_TO_DEG
    } else if my < 0.0 {
        -(libm::atanf(mx / my) * RAD_TO_DEG)
    } else if mx < 0.0 {
        180.0
    } else {
        0.0
    }
}

/// Wind speed in mph from the interval between anemometer ticks
///
/// One rotation per second equals [`ANEMOMETER_MPH_FACTOR`] mph, so
/// `speed = 1000 / interval_ms * factor`. `None` means no tick has ever
/// been recorded and reads as 0.0. A zero-length interval (two edges in
/// the same millisecond) also reads as 0.0 rather than infinity.
///
/// The interval is whatever the tick tracker currently holds: a rotor that
/// has stopped spinning keeps reporting its last observed speed until a
/// new tick arrives.
pub fn wind_speed_mph(tick_interval_ms: Option<u32>) -> f32 {
    match tick_interval_ms {
        Some(ms) if ms > 0 => 1000.0 / ms as f32 * ANEMOMETER_MPH_FACTOR,
        _ => 0.0,
    }
}
