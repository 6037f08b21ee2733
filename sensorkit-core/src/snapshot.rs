//! The Snapshot Record
//!
//! ## Overview
//!
//! One aggregate holding the most recent value of every measured and derived
//! quantity on the board. The polling cycle controller is the only writer;
//! any number of consumers read it between cycles. The board runs a single
//! control thread, so no internal locking is needed or provided.
//!
//! ## Field Invariant
//!
//! Every field holds either a real measurement from the last successful
//! cycle or the defined zero/default for its device when that device is
//! Absent - never a stale value from a partially failed read, and never an
//! uninitialized value. `Snapshot::default()` is exactly the all-absent
//! state, which is also what consumers see before the first sweep.
//!
//! ## Memory Layout
//!
//! The record is plain `Copy` data (~100 bytes), cheap to hand out by value
//! and comparable field-for-field with `PartialEq` - tests rely on that to
//! assert the rate gate leaves it untouched.

use crate::time::Timestamp;

/// One three-axis reading (accelerometer, gyroscope, or magnetometer)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axes {
    /// X axis value
    pub x: f32,
    /// Y axis value
    pub y: f32,
    /// Z axis value
    pub z: f32,
}

/// A GPS-reported position/time record
///
/// The default value (all zeros, zero satellites) is the "no device" and
/// "no fix yet" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsFix {
    /// Latitude in decimal degrees (positive north)
    pub latitude: f32,
    /// Longitude in decimal degrees (positive east)
    pub longitude: f32,
    /// Altitude above mean sea level in meters
    pub altitude_m: f32,
    /// Number of satellites used for the fix
    pub satellites: u8,
    /// UTC timestamp reported with the fix, milliseconds since epoch
    pub timestamp: Timestamp,
}

/// The latest aggregate of every measured and derived quantity
///
/// Field names follow the board silkscreen: the BME280 supplies `t1`/`p`/`h1`,
/// the HDC1080 supplies `t2`/`h2`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Temperature from the BME280 (°C)
    pub t1: f32,
    /// Barometric pressure from the BME280 (Pa)
    pub p: f32,
    /// Relative humidity from the BME280 (%)
    pub h1: f32,

    /// Temperature from the HDC1080 (°C)
    pub t2: f32,
    /// Relative humidity from the HDC1080 (%)
    pub h2: f32,

    /// Visible-light luminosity from the TSL2591 (lux)
    pub lux: f32,

    /// Total volatile organic compounds from the gas sensor (ppb),
    /// or the raw ADC reading when the board uses the analog fallback
    pub gas: u16,
    /// Equivalent CO2 from the gas sensor (ppm)
    pub co2: u16,

    /// Accelerometer reading (g)
    pub accel: Axes,
    /// Gyroscope reading (°/s)
    pub gyro: Axes,
    /// Magnetometer reading (gauss)
    pub mag: Axes,
    /// Compass heading derived from the horizontal magnetometer axes (degrees)
    pub mag_heading: f32,

    /// Magnetic switch state (true = field detected)
    pub magnetic: bool,

    /// Wind speed derived from the anemometer tick interval (mph)
    pub wind_speed: f32,

    /// Most recent GPS fix
    pub gps: GpsFix,
}
