//! Device Capability Contracts
//!
//! ## Overview
//!
//! The orchestration engine never talks to vendor driver APIs directly. Each
//! physical device is reached through a minimal capability trait covering
//! exactly what the polling cycle needs - a handshake plus the handful of
//! reads the snapshot consumes. Vendor drivers (and test mocks) implement
//! these; the engine owns them as boxed handles resolved once at
//! construction.
//!
//! ## Why Traits at This Seam?
//!
//! The board ships with several interchangeable parts - two environmental
//! sensors, a choice of inertial driver, a gas sensor that may be replaced
//! by a bare ADC channel. Conditional branches per call site don't scale;
//! a fixed capability interface resolved at construction does. It also makes
//! every orchestration property testable on a host with no hardware.
//!
//! ## Contract Conventions
//!
//! - `init` performs the driver-specific handshake once. `false` (or an
//!   error status) means the device is unusable and the engine marks its
//!   handle Absent for good.
//! - Reads return plain values, already unit-converted by the driver. A
//!   driver that hits a bus error mid-read returns its own sentinel; the
//!   engine does not retry.
//! - Nothing here may block longer than a single bus transaction.

use crate::errors::{KitResult, StreamError};
use crate::snapshot::GpsFix;
use crate::time::Timestamp;

/// Identifies one physical device kind on the board
///
/// Used for presence queries, failure diagnostics, and log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeviceKind {
    /// BME280 temperature/pressure/humidity sensor
    Bme280 = 0,
    /// HDC1080 temperature/humidity sensor
    Hdc1080 = 1,
    /// TSL2591 luminosity sensor
    Tsl2591 = 2,
    /// CCS811 air-quality sensor
    Ccs811 = 3,
    /// Analog-to-digital converter
    Adc = 4,
    /// Inertial measurement unit (accel/gyro/mag)
    Imu = 5,
    /// GPIO expander
    GpioExpander = 6,
    /// Real-time clock
    Rtc = 7,
    /// GPS receiver/parser
    Gps = 8,
}

impl DeviceKind {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            DeviceKind::Bme280 => "BME280",
            DeviceKind::Hdc1080 => "HDC1080",
            DeviceKind::Tsl2591 => "TSL2591",
            DeviceKind::Ccs811 => "CCS811",
            DeviceKind::Adc => "ADC",
            DeviceKind::Imu => "IMU",
            DeviceKind::GpioExpander => "GPIO expander",
            DeviceKind::Rtc => "RTC",
            DeviceKind::Gps => "GPS",
        }
    }
}

impl core::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Combined environmental sensor (temperature, pressure, humidity)
///
/// Sensors that lack a quantity return 0.0 for it (the HDC1080 has no
/// pressure channel).
pub trait EnvironmentalSensor {
    /// Perform the driver handshake; false means the device is unusable
    fn init(&mut self) -> bool;
    /// Temperature in °C
    fn read_temperature(&mut self) -> f32;
    /// Barometric pressure in Pa
    fn read_pressure(&mut self) -> f32;
    /// Relative humidity in %
    fn read_humidity(&mut self) -> f32;
}

/// Analog gain setting for the light sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    /// 1x gain (bright light)
    Low,
    /// 25x gain
    Medium,
    /// 428x gain
    High,
    /// 9876x gain (darkness)
    Max,
}

/// Integration window for the light sensor
///
/// Longer windows gather more light but slow the reading down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationTime {
    /// 100 ms (bright light)
    Ms100,
    /// 200 ms
    Ms200,
    /// 300 ms
    Ms300,
    /// 400 ms
    Ms400,
    /// 500 ms
    Ms500,
    /// 600 ms (very low light)
    Ms600,
}

/// Luminosity sensor
pub trait LightSensor {
    /// Perform the driver handshake
    fn init(&mut self) -> bool;
    /// Visible-light luminosity reading
    fn luminosity(&mut self) -> u16;
    /// Select analog gain
    fn set_gain(&mut self, gain: Gain);
    /// Select integration window
    fn set_integration_time(&mut self, time: IntegrationTime);
}

/// Air-quality sensor (TVOC + eCO2)
///
/// This part computes results on its own cadence: `data_available` gates
/// `read_results`, and the getters return whatever the last `read_results`
/// latched.
pub trait GasSensor {
    /// Perform the driver handshake, surfacing the driver status code
    fn init(&mut self) -> KitResult<()>;
    /// True when a fresh result set is ready to latch
    fn data_available(&mut self) -> bool;
    /// Latch the current result set into the getters
    fn read_results(&mut self);
    /// Total volatile organic compounds (ppb) from the last latch
    fn tvoc(&self) -> u16;
    /// Equivalent CO2 (ppm) from the last latch
    fn co2(&self) -> u16;
}

/// Inertial measurement unit
///
/// Per-axis reads, already unit-converted by the driver (g, °/s, gauss).
/// Heading is *not* part of this contract - the engine derives it from the
/// magnetometer axes.
pub trait InertialSensor {
    /// Perform the driver handshake against the two I2C addresses
    fn init(&mut self, accel_gyro_addr: u8, mag_addr: u8) -> bool;

    /// Accelerometer X axis (g)
    fn accel_x(&mut self) -> f32;
    /// Accelerometer Y axis (g)
    fn accel_y(&mut self) -> f32;
    /// Accelerometer Z axis (g)
    fn accel_z(&mut self) -> f32;

    /// Gyroscope X axis (°/s)
    fn gyro_x(&mut self) -> f32;
    /// Gyroscope Y axis (°/s)
    fn gyro_y(&mut self) -> f32;
    /// Gyroscope Z axis (°/s)
    fn gyro_z(&mut self) -> f32;

    /// Magnetometer X axis (gauss)
    fn mag_x(&mut self) -> f32;
    /// Magnetometer Y axis (gauss)
    fn mag_y(&mut self) -> f32;
    /// Magnetometer Z axis (gauss)
    fn mag_z(&mut self) -> f32;
}

/// Direction of a GPIO-expander pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// High-impedance input
    Input,
    /// Push-pull output
    Output,
}

/// Logic level on a GPIO-expander pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Logic low
    Low,
    /// Logic high
    High,
}

impl Level {
    /// True for `Level::High`
    pub const fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }
}

/// I2C GPIO expander
pub trait GpioExpander {
    /// Perform the driver handshake
    fn init(&mut self) -> bool;
    /// Configure a pin direction
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode);
    /// Drive an output pin
    fn write_pin(&mut self, pin: u8, level: Level);
    /// Sample an input pin
    fn read_pin(&mut self, pin: u8) -> Level;
}

/// Battery-backed real-time clock
pub trait Rtc {
    /// Perform the driver handshake
    fn init(&mut self) -> bool;
    /// Current wall-clock time, milliseconds since epoch
    fn now(&mut self) -> Timestamp;
}

/// GPS sentence parser
///
/// Consumes a byte stream (fed by the engine from the bound stream) and
/// exposes the most recent fix.
pub trait GpsParser {
    /// Prepare the parser; false means the receiver is unusable
    fn init(&mut self) -> bool;
    /// Feed one byte of receiver output
    fn feed(&mut self, byte: u8);
    /// True once a valid fix has been parsed
    fn has_fix(&self) -> bool;
    /// The most recent fix
    fn read_fix(&self) -> GpsFix;
}

/// Multi-channel analog-to-digital converter
pub trait Adc {
    /// Perform the driver handshake
    fn init(&mut self) -> bool;
    /// Single conversion on the given channel
    fn read(&mut self, channel: u8) -> u16;
}

/// Board power-enable control
///
/// Implementations drive the enable line (see
/// [`BOARD_ENABLE_PIN`](crate::config::BOARD_ENABLE_PIN)) and own the rail
/// stabilization delay: `power_on` returns only once downstream devices can
/// be addressed.
pub trait BoardPower {
    /// Drive the enable line to its active level and wait for stable rails
    fn power_on(&mut self);
    /// Drive the enable line to its inactive level
    fn power_off(&mut self);
}

/// Non-blocking byte source for the GPS parser
///
/// `WouldBlock` means "no byte right now, try next cycle";
/// [`StreamError::EndOfStream`] means the source is exhausted for good.
pub trait ByteStream {
    /// Pull the next byte if one is available
    fn poll_next(&mut self) -> nb::Result<u8, StreamError>;
}
