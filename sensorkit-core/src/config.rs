//! Board Configuration Constants
//!
//! Compile-time configuration for the board: polling cadence, I2C addresses,
//! pin and channel assignments, and the anemometer calibration factor.
//! Values match the board schematic and the vendor datasheets; applications
//! that re-wire the board override behavior at `Devices` construction time,
//! not by editing these.

// ===== POLLING =====

/// Minimum interval between full sensor sweeps (ms).
///
/// The rate gate inside `poll()` enforces this regardless of how often the
/// application loop calls in. Sensors like the CCS811 produce new data on
/// a seconds-scale cadence, so polling faster only burns bus bandwidth.
pub const SENSOR_QUERY_INTERVAL_MS: u64 = 4000;

/// Maximum GPS stream bytes drained per polling cycle.
///
/// Bounds the time spent in the GPS pump so a chatty UART can never stall
/// the sweep. At 9600 baud a 4 s cycle accumulates ~3840 bytes; parsing is
/// cheap but the budget keeps worst-case cycle time predictable.
pub const GPS_PUMP_BUDGET: usize = 256;

// ===== I2C ADDRESSES =====

/// BME280 environmental sensor (temperature/pressure/humidity).
pub const BME280_I2C_ADDR: u8 = 0x77;

/// HDC1080 temperature/humidity sensor.
pub const HDC1080_I2C_ADDR: u8 = 0x40;

/// TSL2591 luminosity sensor.
pub const TSL2591_I2C_ADDR: u8 = 0x29;

/// CCS811 air-quality sensor (TVOC + eCO2).
pub const CCS811_I2C_ADDR: u8 = 0x5B;

/// LSM9DS1 accelerometer/gyroscope block.
pub const IMU_ACCEL_GYRO_I2C_ADDR: u8 = 0x6B;

/// LSM9DS1 magnetometer block.
pub const IMU_MAG_I2C_ADDR: u8 = 0x1E;

// ===== PINS & CHANNELS =====

/// Board power-enable line (MCU pin, active high).
///
/// `BoardPower` implementations drive this and wait for rail stabilization
/// before returning from `power_on()`.
pub const BOARD_ENABLE_PIN: u8 = 16;

/// GPIO-expander pin wired to the magnetic switch (digital input).
pub const MAGNETIC_SWITCH_PIN: u8 = 4;

/// MCU pin carrying the anemometer rotation interrupt (rising edge).
///
/// The ISR on this pin feeds [`TickTracker`](crate::tick::TickTracker);
/// the engine itself never touches the pin.
pub const WIND_TICK_PIN: u8 = 14;

/// ADC channel used for the raw gas reading when no CCS811 is fitted.
pub const GAS_ADC_CHANNEL: u8 = 0;

// ===== CALIBRATION =====

/// Anemometer calibration factor (mph per rotation/second).
///
/// Converts rotation frequency to linear wind speed for this cup geometry:
/// one rotation per second equals 1.492 mph.
///
/// Source: Davis/Sparkfun weather meter datasheet
pub const ANEMOMETER_MPH_FACTOR: f32 = 1.492;
