//! Sensor Orchestration Engine
//!
//! ## Overview
//!
//! This module is the heart of the crate: it owns one handle per physical
//! device, brings the board up and down, runs the rate-gated polling cycle,
//! and maintains the single consistent [`Snapshot`] the application reads.
//!
//! ## Control Flow
//!
//! ```text
//! begin() ──→ power on ──→ init each device in fixed order
//!                              │ success: handle stays Present
//!                              │ failure: handle dropped, marked Absent
//!                              ▼
//! loop: poll(now) ──→ rate gate ──→ read every Present device
//!                        │              │ derived values via calc
//!                        │              ▼
//!                        │          overwrite Snapshot fields
//!                        ▼
//!                    too soon: no-op, snapshot untouched
//! ```
//!
//! ## Failure Model
//!
//! Initialization failure is permanent for the engine's lifetime: the handle
//! becomes Absent, its snapshot fields read the defined zero every cycle, and
//! nothing retries. A transient read failure (gas sensor not ready, GPS
//! without a fix) leaves the previous cycle's value in place. One device
//! failing mid-cycle never aborts the reads of the others.
//!
//! ## Concurrency
//!
//! The engine runs on a single cooperative control thread. The only
//! asynchronous input is the anemometer interrupt, which writes the
//! [`TickTracker`] - the engine only ever reads it through its atomic
//! accessor.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use heapless::Vec;

use crate::calc;
use crate::config;
use crate::snapshot::{Axes, GpsFix, Snapshot};
use crate::tick::TickTracker;
use crate::time::Timestamp;
use crate::traits::{
    Adc, BoardPower, ByteStream, DeviceKind, EnvironmentalSensor, Gain, GasSensor, GpioExpander,
    GpsParser, InertialSensor, IntegrationTime, LightSensor, PinMode, Rtc,
};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Where gas/CO2 readings come from, resolved once at construction
///
/// The board is populated either with a CCS811 or with a bare analog gas
/// element on an ADC channel. What used to be a scatter of conditional
/// compilation is one choice made when the device set is built.
pub enum GasSource {
    /// CCS811 digital air-quality sensor
    Ccs811(Box<dyn GasSensor>),
    /// Raw analog element on the given ADC channel; CO2 always reads 0
    AdcChannel(u8),
    /// No gas sensing fitted; gas and CO2 read 0
    Disabled,
}

/// One optional handle per physical device
///
/// `None` means Absent: either the board configuration never provided the
/// device, or its init handshake failed and the lifecycle manager dropped
/// it. Absent is permanent until the next `begin()`.
///
/// Field order is teardown order: handles that sit behind the GPIO expander
/// are declared (and therefore dropped) before the expander itself.
pub struct Devices {
    /// BME280 environmental sensor
    pub bme280: Option<Box<dyn EnvironmentalSensor>>,
    /// HDC1080 temperature/humidity sensor
    pub hdc1080: Option<Box<dyn EnvironmentalSensor>>,
    /// TSL2591 luminosity sensor
    pub light: Option<Box<dyn LightSensor>>,
    /// Gas/CO2 source selection
    pub gas: GasSource,
    /// Analog-to-digital converter
    pub adc: Option<Box<dyn Adc>>,
    /// Inertial measurement unit
    pub imu: Option<Box<dyn InertialSensor>>,
    /// Real-time clock
    pub rtc: Option<Box<dyn Rtc>>,
    /// GPS parser
    pub gps: Option<Box<dyn GpsParser>>,
    /// GPIO expander - last so dependent handles release first
    pub expander: Option<Box<dyn GpioExpander>>,
}

impl Default for Devices {
    /// The all-absent device set
    fn default() -> Self {
        Self {
            bme280: None,
            hdc1080: None,
            light: None,
            gas: GasSource::Disabled,
            adc: None,
            imu: None,
            rtc: None,
            gps: None,
            expander: None,
        }
    }
}

/// Upper bound on distinct device kinds, sizes the failure list
const MAX_DEVICES: usize = 9;

/// The sensor orchestration engine
///
/// Owns the device handles, the rate gate, and the snapshot. Constructed
/// with whatever devices the board configuration provides; `begin()` turns
/// provided handles into Present or Absent ones.
///
/// ## Example
///
/// ```rust
/// use sensorkit_core::{Devices, SensorKit};
///
/// let mut kit = SensorKit::new(Devices::default());
/// kit.begin();
///
/// // Application loop, any cadence - the rate gate does the pacing
/// let snapshot = *kit.poll(4000);
/// assert_eq!(snapshot.t1, 0.0); // every device absent reads as zero
/// ```
pub struct SensorKit {
    power: Option<Box<dyn BoardPower>>,
    devices: Devices,
    snapshot: Snapshot,
    last_poll: Option<Timestamp>,
    poll_interval_ms: u64,
    ticks: Option<&'static TickTracker>,
    gps_stream: Option<Box<dyn ByteStream>>,
    failed: Vec<DeviceKind, MAX_DEVICES>,
    started: bool,
}

impl SensorKit {
    /// Create an engine around the given device set
    ///
    /// Nothing touches hardware until [`begin`](Self::begin).
    pub fn new(devices: Devices) -> Self {
        Self {
            power: None,
            devices,
            snapshot: Snapshot::default(),
            last_poll: None,
            poll_interval_ms: config::SENSOR_QUERY_INTERVAL_MS,
            ticks: None,
            gps_stream: None,
            failed: Vec::new(),
            started: false,
        }
    }

    /// Attach the board power-enable control
    pub fn with_power(mut self, power: Box<dyn BoardPower>) -> Self {
        self.power = Some(power);
        self
    }

    /// Override the minimum interval between sensor sweeps
    pub fn with_poll_interval(mut self, interval_ms: u64) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }

    /// Attach the anemometer tick tracker fed by the wind interrupt
    pub fn with_tick_tracker(mut self, ticks: &'static TickTracker) -> Self {
        self.ticks = Some(ticks);
        self
    }

    // ===== LIFECYCLE =====

    /// Power the board and initialize every provided device
    ///
    /// Devices are attempted in a fixed order: environmental sensors, light
    /// sensor, gas/ADC, inertial sensor, GPIO expander, RTC, GPS. A failed
    /// handshake releases the device and marks its handle Absent - the
    /// engine carries on with the rest. Calling `begin` on a started engine
    /// is a no-op.
    pub fn begin(&mut self) {
        if self.started {
            return;
        }

        if let Some(power) = self.power.as_mut() {
            power.power_on();
        }

        self.failed.clear();
        self.init_environmental();
        self.init_light();
        self.init_gas();
        self.init_adc();
        self.init_inertial();
        self.init_expander();
        self.init_rtc();
        self.init_gps();

        self.started = true;
        log_info!(
            "sensor kit up, {} device(s) failed init",
            self.failed.len()
        );
    }

    /// Release every device and power the board down
    ///
    /// Handles drop in reverse dependency order (expander-dependent devices
    /// before the expander itself, by `Devices` field order).
    pub fn end(&mut self) {
        self.devices = Devices::default();
        self.gps_stream = None;
        self.turn_off();
        self.started = false;
    }

    /// Drive the board enable line active, independent of device state
    pub fn turn_on(&mut self) {
        if let Some(power) = self.power.as_mut() {
            power.power_on();
        }
    }

    /// Drive the board enable line inactive, independent of device state
    pub fn turn_off(&mut self) {
        if let Some(power) = self.power.as_mut() {
            power.power_off();
        }
    }

    fn mark_failed(&mut self, device: DeviceKind) {
        log_warn!("{} failed to init, marking absent", device);
        // Capacity covers every kind; a duplicate push cannot occur because
        // each device is attempted once per begin()
        let _ = self.failed.push(device);
    }

    fn init_environmental(&mut self) {
        if let Some(mut dev) = self.devices.bme280.take() {
            if dev.init() {
                log_info!("{} online", DeviceKind::Bme280);
                self.devices.bme280 = Some(dev);
            } else {
                self.mark_failed(DeviceKind::Bme280);
            }
        }

        if let Some(mut dev) = self.devices.hdc1080.take() {
            if dev.init() {
                log_info!("{} online", DeviceKind::Hdc1080);
                self.devices.hdc1080 = Some(dev);
            } else {
                self.mark_failed(DeviceKind::Hdc1080);
            }
        }
    }

    fn init_light(&mut self) {
        if let Some(mut dev) = self.devices.light.take() {
            if dev.init() {
                // Board default: medium gain, shortest window. Bright-light
                // biased; applications re-tune through the trait if needed.
                dev.set_gain(Gain::Medium);
                dev.set_integration_time(IntegrationTime::Ms100);
                log_info!("{} online", DeviceKind::Tsl2591);
                self.devices.light = Some(dev);
            } else {
                self.mark_failed(DeviceKind::Tsl2591);
            }
        }
    }

    fn init_gas(&mut self) {
        let gas = core::mem::replace(&mut self.devices.gas, GasSource::Disabled);
        self.devices.gas = match gas {
            GasSource::Ccs811(mut dev) => match dev.init() {
                Ok(()) => {
                    log_info!("{} online", DeviceKind::Ccs811);
                    GasSource::Ccs811(dev)
                }
                Err(_) => {
                    self.mark_failed(DeviceKind::Ccs811);
                    GasSource::Disabled
                }
            },
            other => other,
        };
    }

    fn init_adc(&mut self) {
        if let Some(mut dev) = self.devices.adc.take() {
            if dev.init() {
                log_info!("{} online", DeviceKind::Adc);
                self.devices.adc = Some(dev);
            } else {
                self.mark_failed(DeviceKind::Adc);
            }
        }
    }

    fn init_inertial(&mut self) {
        if let Some(mut dev) = self.devices.imu.take() {
            if dev.init(config::IMU_ACCEL_GYRO_I2C_ADDR, config::IMU_MAG_I2C_ADDR) {
                log_info!("{} online", DeviceKind::Imu);
                self.devices.imu = Some(dev);
            } else {
                self.mark_failed(DeviceKind::Imu);
            }
        }
    }

    fn init_expander(&mut self) {
        if let Some(mut dev) = self.devices.expander.take() {
            if dev.init() {
                dev.set_pin_mode(config::MAGNETIC_SWITCH_PIN, PinMode::Input);
                log_info!("{} online", DeviceKind::GpioExpander);
                self.devices.expander = Some(dev);
            } else {
                self.mark_failed(DeviceKind::GpioExpander);
            }
        }
    }

    fn init_rtc(&mut self) {
        if let Some(mut dev) = self.devices.rtc.take() {
            if dev.init() {
                log_info!("{} online", DeviceKind::Rtc);
                self.devices.rtc = Some(dev);
            } else {
                self.mark_failed(DeviceKind::Rtc);
            }
        }
    }

    fn init_gps(&mut self) {
        if let Some(mut dev) = self.devices.gps.take() {
            if dev.init() {
                log_info!("{} online", DeviceKind::Gps);
                self.devices.gps = Some(dev);
            } else {
                self.mark_failed(DeviceKind::Gps);
            }
        }
    }

    // ===== POLLING CYCLE =====

    /// Advance the snapshot, rate-gated
    ///
    /// `now` is the caller's monotonic time in milliseconds. If less than
    /// the configured interval has passed since the last sweep this is a
    /// no-op returning the unchanged snapshot. Otherwise every Present
    /// device is read exactly once, derived values are recomputed, and
    /// every Absent device's fields are written to their zero defaults.
    pub fn poll(&mut self, now: Timestamp) -> &Snapshot {
        if let Some(last) = self.last_poll {
            if now.saturating_sub(last) < self.poll_interval_ms {
                return &self.snapshot;
            }
        }
        self.last_poll = Some(now);

        self.read_environmental();
        self.read_light();
        self.read_gas();
        self.read_inertial();
        self.read_magnetic_switch();
        self.read_wind();
        self.pump_gps();

        &self.snapshot
    }

    fn read_environmental(&mut self) {
        match self.devices.bme280.as_mut() {
            Some(dev) => {
                self.snapshot.t1 = dev.read_temperature();
                self.snapshot.p = dev.read_pressure();
                self.snapshot.h1 = dev.read_humidity();
            }
            None => {
                self.snapshot.t1 = 0.0;
                self.snapshot.p = 0.0;
                self.snapshot.h1 = 0.0;
            }
        }

        match self.devices.hdc1080.as_mut() {
            Some(dev) => {
                self.snapshot.t2 = dev.read_temperature();
                self.snapshot.h2 = dev.read_humidity();
            }
            None => {
                self.snapshot.t2 = 0.0;
                self.snapshot.h2 = 0.0;
            }
        }
    }

    fn read_light(&mut self) {
        self.snapshot.lux = match self.devices.light.as_mut() {
            Some(dev) => dev.luminosity() as f32,
            None => 0.0,
        };
    }

    fn read_gas(&mut self) {
        match &mut self.devices.gas {
            GasSource::Ccs811(dev) => {
                // Not ready is a transient, not a failure: the previous
                // cycle's values stay in place until the sensor latches a
                // fresh result set.
                if dev.data_available() {
                    dev.read_results();
                    self.snapshot.gas = dev.tvoc();
                    self.snapshot.co2 = dev.co2();
                }
            }
            GasSource::AdcChannel(channel) => {
                let channel = *channel;
                self.snapshot.gas = match self.devices.adc.as_mut() {
                    Some(adc) => adc.read(channel),
                    None => 0,
                };
                self.snapshot.co2 = 0;
            }
            GasSource::Disabled => {
                self.snapshot.gas = 0;
                self.snapshot.co2 = 0;
            }
        }
    }

    fn read_inertial(&mut self) {
        match self.devices.imu.as_mut() {
            Some(imu) => {
                self.snapshot.accel = Axes {
                    x: imu.accel_x(),
                    y: imu.accel_y(),
                    z: imu.accel_z(),
                };
                self.snapshot.gyro = Axes {
                    x: imu.gyro_x(),
                    y: imu.gyro_y(),
                    z: imu.gyro_z(),
                };
                let mag = Axes {
                    x: imu.mag_x(),
                    y: imu.mag_y(),
                    z: imu.mag_z(),
                };
                self.snapshot.mag_heading = calc::mag_heading(mag.x, mag.y, mag.z);
                self.snapshot.mag = mag;
            }
            None => {
                self.snapshot.accel = Axes::default();
                self.snapshot.gyro = Axes::default();
                self.snapshot.mag = Axes::default();
                self.snapshot.mag_heading = 0.0;
            }
        }
    }

    fn read_magnetic_switch(&mut self) {
        self.snapshot.magnetic = match self.devices.expander.as_mut() {
            Some(expander) => expander.read_pin(config::MAGNETIC_SWITCH_PIN).is_high(),
            None => false,
        };
    }

    fn read_wind(&mut self) {
        self.snapshot.wind_speed =
            calc::wind_speed_mph(self.ticks.and_then(TickTracker::interval_ms));
    }

    fn pump_gps(&mut self) {
        let gps = match self.devices.gps.as_mut() {
            Some(gps) => gps,
            None => {
                self.snapshot.gps = GpsFix::default();
                return;
            }
        };

        if let Some(stream) = self.gps_stream.as_mut() {
            // Bounded drain keeps the cycle time predictable even when the
            // receiver is chatty
            for _ in 0..config::GPS_PUMP_BUDGET {
                match stream.poll_next() {
                    Ok(byte) => gps.feed(byte),
                    Err(_) => break,
                }
            }
        }

        // No fix yet is a transient: keep the previous fix
        if gps.has_fix() {
            self.snapshot.gps = gps.read_fix();
        }
    }

    // ===== ACCESSORS =====

    /// The latest aggregate of all sensor readings
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Wall-clock time from the RTC, or 0 if the RTC is Absent
    pub fn clock_time(&mut self) -> Timestamp {
        match self.devices.rtc.as_mut() {
            Some(rtc) => rtc.now(),
            None => 0,
        }
    }

    /// Single ADC conversion, or 0 if the ADC is Absent
    pub fn read_adc(&mut self, channel: u8) -> u16 {
        match self.devices.adc.as_mut() {
            Some(adc) => adc.read(channel),
            None => 0,
        }
    }

    /// Bind the byte stream the GPS parser consumes
    ///
    /// Replaces any previously bound stream. The stream is drained (within
    /// a per-cycle budget) during each sweep.
    pub fn init_gps_stream(&mut self, stream: Box<dyn ByteStream>) {
        self.gps_stream = Some(stream);
    }

    /// Whether a device handle is Present
    pub fn is_present(&self, device: DeviceKind) -> bool {
        match device {
            DeviceKind::Bme280 => self.devices.bme280.is_some(),
            DeviceKind::Hdc1080 => self.devices.hdc1080.is_some(),
            DeviceKind::Tsl2591 => self.devices.light.is_some(),
            DeviceKind::Ccs811 => matches!(self.devices.gas, GasSource::Ccs811(_)),
            DeviceKind::Adc => self.devices.adc.is_some(),
            DeviceKind::Imu => self.devices.imu.is_some(),
            DeviceKind::GpioExpander => self.devices.expander.is_some(),
            DeviceKind::Rtc => self.devices.rtc.is_some(),
            DeviceKind::Gps => self.devices.gps.is_some(),
        }
    }

    /// Devices whose init handshake failed during the last `begin`
    pub fn failed_devices(&self) -> &[DeviceKind] {
        &self.failed
    }
}
