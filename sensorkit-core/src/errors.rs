//! Error Types for the Sensor Orchestration Engine
//!
//! ## Design Philosophy
//!
//! The engine has no crash/abort path in normal operation, so errors here
//! describe conditions, not emergencies:
//!
//! 1. **Initialization failure**: a device handshake failed or the device was
//!    never configured. Handled locally by marking the handle Absent and
//!    degrading its snapshot fields to zero. Never fatal, never retried.
//!
//! 2. **Transient read failure**: a single read returned no fresh data (the gas
//!    sensor's "not ready yet"). The affected snapshot fields keep the value
//!    from the previous successful cycle.
//!
//! 3. **Bus failure**: the I2C bus is non-responsive. Surfaced by drivers as a
//!    failed init or an error sentinel and treated identically to an
//!    initialization failure.
//!
//! All variants are `Copy` and carry inline data only - no heap allocation,
//! deterministic memory usage on the hot path.

use thiserror_no_std::Error;

use crate::traits::DeviceKind;

/// Result type for engine operations
pub type KitResult<T> = Result<T, KitError>;

/// Engine errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitError {
    /// Device handshake failed during `begin()`
    #[error("{device} failed its init handshake")]
    InitFailed {
        /// Which device failed
        device: DeviceKind,
    },

    /// Operation requires a device that is Absent
    #[error("{device} is absent")]
    DeviceAbsent {
        /// Which device is missing
        device: DeviceKind,
    },

    /// Sensor has no fresh data for this cycle
    #[error("sensor data not ready")]
    NotReady,

    /// Bus transaction failed
    #[error("bus transaction failed")]
    Bus,
}

/// Errors produced by byte streams feeding the GPS parser
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The stream has no more bytes and never will
    #[error("end of stream")]
    EndOfStream,
}

#[cfg(feature = "defmt")]
impl defmt::Format for KitError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InitFailed { device } =>
                defmt::write!(fmt, "{} init failed", device.name()),
            Self::DeviceAbsent { device } =>
                defmt::write!(fmt, "{} absent", device.name()),
            Self::NotReady =>
                defmt::write!(fmt, "data not ready"),
            Self::Bus =>
                defmt::write!(fmt, "bus failure"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StreamError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EndOfStream => defmt::write!(fmt, "end of stream"),
        }
    }
}
