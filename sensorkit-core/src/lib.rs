//! Sensor orchestration engine for the SensorKit multi-sensor board
//!
//! Initializes a heterogeneous set of I2C/analog/interrupt-driven sensors,
//! tolerates partial hardware failure, polls everything on a rate-limited
//! cadence, and exposes one consistent snapshot of environmental and
//! inertial readings.
//!
//! Key constraints:
//! - Single cooperative control thread; the only ISR feeds one atomic tracker
//! - A failed device degrades its readings to zero, never the whole board
//! - No blocking beyond a single bus transaction, no retry loops
//!
//! ```rust
//! use sensorkit_core::{Devices, SensorKit};
//!
//! let mut kit = SensorKit::new(Devices::default());
//! kit.begin();
//!
//! // The rate gate paces sensing regardless of loop speed
//! let snapshot = kit.poll(4000);
//! assert_eq!(snapshot.wind_speed, 0.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod calc;
pub mod config;
pub mod errors;
pub mod kit;
pub mod snapshot;
pub mod tick;
pub mod time;
pub mod traits;

// Public API
pub use errors::{KitError, KitResult, StreamError};
pub use kit::{Devices, GasSource, SensorKit};
pub use snapshot::{Axes, GpsFix, Snapshot};
pub use tick::TickTracker;
pub use traits::DeviceKind;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
