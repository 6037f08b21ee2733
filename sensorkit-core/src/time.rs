//! Time primitives for the polling engine
//!
//! The engine never reads a clock itself: the application loop passes the
//! current monotonic time into [`poll`](crate::kit::SensorKit::poll), and the
//! real-time clock (when present) answers wall-clock queries. What lives here
//! is the shared timestamp type and a small clock abstraction used by callers
//! and tests to produce those timestamps.

/// Timestamp in milliseconds since device boot (monotonic) or epoch (RTC)
pub type Timestamp = u64;

/// Source of monotonic time for driving the polling loop
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Fixed time source for testing
///
/// Starts at a known timestamp and only moves when told to, which makes
/// rate-gate behavior deterministic in tests.
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a fixed clock at the given timestamp
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10_000);
        assert_eq!(time.now(), 10_000);
    }
}
