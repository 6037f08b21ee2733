//! Interrupt Tick Tracker for the Anemometer
//!
//! ## Overview
//!
//! The anemometer raises one rising edge per cup rotation. The interrupt
//! handler records edges here; the polling cycle reads the interval between
//! the two most recent edges and hands it to the wind-speed calculator.
//!
//! ## Concurrency Contract
//!
//! The tracker is written from interrupt context and read from the main
//! control thread, so every shared value is a single word-sized atomic:
//!
//! - The ISR calls [`record_tick`](TickTracker::record_tick) - a handful of
//!   atomic operations, bounded time, no bus traffic. I2C is not
//!   interrupt-safe on this board and must never be touched from here.
//! - The main thread calls [`interval_ms`](TickTracker::interval_ms) - one
//!   Acquire load, never torn.
//!
//! No lock, no critical section, no state a handler could observe
//! half-updated.
//!
//! ## State Machine
//!
//! Two states: *NoTickYet* (initial) and *HaveInterval*. The first edge only
//! arms the tracker; an interval exists once two edges have been seen, and
//! every edge after that replaces it with the latest rotation period.
//!
//! Timestamps are 32-bit milliseconds and wrap after ~49 days; wrapping
//! subtraction keeps intervals correct across the wrap.
//!
//! ## Example
//!
//! ```rust
//! use sensorkit_core::tick::TickTracker;
//!
//! static WIND_TICKS: TickTracker = TickTracker::new();
//!
//! // ISR on the anemometer pin:
//! fn wind_isr(now_ms: u32) {
//!     WIND_TICKS.record_tick(now_ms);
//! }
//!
//! // Main thread:
//! # wind_isr(0); wind_isr(500);
//! let period = WIND_TICKS.interval_ms();
//! assert_eq!(period, Some(500));
//! ```

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Sentinel for "no interval recorded yet"
///
/// A real interval of u32::MAX ms would be ~49 days between rotations;
/// treating it as "never" costs nothing.
const NEVER: u32 = u32::MAX;

/// Interrupt-fed rotation tick state
///
/// All-atomic, `const`-constructible, safe to place in a `static` shared
/// between an ISR and the main loop.
pub struct TickTracker {
    /// Timestamp of the most recent edge (ISR-owned)
    last_tick_ms: AtomicU32,
    /// True once at least one edge has been seen
    armed: AtomicBool,
    /// Duration between the two most recent edges (read by the main thread)
    interval_ms: AtomicU32,
}

impl TickTracker {
    /// Create a tracker in the *NoTickYet* state
    pub const fn new() -> Self {
        Self {
            last_tick_ms: AtomicU32::new(0),
            armed: AtomicBool::new(false),
            interval_ms: AtomicU32::new(NEVER),
        }
    }

    /// Record a rising edge at `now_ms`
    ///
    /// Call from the anemometer interrupt handler only. The first edge arms
    /// the tracker; each subsequent edge publishes the elapsed interval.
    pub fn record_tick(&self, now_ms: u32) {
        let last = self.last_tick_ms.swap(now_ms, Ordering::Relaxed);

        if self.armed.swap(true, Ordering::Relaxed) {
            // Release pairs with the Acquire load in interval_ms()
            self.interval_ms
                .store(now_ms.wrapping_sub(last), Ordering::Release);
        }
    }

    /// Duration between the two most recent edges, if any
    ///
    /// Returns `None` until two edges have been recorded. Safe to call from
    /// the main thread while the ISR keeps firing.
    pub fn interval_ms(&self) -> Option<u32> {
        match self.interval_ms.load(Ordering::Acquire) {
            NEVER => None,
            ms => Some(ms),
        }
    }

    /// Forget all recorded edges and return to *NoTickYet*
    ///
    /// Not interrupt-safe; call only with the tick interrupt masked.
    pub fn reset(&self) {
        self.armed.store(false, Ordering::Relaxed);
        self.interval_ms.store(NEVER, Ordering::Release);
    }
}

impl Default for TickTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_interval_before_two_edges() {
        let ticks = TickTracker::new();
        assert_eq!(ticks.interval_ms(), None);

        ticks.record_tick(1000);
        assert_eq!(ticks.interval_ms(), None);
    }

    #[test]
    fn interval_between_edges() {
        let ticks = TickTracker::new();
        ticks.record_tick(1000);
        ticks.record_tick(1500);
        assert_eq!(ticks.interval_ms(), Some(500));

        // Every further edge replaces the interval
        ticks.record_tick(1750);
        assert_eq!(ticks.interval_ms(), Some(250));
    }

    #[test]
    fn interval_survives_timestamp_wrap() {
        let ticks = TickTracker::new();
        ticks.record_tick(u32::MAX - 100);
        ticks.record_tick(400);
        assert_eq!(ticks.interval_ms(), Some(501));
    }

    #[test]
    fn reset_returns_to_no_tick() {
        let ticks = TickTracker::new();
        ticks.record_tick(0);
        ticks.record_tick(500);
        assert_eq!(ticks.interval_ms(), Some(500));

        ticks.reset();
        assert_eq!(ticks.interval_ms(), None);

        // Needs two fresh edges again
        ticks.record_tick(2000);
        assert_eq!(ticks.interval_ms(), None);
        ticks.record_tick(2300);
        assert_eq!(ticks.interval_ms(), Some(300));
    }

    #[test]
    fn usable_from_a_static() {
        static TICKS: TickTracker = TickTracker::new();
        TICKS.record_tick(10);
        TICKS.record_tick(30);
        assert_eq!(TICKS.interval_ms(), Some(20));
        TICKS.reset();
    }
}
