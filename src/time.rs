//! Time abstraction traits for platform-agnostic timing.
//!
//! The animator only reads the clock to decide whether another cycle may
//! start. Sleeping goes through [`embedded_hal::delay::DelayNs`].

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

impl TimeDuration for core::time::Duration {
    fn as_millis(&self) -> u64 {
        // Durations beyond u64 milliseconds are far past any animation run.
        u64::try_from(core::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
    }
}

/// Point in time after which an animation stops starting new cycles.
///
/// Stored as a start instant plus a length rather than an absolute instant,
/// so a long duration can never overflow a narrow hardware timer.
#[derive(Debug, Clone, Copy)]
pub struct Deadline<I: TimeInstant> {
    start: I,
    duration_ms: u64,
}

impl<I: TimeInstant> Deadline<I> {
    /// Starts a deadline `duration_ms` from the current time of `time_source`.
    pub fn after<T: TimeSource<I>>(time_source: &T, duration_ms: u32) -> Self {
        Self {
            start: time_source.now(),
            duration_ms: u64::from(duration_ms),
        }
    }

    /// Returns true once the requested duration has fully elapsed.
    ///
    /// A zero-length deadline has always passed.
    pub fn has_passed<T: TimeSource<I>>(&self, time_source: &T) -> bool {
        self.elapsed_ms(time_source) >= self.duration_ms
    }

    /// Milliseconds elapsed since the deadline was started.
    pub fn elapsed_ms<T: TimeSource<I>>(&self, time_source: &T) -> u64 {
        time_source.now().duration_since(self.start).as_millis()
    }
}

#[cfg(feature = "std")]
pub use self::host::{SystemClock, ThreadDelay};

#[cfg(feature = "std")]
mod host {
    use super::{TimeInstant, TimeSource};
    use embedded_hal::delay::DelayNs;

    impl TimeInstant for std::time::Instant {
        type Duration = core::time::Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }
    }

    /// Monotonic host clock backed by [`std::time::Instant`].
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SystemClock;

    impl TimeSource<std::time::Instant> for SystemClock {
        fn now(&self) -> std::time::Instant {
            std::time::Instant::now()
        }
    }

    /// Blocking delay that parks the current thread.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ThreadDelay;

    impl DelayNs for ThreadDelay {
        fn delay_ns(&mut self, ns: u32) {
            std::thread::sleep(core::time::Duration::from_nanos(u64::from(ns)));
        }

        fn delay_ms(&mut self, ms: u32) {
            std::thread::sleep(core::time::Duration::from_millis(u64::from(ms)));
        }
    }
}
