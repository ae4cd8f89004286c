use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of the gateway's session timeline, in seconds.
///
/// Expiry timestamps stored in session records are read against this
/// clock and nothing else.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> f64;
}

/// Monotonic process-local clock.
///
/// Reports seconds elapsed since the clock was created. Wall-clock
/// adjustments never move it backwards, but a process restart resets the
/// timeline, so records persisted by a previous run expire relative to
/// the new origin.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Manually driven clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    now_bits: AtomicU64,
}

impl ManualClock {
    pub fn new(now: f64) -> Self {
        Self {
            now_bits: AtomicU64::new(now.to_bits()),
        }
    }

    pub fn set(&self, now: f64) {
        self.now_bits.store(now.to_bits(), Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: f64) {
        let advanced = self.now() + seconds;
        self.now_bits.store(advanced.to_bits(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        f64::from_bits(self.now_bits.load(Ordering::SeqCst))
    }
}
