//! Pacing abstraction for bounded retry loops.

use std::thread;
use std::time::Duration;

/// Abstraction over waiting between retries, so tests never sleep.
pub trait Pacer: Send + Sync {
    /// Block the current thread for roughly `delay`.
    fn pause(&self, delay: Duration);
}

/// Production pacer that delegates to `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleepPacer;

impl Pacer for ThreadSleepPacer {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_thread_sleep_pacer_waits_at_least_delay() {
        let start = Instant::now();
        ThreadSleepPacer.pause(Duration::from_millis(2));
        assert!(start.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn test_thread_sleep_pacer_zero_delay_returns() {
        ThreadSleepPacer.pause(Duration::ZERO);
    }
}
