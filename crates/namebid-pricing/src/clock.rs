//! Time sources.
//!
//! Pricing functions take `now` as an argument. A [`Clock`] is only consulted
//! at the outermost caller, through [`crate::oracle::PriceOracle`].

use std::sync::atomic::{AtomicU64, Ordering};

use namebid_types::Timestamp;

/// Source of the current unix time in seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// A clock that only moves when told to. Used by tests and by `--at`.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicU64,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::Relaxed);
    }

    /// Move forward by `secs`, saturating at `u64::MAX`.
    pub fn advance(&self, secs: u64) {
        let mut current = self.now.load(Ordering::Relaxed);
        loop {
            let next = current.saturating_add(secs);
            match self
                .now
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::Relaxed)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2023-11-14
        assert!(SystemClock.now() > 1_700_000_000);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(100);
        assert_eq!(clock.now(), 100);
        clock.advance(5);
        assert_eq!(clock.now(), 105);
        clock.set(7);
        assert_eq!(clock.now(), 7);
        clock.set(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now(), u64::MAX);
    }

    #[test]
    fn test_concurrent_advance() {
        let clock = std::sync::Arc::new(FixedClock::new(0));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let clock = clock.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        clock.advance(1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("advance thread");
        }
        assert_eq!(clock.now(), 4_000);
    }

    #[test]
    fn test_shared_clock() {
        let clock = std::sync::Arc::new(FixedClock::new(1));
        let shared = clock.clone();
        clock.advance(1);
        assert_eq!(shared.now(), 2);
    }
}
