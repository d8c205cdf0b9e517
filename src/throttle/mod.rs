// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sliding-window throttle for the maintenance-mode login endpoint.
//!
//! The surrounding HTTP handler is out of scope; this is the attempt ledger
//! it consults. Time is always passed in by the caller, never read
//! internally, so behavior is deterministic under test.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use smallvec::SmallVec;
use smol_str::SmolStr;

/// Outcome of one registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// Attempt recorded; `remaining` more are allowed inside the window.
    Allowed { remaining: usize },
    /// Attempt refused; retry once `retry_after` has elapsed.
    Limited { retry_after: Duration },
}

/// Per-key sliding-window attempt limiter.
///
/// An attempt counts against a key until the window has fully elapsed
/// (an attempt aged exactly one window no longer counts).
#[derive(Debug, Clone)]
pub struct LoginThrottle {
    max_attempts: usize,
    window: Duration,
    attempts: BTreeMap<SmolStr, SmallVec<[Instant; 8]>>,
}

impl LoginThrottle {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self { max_attempts, window, attempts: BTreeMap::new() }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Registers an attempt for `key` at `now` and decides its fate.
    ///
    /// Expired attempts are dropped first; if the key is at capacity the
    /// attempt is refused and `retry_after` reports how long until the
    /// oldest counted attempt expires.
    pub fn register(&mut self, key: &str, now: Instant) -> Attempt {
        let window = self.window;
        let log = self.attempts.entry(SmolStr::new(key)).or_default();
        log.retain(|at| now.saturating_duration_since(*at) < window);

        if log.len() >= self.max_attempts {
            let retry_after = log.first().map_or(window, |oldest| {
                window.saturating_sub(now.saturating_duration_since(*oldest))
            });
            return Attempt::Limited { retry_after };
        }

        log.push(now);
        Attempt::Allowed { remaining: self.max_attempts - log.len() }
    }

    /// Clears a key, e.g. after a successful login.
    pub fn reset(&mut self, key: &str) {
        self.attempts.remove(key);
    }

    /// Evicts keys whose attempts have all expired.
    pub fn prune(&mut self, now: Instant) {
        let window = self.window;
        self.attempts.retain(|_, log| {
            log.retain(|at| now.saturating_duration_since(*at) < window);
            !log.is_empty()
        });
    }

    /// Number of keys currently holding unexpired attempts or awaiting
    /// [`prune`](Self::prune).
    pub fn tracked_keys(&self) -> usize {
        self.attempts.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Attempt, LoginThrottle};

    const WINDOW: Duration = Duration::from_secs(300);

    fn throttle() -> LoginThrottle {
        LoginThrottle::new(3, WINDOW)
    }

    #[test]
    fn allows_up_to_max_attempts() {
        let mut throttle = throttle();
        let now = Instant::now();

        assert_eq!(throttle.register("10.0.0.1", now), Attempt::Allowed { remaining: 2 });
        assert_eq!(throttle.register("10.0.0.1", now), Attempt::Allowed { remaining: 1 });
        assert_eq!(throttle.register("10.0.0.1", now), Attempt::Allowed { remaining: 0 });
        assert!(matches!(throttle.register("10.0.0.1", now), Attempt::Limited { .. }));
    }

    #[test]
    fn keys_are_limited_independently() {
        let mut throttle = throttle();
        let now = Instant::now();

        for _ in 0..3 {
            throttle.register("10.0.0.1", now);
        }
        assert!(matches!(throttle.register("10.0.0.1", now), Attempt::Limited { .. }));
        assert_eq!(throttle.register("10.0.0.2", now), Attempt::Allowed { remaining: 2 });
    }

    #[test]
    fn retry_after_counts_down_from_the_oldest_attempt() {
        let mut throttle = throttle();
        let start = Instant::now();

        for _ in 0..3 {
            throttle.register("10.0.0.1", start);
        }

        let later = start + Duration::from_secs(100);
        match throttle.register("10.0.0.1", later) {
            Attempt::Limited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(200));
            }
            Attempt::Allowed { .. } => panic!("expected limited"),
        }
    }

    #[test]
    fn attempts_expire_after_exactly_one_window() {
        let mut throttle = throttle();
        let start = Instant::now();

        for _ in 0..3 {
            throttle.register("10.0.0.1", start);
        }

        let just_before = start + WINDOW - Duration::from_millis(1);
        assert!(matches!(throttle.register("10.0.0.1", just_before), Attempt::Limited { .. }));

        let at_expiry = start + WINDOW;
        assert_eq!(throttle.register("10.0.0.1", at_expiry), Attempt::Allowed { remaining: 2 });
    }

    #[test]
    fn reset_clears_a_key() {
        let mut throttle = throttle();
        let now = Instant::now();

        for _ in 0..3 {
            throttle.register("10.0.0.1", now);
        }
        throttle.reset("10.0.0.1");
        assert_eq!(throttle.register("10.0.0.1", now), Attempt::Allowed { remaining: 2 });
    }

    #[test]
    fn prune_evicts_fully_expired_keys() {
        let mut throttle = throttle();
        let start = Instant::now();

        throttle.register("10.0.0.1", start);
        throttle.register("10.0.0.2", start + Duration::from_secs(250));
        assert_eq!(throttle.tracked_keys(), 2);

        throttle.prune(start + WINDOW);
        assert_eq!(throttle.tracked_keys(), 1);

        throttle.prune(start + WINDOW + Duration::from_secs(250));
        assert_eq!(throttle.tracked_keys(), 0);
    }

    #[test]
    fn zero_capacity_limits_everything() {
        let mut throttle = LoginThrottle::new(0, WINDOW);
        let now = Instant::now();

        match throttle.register("10.0.0.1", now) {
            Attempt::Limited { retry_after } => assert_eq!(retry_after, WINDOW),
            Attempt::Allowed { .. } => panic!("expected limited"),
        }
    }
}
