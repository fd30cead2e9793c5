//! Elapsed-time source for log timestamps.
//!
//! The origin is captured the first time any timestamp is taken, so stamps
//! are relative to the first log-related call in the process, never wall-clock.

use std::sync::OnceLock;
use std::time::Instant;

static ORIGIN: OnceLock<Instant> = OnceLock::new();

/// The instant all timestamps are measured from. Initialized on first call.
#[must_use]
pub fn origin() -> Instant {
    *ORIGIN.get_or_init(Instant::now)
}

/// Microseconds since [`origin`]. Monotonic, so unaffected by system clock changes.
#[must_use]
pub fn elapsed_us() -> u64 {
    let micros = origin().elapsed().as_micros();
    u64::try_from(micros).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_stable() {
        assert_eq!(origin(), origin());
    }

    #[test]
    fn elapsed_never_goes_backwards() {
        let mut last = elapsed_us();
        for _ in 0..1000 {
            let now = elapsed_us();
            assert!(now >= last);
            last = now;
        }
    }
}
