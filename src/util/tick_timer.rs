//! Fixed-interval tick source for the wobble timer.

use web_time::{Duration, Instant};

/// Fixed-interval tick source gated on host activity.
///
/// Boundaries keep advancing while the host is inactive, but ticks that
/// fall due then are dropped: there is no catch-up when the host becomes
/// active again, the next natural boundary fires as usual.
#[derive(Debug, Clone)]
pub struct TickTimer {
    /// Interval between tick boundaries.
    interval: Duration,
    /// Timestamp of the most recent boundary.
    last_boundary: Instant,
}

impl TickTimer {
    /// Create a timer whose first boundary is one interval after `start`.
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_boundary: start,
        }
    }

    /// Tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance to `now`. Returns true if at least one boundary passed and
    /// the host is `active`; at most one tick is reported per call.
    pub fn poll(&mut self, now: Instant, active: bool) -> bool {
        if self.interval.is_zero() {
            return active;
        }
        let elapsed = now.saturating_duration_since(self.last_boundary);
        let boundaries = elapsed.as_nanos() / self.interval.as_nanos();
        if boundaries == 0 {
            return false;
        }
        // Skip every missed boundary in one step.
        let skipped = self.interval.as_nanos() * boundaries;
        self.last_boundary += Duration::from_nanos(
            u64::try_from(skipped).unwrap_or(u64::MAX),
        );
        active
    }
}
