//! Wraparound-safe interval bookkeeping.
//!
//! The driver's millisecond counter is a `u32` that rolls over to zero
//! roughly every 49.7 days.  Every cooldown in the engine goes through
//! [`ElapsedTimer`] so that rollover never yields a huge or negative
//! duration.

/// Milliseconds since boot, wrapping at `u32::MAX`.
pub type Millis = u32;

/// Remembers when an event last happened and measures time since then.
///
/// A stored timestamp greater than the current reading means the counter
/// has wrapped.  The timer then restarts its window at `now` instead of
/// reporting an elapsed time that spans the rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedTimer {
    last_ms: Millis,
}

impl ElapsedTimer {
    /// Timer whose window starts at `since`.
    pub const fn starting_at(since: Millis) -> Self {
        Self { last_ms: since }
    }

    /// Milliseconds since the last [`mark`](Self::mark).
    ///
    /// Rebases the window to `now` first if the counter wrapped.
    pub fn elapsed(&mut self, now: Millis) -> Millis {
        if now < self.last_ms {
            log::debug!(
                "Timer: counter wrapped (last={}ms, now={}ms), restarting window",
                self.last_ms,
                now
            );
            self.last_ms = now;
        }
        now - self.last_ms
    }

    /// `true` once strictly more than `interval` has elapsed.
    pub fn expired(&mut self, now: Millis, interval: Millis) -> bool {
        self.elapsed(now) > interval
    }

    /// Start a new window at `now`.
    pub fn mark(&mut self, now: Millis) {
        self.last_ms = now;
    }

    /// Start of the current window.
    pub fn last(&self) -> Millis {
        self.last_ms
    }
}
