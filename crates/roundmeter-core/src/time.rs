//! Wraparound-safe deadlines on a 32-bit millisecond counter.
//!
//! The platform clock is a free-running `u32` that overflows after ~49.7
//! days. Deadlines are compared through the signed difference of the two
//! counter values, which stays correct across the overflow as long as the
//! deadline is less than ~24.8 days away.

/// A point on the wrapping millisecond timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(u32);

impl Deadline {
    pub const fn at(ms: u32) -> Self {
        Self(ms)
    }

    /// Deadline `interval_ms` after `now`, wrapping at `u32::MAX`.
    pub const fn after(now: u32, interval_ms: u32) -> Self {
        Self(now.wrapping_add(interval_ms))
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// True once `now` has reached or passed the deadline.
    pub const fn has_passed(self, now: u32) -> bool {
        (now.wrapping_sub(self.0) as i32) >= 0
    }
}

/// Longest interval a [`FetchTimer`] keeps, the furthest a deadline can be
/// ahead of the counter and still compare correctly.
pub const MAX_INTERVAL_MS: u32 = i32::MAX as u32;

/// Refresh cadence of one data source.
///
/// A fresh timer is due immediately. After servicing, the next deadline is
/// `now + interval` with `now` taken when the refresh finished, so time spent
/// fetching and any missed periods are dropped rather than caught up.
#[derive(Debug, Clone, Copy)]
pub struct FetchTimer {
    interval_ms: u32,
    next: Option<Deadline>,
}

impl FetchTimer {
    /// Intervals are kept between 1 ms and [`MAX_INTERVAL_MS`] so a serviced
    /// deadline is always in the future.
    pub const fn new(interval_ms: u32) -> Self {
        let interval_ms = if interval_ms == 0 {
            1
        } else if interval_ms > MAX_INTERVAL_MS {
            MAX_INTERVAL_MS
        } else {
            interval_ms
        };
        Self {
            interval_ms,
            next: None,
        }
    }

    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub const fn next_deadline(&self) -> Option<Deadline> {
        self.next
    }

    pub const fn is_due(&self, now: u32) -> bool {
        match self.next {
            None => true,
            Some(deadline) => deadline.has_passed(now),
        }
    }

    pub fn reschedule(&mut self, now: u32) -> Deadline {
        let deadline = Deadline::after(now, self.interval_ms);
        self.next = Some(deadline);
        deadline
    }
}
