//! Scroll event sampling.

use std::time::{Duration, Instant};

/// Minimum spacing between accepted scroll samples (one 60 Hz frame)
pub const SCROLL_EVENT_THROTTLE: Duration = Duration::from_millis(16);

/// What the caller should do with one scroll event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollSample {
    /// Apply this offset now
    Apply(f64),
    /// Held as pending; call [`ScrollSampler::flush`] after this delay
    Defer(Duration),
    /// Replaced an already pending offset; its flush is already scheduled
    Coalesced,
    /// Not a usable offset
    Ignored,
}

/// Throttles scroll events to one per interval without losing the last one.
///
/// Events inside the interval replace a pending offset that is delivered
/// by [`ScrollSampler::flush`] once the interval has passed, so the final
/// resting offset is always applied. Offsets pass through unclamped;
/// negative overscroll is left to the clamped header interpolation.
#[derive(Clone, Debug)]
pub struct ScrollSampler {
    interval: Duration,
    last_accepted: Option<Instant>,
    pending: Option<f64>,
}

impl ScrollSampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn pending(&self) -> Option<f64> {
        self.pending
    }

    pub fn offer(&mut self, offset: f64, now: Instant) -> ScrollSample {
        if !offset.is_finite() {
            return ScrollSample::Ignored;
        }
        match self.last_accepted {
            Some(last) if now.saturating_duration_since(last) < self.interval => {
                let already_pending = self.pending.replace(offset).is_some();
                if already_pending {
                    ScrollSample::Coalesced
                } else {
                    ScrollSample::Defer(self.interval - now.saturating_duration_since(last))
                }
            }
            _ => {
                self.last_accepted = Some(now);
                self.pending = None;
                ScrollSample::Apply(offset)
            }
        }
    }

    /// Deliver the pending offset, if a later accepted event has not
    /// superseded it.
    pub fn flush(&mut self, now: Instant) -> Option<f64> {
        let offset = self.pending.take()?;
        self.last_accepted = Some(now);
        Some(offset)
    }
}

impl Default for ScrollSampler {
    fn default() -> Self {
        Self::new(SCROLL_EVENT_THROTTLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Feeds events and runs deferred flushes at their deadlines; returns
    /// the last applied offset.
    fn settle(events: &[(f64, u64)]) -> Option<f64> {
        let mut sampler = ScrollSampler::default();
        let t0 = Instant::now();
        let mut applied = None;
        let mut flush_at: Option<Instant> = None;

        for &(offset, at) in events {
            let now = t0 + ms(at);
            if let Some(deadline) = flush_at.filter(|d| *d <= now) {
                if let Some(v) = sampler.flush(deadline) {
                    applied = Some(v);
                }
                flush_at = None;
            }
            match sampler.offer(offset, now) {
                ScrollSample::Apply(v) => applied = Some(v),
                ScrollSample::Defer(wait) => flush_at = Some(now + wait),
                ScrollSample::Coalesced | ScrollSample::Ignored => {}
            }
        }
        if let Some(deadline) = flush_at {
            if let Some(v) = sampler.flush(deadline) {
                applied = Some(v);
            }
        }
        applied
    }

    #[test]
    fn first_event_always_passes() {
        let mut sampler = ScrollSampler::default();
        assert_eq!(sampler.offer(12.0, Instant::now()), ScrollSample::Apply(12.0));
    }

    #[test]
    fn events_inside_interval_are_deferred() {
        let mut sampler = ScrollSampler::default();
        let t0 = Instant::now();
        assert_eq!(sampler.offer(1.0, t0), ScrollSample::Apply(1.0));
        assert_eq!(sampler.offer(2.0, t0 + ms(5)), ScrollSample::Defer(ms(11)));
        assert_eq!(sampler.offer(3.0, t0 + ms(15)), ScrollSample::Coalesced);
        assert_eq!(sampler.pending(), Some(3.0));
        assert_eq!(sampler.offer(4.0, t0 + ms(16)), ScrollSample::Apply(4.0));
        assert_eq!(sampler.pending(), None);
    }

    #[test]
    fn final_offset_is_applied_after_interval() {
        // 0 is the resting scrollTop, arriving 10 ms after an accepted event
        let applied = settle(&[(120.0, 0), (60.0, 16), (0.0, 26)]);
        assert_eq!(applied, Some(0.0));
    }

    #[test]
    fn burst_settles_on_last_offset() {
        let events: Vec<(f64, u64)> = (0..40).map(|i| (i as f64 * 7.5, i * 3)).collect();
        assert_eq!(settle(&events), Some(39.0 * 7.5));
    }

    #[test]
    fn flush_after_supersede_is_empty() {
        let mut sampler = ScrollSampler::default();
        let t0 = Instant::now();
        sampler.offer(10.0, t0);
        sampler.offer(20.0, t0 + ms(4));
        sampler.offer(30.0, t0 + ms(16));
        assert_eq!(sampler.flush(t0 + ms(20)), None);
    }

    #[test]
    fn negative_offsets_pass_through() {
        let mut sampler = ScrollSampler::default();
        assert_eq!(sampler.offer(-30.0, Instant::now()), ScrollSample::Apply(-30.0));
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let mut sampler = ScrollSampler::default();
        assert_eq!(sampler.offer(f64::NAN, Instant::now()), ScrollSample::Ignored);
        assert_eq!(sampler.pending(), None);
    }
}
