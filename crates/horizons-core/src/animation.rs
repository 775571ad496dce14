//! Frame-sampled smooth scrolling.
//!
//! The toolkit scrolls instantly, so a smooth jump is driven by sampling this
//! animation once per frame and issuing the sampled offset. A newer jump simply
//! replaces the value; a user gesture is detected as a scroll offset that does
//! not match any recently sampled one.

use crate::motion::ease_in_out_cubic;
use std::time::{Duration, Instant};

/// Offsets closer than this to the last emitted sample are our own echo.
pub const ECHO_TOLERANCE_PX: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    request_id: u64,
    previous_emitted: f32,
    last_emitted: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f32,
    pub finished: bool,
}

impl ScrollAnimation {
    pub fn new(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
        request_id: u64,
    ) -> Self {
        let from = if from.is_finite() { from.max(0.0) } else { 0.0 };
        let to = if to.is_finite() { to.max(0.0) } else { from };
        Self {
            from,
            to,
            started_at,
            duration,
            request_id,
            previous_emitted: from,
            last_emitted: from,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Offset for the frame at `now`; records it as the last emitted value.
    pub fn sample(&mut self, now: Instant) -> ScrollSample {
        let elapsed = now.saturating_duration_since(self.started_at);
        let (offset, finished) = if self.duration.is_zero() || elapsed >= self.duration {
            (self.to, true)
        } else {
            let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            (self.from + (self.to - self.from) * ease_in_out_cubic(t), false)
        };
        self.previous_emitted = self.last_emitted;
        self.last_emitted = offset;
        ScrollSample { offset, finished }
    }

    /// Aim at `to` from the last emitted offset, finishing in the time that was left.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if !to.is_finite() {
            return;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        self.duration = self.duration.saturating_sub(elapsed);
        self.started_at = now;
        self.from = self.last_emitted;
        self.to = to.max(0.0);
    }

    /// True when `observed` cannot be an echo of a sample this animation issued.
    pub fn is_interrupted_by(&self, observed: f32) -> bool {
        if !observed.is_finite() {
            return false;
        }
        // The echo of the previous frame's sample may still be in flight.
        let is_echo = [self.from, self.previous_emitted, self.last_emitted]
            .iter()
            .any(|emitted| (observed - emitted).abs() <= ECHO_TOLERANCE_PX);
        !is_echo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_run_from_start_to_target() {
        let start = Instant::now();
        let mut animation =
            ScrollAnimation::new(0.0, 1600.0, start, Duration::from_millis(700), 1);
        let first = animation.sample(start);
        assert_eq!(first.offset, 0.0);
        assert!(!first.finished);

        let mid = animation.sample(start + Duration::from_millis(350));
        assert!((mid.offset - 800.0).abs() < 1.0);

        let last = animation.sample(start + Duration::from_millis(900));
        assert_eq!(last.offset, 1600.0);
        assert!(last.finished);
    }

    #[test]
    fn samples_are_monotonic_toward_target() {
        let start = Instant::now();
        let mut animation =
            ScrollAnimation::new(4000.0, 800.0, start, Duration::from_millis(500), 3);
        let mut previous = f32::INFINITY;
        for ms in (0..=500).step_by(25) {
            let sample = animation.sample(start + Duration::from_millis(ms));
            assert!(sample.offset <= previous);
            previous = sample.offset;
        }
        assert_eq!(previous, 800.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let start = Instant::now();
        let mut animation = ScrollAnimation::new(10.0, 2400.0, start, Duration::ZERO, 7);
        let sample = animation.sample(start);
        assert_eq!(sample.offset, 2400.0);
        assert!(sample.finished);
    }

    #[test]
    fn own_echo_is_not_an_interruption() {
        let start = Instant::now();
        let mut animation =
            ScrollAnimation::new(0.0, 1600.0, start, Duration::from_millis(700), 1);
        let earlier = animation.sample(start + Duration::from_millis(184));
        let sample = animation.sample(start + Duration::from_millis(200));
        assert!(!animation.is_interrupted_by(sample.offset));
        assert!(!animation.is_interrupted_by(sample.offset + 0.5));
        assert!(!animation.is_interrupted_by(earlier.offset));
    }

    #[test]
    fn foreign_offset_interrupts() {
        let start = Instant::now();
        let mut animation =
            ScrollAnimation::new(0.0, 1600.0, start, Duration::from_millis(700), 1);
        let sample = animation.sample(start + Duration::from_millis(400));
        assert!(animation.is_interrupted_by(sample.offset - 120.0));
        assert!(animation.is_interrupted_by(2400.0));
    }

    #[test]
    fn retarget_keeps_position_and_remaining_time() {
        let start = Instant::now();
        let mut animation =
            ScrollAnimation::new(0.0, 3200.0, start, Duration::from_millis(700), 2);
        let before = animation.sample(start + Duration::from_millis(100));

        animation.retarget(2400.0, start + Duration::from_millis(100));
        assert_eq!(animation.target(), 2400.0);
        assert_eq!(animation.request_id(), 2);
        let resumed = animation.sample(start + Duration::from_millis(100));
        assert_eq!(resumed.offset, before.offset);
        assert!(!animation.is_interrupted_by(before.offset));

        let last = animation.sample(start + Duration::from_millis(700));
        assert_eq!(last.offset, 2400.0);
        assert!(last.finished);
    }
}
