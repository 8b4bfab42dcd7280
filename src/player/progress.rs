//! Playback position sampling.
//!
//! The element is polled on the UI tick rather than trusted to push
//! position updates. `ProgressSource` is the seam between the tick loop and
//! the element so an event-driven source can replace polling without
//! touching the seek or volume controllers.

/// A best-effort supplier of the element's playback position. `request` asks
/// the element to publish its position; `take_position` drains whatever
/// arrived since the last call. Accuracy is bounded by the polling period,
/// not better.
pub trait ProgressSource {
    fn request(&mut self);
    fn take_position(&mut self) -> Option<f64>;
}

/// The position shown on the progress track. Follows the sampler except
/// while a drag preview is active, which takes exclusive precedence.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayPosition {
    secs: f64,
}

impl DisplayPosition {
    pub fn secs(&self) -> f64 {
        self.secs
    }

    /// Feed a sampled position. Ignored while `dragging`, and non-finite
    /// samples (element between sources) never land.
    pub fn apply_sample(&mut self, secs: f64, dragging: bool) {
        if dragging || !secs.is_finite() {
            return;
        }
        self.secs = secs;
    }

    /// Jump the display, used when a seek commits so the bar does not snap
    /// back while waiting for the next sample.
    pub fn set(&mut self, secs: f64) {
        if secs.is_finite() {
            self.secs = secs;
        }
    }

    pub fn reset(&mut self) {
        self.secs = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSource {
        pending: Vec<f64>,
        requests: usize,
    }

    impl ProgressSource for FakeSource {
        fn request(&mut self) {
            self.requests += 1;
        }
        fn take_position(&mut self) -> Option<f64> {
            self.pending.pop()
        }
    }

    #[test]
    fn display_follows_samples_when_idle() {
        let mut src = FakeSource {
            pending: vec![42.5],
            requests: 0,
        };
        let mut display = DisplayPosition::default();
        src.request();
        if let Some(t) = src.take_position() {
            display.apply_sample(t, false);
        }
        assert_eq!(display.secs(), 42.5);
        assert_eq!(src.requests, 1);
    }

    #[test]
    fn samples_never_move_the_display_while_dragging() {
        let mut display = DisplayPosition::default();
        display.apply_sample(10.0, false);
        for t in [11.0, 12.0, 13.0] {
            display.apply_sample(t, true);
        }
        assert_eq!(display.secs(), 10.0);
        // Drag ended: sampling resumes.
        display.apply_sample(14.0, false);
        assert_eq!(display.secs(), 14.0);
    }

    #[test]
    fn non_finite_samples_are_dropped() {
        let mut display = DisplayPosition::default();
        display.apply_sample(5.0, false);
        display.apply_sample(f64::NAN, false);
        display.apply_sample(f64::INFINITY, false);
        assert_eq!(display.secs(), 5.0);
    }

    #[test]
    fn committed_seek_moves_the_display_immediately() {
        let mut display = DisplayPosition::default();
        display.apply_sample(3.0, false);
        display.set(100.0);
        assert_eq!(display.secs(), 100.0);
    }
}
