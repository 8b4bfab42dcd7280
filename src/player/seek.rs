//! Seek gesture state machine for the progress track.
//!
//! A press arms the controller without touching the display; the first drag
//! motion turns it into a live preview, and release commits a seek computed
//! from the release column. A press released without motion is a plain click
//! seek through the same mapping.

/// Geometry and duration of the rendered progress track. Columns are
/// absolute terminal columns; `width` of 0 or an unknown duration makes
/// every mapping a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTrack {
    pub origin: u16,
    pub width: u16,
    pub duration_secs: f64,
}

impl ProgressTrack {
    pub fn new(origin: u16, width: u16, duration_secs: f64) -> Self {
        Self {
            origin,
            width,
            duration_secs,
        }
    }

    fn seekable(&self) -> bool {
        self.width > 0 && self.duration_secs.is_finite() && self.duration_secs > 0.0
    }

    /// Absolute column clamped into the track, as a track-relative offset.
    pub fn clamp_col(&self, col: u16) -> u16 {
        col.saturating_sub(self.origin).min(self.width)
    }

    /// Track time under an absolute column. `None` when the track cannot
    /// map (no song loaded, zero duration, zero width).
    pub fn time_at(&self, col: u16) -> Option<f64> {
        if !self.seekable() {
            return None;
        }
        let rel = self.clamp_col(col) as f64;
        Some(rel / self.width as f64 * self.duration_secs)
    }

    /// Track-relative column showing `secs`, rounded and clamped.
    pub fn col_at(&self, secs: f64) -> u16 {
        if !self.seekable() || !secs.is_finite() {
            return 0;
        }
        let rel = (secs / self.duration_secs * self.width as f64).round();
        (rel.max(0.0) as u16).min(self.width)
    }

    pub fn contains(&self, col: u16) -> bool {
        col >= self.origin && col < self.origin.saturating_add(self.width)
    }
}

/// One tagged state instead of a loose `dragging` flag plus a stale preview
/// column: `Armed` distinguishes a click from a drag, and a preview column
/// exists only while actually dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekState {
    #[default]
    Idle,
    /// Button held, no motion yet; the display keeps following the sampler.
    Armed,
    /// Button held and moved; `preview_col` (track-relative) drives the
    /// display instead of the sampler.
    Dragging { preview_col: u16 },
}

impl SeekState {
    /// Pointer-down over the track.
    pub fn press(&mut self) {
        if matches!(self, SeekState::Idle) {
            *self = SeekState::Armed;
        }
    }

    /// Pointer motion with the button held.
    pub fn drag(&mut self, col: u16, track: &ProgressTrack) {
        match self {
            SeekState::Armed | SeekState::Dragging { .. } => {
                *self = SeekState::Dragging {
                    preview_col: track.clamp_col(col),
                };
            }
            SeekState::Idle => {}
        }
    }

    /// Pointer-up: commit. Returns the seek target in seconds when the
    /// gesture was armed and the track can map the release column.
    pub fn release(&mut self, col: u16, track: &ProgressTrack) -> Option<f64> {
        let armed = !matches!(self, SeekState::Idle);
        *self = SeekState::Idle;
        if armed { track.time_at(col) } else { None }
    }

    /// True only while a preview is live; `Armed` still follows the sampler.
    pub fn is_dragging(&self) -> bool {
        matches!(self, SeekState::Dragging { .. })
    }

    pub fn preview_col(&self) -> Option<u16> {
        match self {
            SeekState::Dragging { preview_col } => Some(*preview_col),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> ProgressTrack {
        // 200_000 ms track over 1000 columns starting at the left edge.
        ProgressTrack::new(0, 1000, 200.0)
    }

    #[test]
    fn click_maps_column_to_time_linearly() {
        let mut seek = SeekState::default();
        seek.press();
        let target = seek.release(500, &track());
        assert_eq!(target, Some(100.0));
        assert_eq!(seek, SeekState::Idle);
    }

    #[test]
    fn mapping_round_trips_within_one_column() {
        let t = track();
        for col in [0u16, 1, 137, 499, 500, 999, 1000] {
            let secs = t.time_at(col).unwrap();
            let back = t.col_at(secs);
            assert!(
                (back as i32 - col as i32).abs() <= 1,
                "col {col} -> {secs}s -> {back}"
            );
        }
    }

    #[test]
    fn columns_are_clamped_not_rejected() {
        let t = ProgressTrack::new(10, 100, 60.0);
        assert_eq!(t.time_at(3), Some(0.0));
        assert_eq!(t.time_at(500), Some(60.0));
        assert_eq!(t.clamp_col(5), 0);
        assert_eq!(t.clamp_col(400), 100);
    }

    #[test]
    fn zero_duration_makes_seek_a_noop() {
        let t = ProgressTrack::new(0, 100, 0.0);
        let mut seek = SeekState::default();
        seek.press();
        seek.drag(50, &t);
        assert_eq!(seek.release(50, &t), None);
        assert_eq!(seek, SeekState::Idle);
    }

    #[test]
    fn zero_width_makes_seek_a_noop() {
        let t = ProgressTrack::new(0, 0, 120.0);
        assert_eq!(t.time_at(0), None);
        assert_eq!(t.col_at(60.0), 0);
    }

    #[test]
    fn press_alone_does_not_preview() {
        let mut seek = SeekState::default();
        seek.press();
        assert!(!seek.is_dragging());
        assert_eq!(seek.preview_col(), None);
    }

    #[test]
    fn drag_previews_and_release_commits_the_last_position() {
        let t = track();
        let mut seek = SeekState::default();
        seek.press();
        seek.drag(200, &t);
        assert_eq!(seek.preview_col(), Some(200));
        seek.drag(1400, &t);
        assert_eq!(seek.preview_col(), Some(1000));
        assert_eq!(seek.release(1400, &t), Some(200.0));
        assert!(!seek.is_dragging());
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let t = track();
        let mut seek = SeekState::default();
        seek.drag(300, &t);
        assert_eq!(seek, SeekState::Idle);
        assert_eq!(seek.release(300, &t), None);
    }
}
