//! Volume and mute control.
//!
//! The level (0-100) and the mute flag are orthogonal on purpose: muting
//! remembers the level so un-muting restores it. Two asymmetries keep the
//! slider and the mute button consistent: dragging the slider to 0 mutes
//! without forgetting the old level, and toggling mute while the level is 0
//! bumps it to 1 so un-mute is never silence.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeState {
    level: u8,
    muted: bool,
}

impl VolumeState {
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100).max(1),
            muted: false,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Slider move. 0 mutes and retains the previous level; anything else
    /// un-mutes and takes effect.
    pub fn set_level(&mut self, level: u8) {
        if level == 0 {
            self.muted = true;
        } else {
            self.muted = false;
            self.level = level.min(100);
        }
    }

    pub fn step(&mut self, delta: i16) {
        let next = (self.effective_level() as i16 + delta).clamp(0, 100) as u8;
        self.set_level(next);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if self.level == 0 {
            self.level = 1;
        }
    }

    /// Level as shown on the slider: 0 while muted.
    pub fn effective_level(&self) -> u8 {
        if self.muted { 0 } else { self.level }
    }

    /// Output gain for the media element, 0.0-1.0. The only value ever
    /// written to the element.
    pub fn gain(&self) -> f32 {
        self.effective_level() as f32 / 100.0
    }
}

impl Default for VolumeState {
    fn default() -> Self {
        Self::new(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_to_zero_mutes_and_remembers() {
        let mut vol = VolumeState::new(70);
        vol.set_level(0);
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 70);
        assert_eq!(vol.gain(), 0.0);
    }

    #[test]
    fn unmute_restores_the_remembered_level() {
        let mut vol = VolumeState::new(70);
        vol.set_level(0);
        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 70);
        assert!((vol.gain() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn setting_a_level_unmutes() {
        let mut vol = VolumeState::new(70);
        vol.toggle_mute();
        vol.set_level(40);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 40);
    }

    #[test]
    fn mute_at_level_zero_bumps_to_audible() {
        let mut vol = VolumeState::new(70);
        vol.level = 0;
        vol.toggle_mute();
        assert_eq!(vol.level(), 1);
    }

    #[test]
    fn level_clamps_to_hundred() {
        let mut vol = VolumeState::new(70);
        vol.set_level(200);
        assert_eq!(vol.level(), 100);
        assert_eq!(vol.gain(), 1.0);
    }

    #[test]
    fn step_moves_from_the_effective_level() {
        let mut vol = VolumeState::new(70);
        vol.toggle_mute();
        // Muted reads as 0, so a step up lands near the bottom, not at 75.
        vol.step(5);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 5);
    }

    #[test]
    fn step_down_to_zero_mutes() {
        let mut vol = VolumeState::new(5);
        vol.step(-10);
        assert!(vol.is_muted());
        assert_eq!(vol.gain(), 0.0);
    }
}
