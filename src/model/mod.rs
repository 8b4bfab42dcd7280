use serde::{Deserialize, Serialize};

pub mod queue;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Song {
    pub id: u64,
    pub name: String,
    pub artist: String,
    /// Track length in milliseconds, as reported by the metadata API.
    pub duration_ms: u64,
}

impl Song {
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// What "next track" means. Cycled by a single control, owned by the queue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PlayPattern {
    #[default]
    Loop,
    Random,
    Single,
}

impl PlayPattern {
    pub fn cycle(self) -> Self {
        match self {
            PlayPattern::Loop => PlayPattern::Random,
            PlayPattern::Random => PlayPattern::Single,
            PlayPattern::Single => PlayPattern::Loop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayPattern::Loop => "loop",
            PlayPattern::Random => "shuffle",
            PlayPattern::Single => "single",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_cycles_through_all_modes() {
        let start = PlayPattern::Loop;
        let mut p = start;
        let mut seen = vec![p];
        for _ in 0..2 {
            p = p.cycle();
            assert!(!seen.contains(&p));
            seen.push(p);
        }
        assert_eq!(p.cycle(), start);
    }
}
