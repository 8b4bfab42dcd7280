use rand::RngExt;

use super::{PlayPattern, Song};

/// Outcome of removing a song from the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The playing song was untouched (its index may have shifted).
    Kept,
    /// The playing song itself was removed; `index` is the entry that took
    /// its place, if the queue is not empty.
    CurrentGone { index: Option<usize> },
}

/// The session track list. Owns the playing index and decides what
/// next/previous mean under the active pattern.
pub struct Queue {
    songs: Vec<Song>,
    playing: Option<usize>,
    pub pattern: PlayPattern,
}

impl Queue {
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            playing: None,
            pattern: PlayPattern::default(),
        }
    }

    pub fn load(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.playing = None;
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn playing_index(&self) -> Option<usize> {
        self.playing
    }

    pub fn current(&self) -> Option<&Song> {
        self.playing.and_then(|i| self.songs.get(i))
    }

    pub fn select(&mut self, index: usize) -> Option<&Song> {
        if index < self.songs.len() {
            self.playing = Some(index);
            self.songs.get(index)
        } else {
            None
        }
    }

    /// Index the pattern advances to from the playing song. `None` when the
    /// queue is empty or nothing is playing yet.
    pub fn next_index(&self) -> Option<usize> {
        let current = self.playing?;
        match self.pattern {
            PlayPattern::Loop => Some((current + 1) % self.songs.len()),
            PlayPattern::Single => Some(current),
            PlayPattern::Random => Some(self.random_other(current)),
        }
    }

    pub fn previous_index(&self) -> Option<usize> {
        let current = self.playing?;
        match self.pattern {
            PlayPattern::Loop => {
                Some(current.checked_sub(1).unwrap_or(self.songs.len() - 1))
            }
            PlayPattern::Single => Some(current),
            PlayPattern::Random => Some(self.random_other(current)),
        }
    }

    fn random_other(&self, current: usize) -> usize {
        if self.songs.len() < 2 {
            return current;
        }
        let mut rng = rand::rng();
        loop {
            let candidate = rng.random_range(0..self.songs.len());
            if candidate != current {
                return candidate;
            }
        }
    }

    /// Remove the song at `index`, keeping the playing index pointed at the
    /// same song when possible.
    pub fn remove(&mut self, index: usize) -> Removal {
        if index >= self.songs.len() {
            return Removal::Kept;
        }
        self.songs.remove(index);

        match self.playing {
            Some(p) if p == index => {
                if self.songs.is_empty() {
                    self.playing = None;
                    Removal::CurrentGone { index: None }
                } else {
                    let replacement = p.min(self.songs.len() - 1);
                    self.playing = Some(replacement);
                    Removal::CurrentGone {
                        index: Some(replacement),
                    }
                }
            }
            Some(p) if p > index => {
                self.playing = Some(p - 1);
                Removal::Kept
            }
            _ => Removal::Kept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: u64) -> Song {
        Song {
            id,
            name: format!("track {id}"),
            artist: "artist".into(),
            duration_ms: 200_000,
        }
    }

    fn queue_of(n: u64) -> Queue {
        let mut q = Queue::new();
        q.load((0..n).map(song).collect());
        q
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut q = queue_of(3);
        assert!(q.select(3).is_none());
        assert_eq!(q.playing_index(), None);
        assert_eq!(q.select(2).map(|s| s.id), Some(2));
    }

    #[test]
    fn loop_pattern_wraps_both_directions() {
        let mut q = queue_of(3);
        q.pattern = PlayPattern::Loop;
        q.select(2);
        assert_eq!(q.next_index(), Some(0));
        q.select(0);
        assert_eq!(q.previous_index(), Some(2));
    }

    #[test]
    fn single_pattern_replays_the_same_song() {
        let mut q = queue_of(3);
        q.pattern = PlayPattern::Single;
        q.select(1);
        assert_eq!(q.next_index(), Some(1));
        assert_eq!(q.previous_index(), Some(1));
    }

    #[test]
    fn random_pattern_picks_a_different_song() {
        let mut q = queue_of(5);
        q.pattern = PlayPattern::Random;
        q.select(2);
        for _ in 0..50 {
            let next = q.next_index().unwrap();
            assert!(next < 5);
            assert_ne!(next, 2);
        }
    }

    #[test]
    fn random_pattern_on_singleton_queue_stays_put() {
        let mut q = queue_of(1);
        q.pattern = PlayPattern::Random;
        q.select(0);
        assert_eq!(q.next_index(), Some(0));
    }

    #[test]
    fn next_without_selection_is_none() {
        let q = queue_of(3);
        assert_eq!(q.next_index(), None);
    }

    #[test]
    fn removing_before_playing_shifts_the_index() {
        let mut q = queue_of(4);
        q.select(2);
        assert_eq!(q.remove(0), Removal::Kept);
        assert_eq!(q.playing_index(), Some(1));
        assert_eq!(q.current().map(|s| s.id), Some(2));
    }

    #[test]
    fn removing_the_playing_song_reports_a_replacement() {
        let mut q = queue_of(3);
        q.select(1);
        assert_eq!(q.remove(1), Removal::CurrentGone { index: Some(1) });
        assert_eq!(q.current().map(|s| s.id), Some(2));
    }

    #[test]
    fn removing_the_last_playing_song_clamps() {
        let mut q = queue_of(3);
        q.select(2);
        assert_eq!(q.remove(2), Removal::CurrentGone { index: Some(1) });
    }

    #[test]
    fn removing_the_only_song_empties_the_queue() {
        let mut q = queue_of(1);
        q.select(0);
        assert_eq!(q.remove(0), Removal::CurrentGone { index: None });
        assert!(q.is_empty());
        assert!(q.current().is_none());
    }
}
