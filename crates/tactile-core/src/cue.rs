//! Pre-allocated round-robin pool for short audio cues.
//!
//! Rapid dial movement can cross many steps per second. Rewinding one of a
//! few pre-built players avoids re-creating the player per cue and lets up to
//! `len()` cues overlap.

/// A player that can restart a fixed sound from the beginning.
///
/// Implementations swallow playback failures (autoplay policy rejections and
/// the like); a failed cue is simply silent.
pub trait CueSink {
    fn rewind_and_play(&mut self);
}

pub struct CuePool<S> {
    players: Vec<S>,
    next: usize,
}

impl<S: CueSink> CuePool<S> {
    pub fn new(players: Vec<S>) -> Self {
        Self { players, next: 0 }
    }

    /// Pool with no players; every trigger is a no-op.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Index of the player the next trigger will use.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Restart the next player and advance. Returns the index used.
    pub fn trigger(&mut self) -> Option<usize> {
        let n = self.players.len();
        let player = self.players.get_mut(self.next)?;
        player.rewind_and_play();
        let used = self.next;
        self.next = (self.next + 1) % n;
        Some(used)
    }

    pub fn players(&self) -> &[S] {
        &self.players
    }
}
