//! Transport state machine.
//!
//! `PlaybackEngine` is a pure, `no_std`, allocation-free state machine that
//! tracks whether the player is playing or paused and which song of the
//! table is current.
//!
//! It has no I/O. The sequencer reads `engine.state()` each tick and drives
//! the tone outputs itself, which keeps this part trivially testable.

/// Current transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportState {
    /// Voices advance every tick.
    Playing,
    /// Outputs silenced; positions frozen.
    Paused,
}

impl TransportState {
    /// The other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            TransportState::Playing => TransportState::Paused,
            TransportState::Paused => TransportState::Playing,
        }
    }

    /// Short name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TransportState::Playing => "playing",
            TransportState::Paused => "paused",
        }
    }
}

/// Transport state plus a wrapping cursor into a song list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackEngine {
    state: TransportState,
    current: usize,
    song_count: usize,
}

impl PlaybackEngine {
    /// Create a paused engine on song 0. A `song_count` of 0 is treated as 1.
    #[must_use]
    pub const fn new(song_count: usize) -> Self {
        Self {
            state: TransportState::Paused,
            current: 0,
            song_count: if song_count == 0 { 1 } else { song_count },
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TransportState {
        self.state
    }

    /// Index of the current song.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of songs the cursor wraps over.
    #[must_use]
    pub const fn song_count(&self) -> usize {
        self.song_count
    }

    /// `true` while playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }

    /// Flip between playing and paused; returns the new state.
    pub fn toggle(&mut self) -> TransportState {
        self.state = self.state.toggled();
        self.state
    }

    /// Pause without touching the cursor.
    pub fn pause(&mut self) {
        self.state = TransportState::Paused;
    }

    /// Move to the next song (wrapping) and play.
    pub fn next(&mut self) -> usize {
        let next = self.current.saturating_add(1);
        self.current = if next >= self.song_count { 0 } else { next };
        self.state = TransportState::Playing;
        self.current
    }

    /// Move to the previous song (wrapping) and play.
    pub fn previous(&mut self) -> usize {
        self.current = match self.current.checked_sub(1) {
            Some(prev) => prev,
            None => self.song_count.saturating_sub(1),
        };
        self.state = TransportState::Playing;
        self.current
    }
}
