//! Song data model and load-time validation.

use platform::ToneChannel;

/// Playback shape of one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Envelope {
    /// Tone for the listed duration minus a short adjustment, then silence.
    Regular,
    /// Short fixed tone, silence for the rest of the listed duration.
    Staccato,
    /// Tone for the whole listed duration, no silence.
    Hold,
}

/// One note of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Pitch in Hz, 0 for a rest.
    pub frequency_hz: u16,
    /// Listed duration in ms.
    pub duration_ms: u16,
    /// Playback shape.
    pub envelope: Envelope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Envelopes<'a> {
    Each(&'a [Envelope]),
    All(Envelope),
}

/// The notes of one channel, as parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteTrack<'a> {
    frequencies: &'a [u16],
    durations: &'a [u16],
    envelopes: Envelopes<'a>,
}

impl<'a> NoteTrack<'a> {
    /// A track with one envelope per note.
    #[must_use]
    pub const fn new(frequencies: &'a [u16], durations: &'a [u16], envelopes: &'a [Envelope]) -> Self {
        Self {
            frequencies,
            durations,
            envelopes: Envelopes::Each(envelopes),
        }
    }

    /// A track where every note has the same envelope.
    #[must_use]
    pub const fn uniform(frequencies: &'a [u16], durations: &'a [u16], envelope: Envelope) -> Self {
        Self {
            frequencies,
            durations,
            envelopes: Envelopes::All(envelope),
        }
    }

    /// Number of notes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// `true` for a track with no notes (rejected by [`SongTable::new`]).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Note `index`, or `None` past the end.
    #[must_use]
    pub fn note(&self, index: usize) -> Option<Note> {
        let frequency_hz = *self.frequencies.get(index)?;
        let duration_ms = *self.durations.get(index)?;
        let envelope = match self.envelopes {
            Envelopes::Each(list) => *list.get(index)?,
            Envelopes::All(envelope) => envelope,
        };
        Some(Note {
            frequency_hz,
            duration_ms,
            envelope,
        })
    }

    /// Iterate over the notes in order.
    pub fn notes(&self) -> impl Iterator<Item = Note> + '_ {
        (0..self.len()).filter_map(|i| self.note(i))
    }

    /// Sum of the listed durations: one full pass of the track.
    #[must_use]
    pub fn total_duration_ms(&self) -> u32 {
        self.durations
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(u32::from(*d)))
    }

    fn validate(&self, song: usize, channel: ToneChannel) -> Result<(), SongError> {
        if self.is_empty() {
            return Err(SongError::EmptyTrack { song, channel });
        }
        let envelopes = match self.envelopes {
            Envelopes::Each(list) => list.len(),
            Envelopes::All(_) => self.len(),
        };
        if self.durations.len() != self.len() || envelopes != self.len() {
            return Err(SongError::MismatchedTrack {
                song,
                channel,
                frequencies: self.len(),
                durations: self.durations.len(),
                envelopes,
            });
        }
        Ok(())
    }
}

/// A two-voice song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Song<'a> {
    /// Title shown on the display
    pub title: &'a str,
    /// Artist shown on the display
    pub artist: &'a str,
    /// Buzzer 1 track
    pub right: NoteTrack<'a>,
    /// Buzzer 2 track
    pub left: NoteTrack<'a>,
}

impl<'a> Song<'a> {
    /// The track played on `channel`.
    #[must_use]
    pub const fn track(&self, channel: ToneChannel) -> &NoteTrack<'a> {
        match channel {
            ToneChannel::Right => &self.right,
            ToneChannel::Left => &self.left,
        }
    }
}

/// Reasons a song list is unplayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SongError {
    /// No songs at all.
    #[error("song list is empty")]
    EmptySongList,
    /// A channel has no notes.
    #[error("song {}: {} track is empty", .song, .channel.name())]
    EmptyTrack {
        /// Position in the song list.
        song: usize,
        /// Offending channel.
        channel: ToneChannel,
    },
    /// The parallel arrays of a channel differ in length.
    #[error(
        "song {}: {} track has {} frequencies, {} durations, {} envelopes",
        .song, .channel.name(), .frequencies, .durations, .envelopes
    )]
    MismatchedTrack {
        /// Position in the song list.
        song: usize,
        /// Offending channel.
        channel: ToneChannel,
        /// Frequency array length.
        frequencies: usize,
        /// Duration array length.
        durations: usize,
        /// Envelope array length.
        envelopes: usize,
    },
}

/// A validated, non-empty, ordered list of songs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongTable<'a> {
    songs: &'a [Song<'a>],
}

impl<'a> SongTable<'a> {
    /// Validate `songs`. Every track must be non-empty with parallel arrays
    /// of equal length.
    pub fn new(songs: &'a [Song<'a>]) -> Result<Self, SongError> {
        if songs.is_empty() {
            return Err(SongError::EmptySongList);
        }
        for (index, song) in songs.iter().enumerate() {
            for channel in ToneChannel::ALL {
                song.track(channel).validate(index, channel)?;
            }
        }
        Ok(Self { songs })
    }

    /// Number of songs (at least 1).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.songs.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Song `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Song<'a>> {
        let songs: &'a [Song<'a>] = self.songs;
        songs.get(index)
    }

    /// All songs in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Song<'a>> {
        let songs: &'a [Song<'a>] = self.songs;
        songs.iter()
    }
}

impl SongTable<'static> {
    /// The built-in song library.
    pub fn builtin() -> Result<Self, SongError> {
        Self::new(&crate::songs::BUILTIN)
    }
}
