//! Per-channel envelope stepping.
//!
//! A voice alternates between a tone sub-phase and a silence sub-phase for
//! each note. It is stepped only when its current phase has run out, and each
//! step starts exactly one new phase.

use platform::{Instant, ToneChannel, ToneOutput};

use crate::notes::{REGULAR_NOTE_ADJUSTMENT_MS, STACCATO_NOTE_MS};
use crate::song::{Envelope, NoteTrack};

/// Split a listed duration into `(tone_ms, silence_ms)`.
///
/// The two parts always add up to `duration_ms`. Durations shorter than the
/// envelope constant give as much tone as fits.
#[must_use]
pub const fn envelope_split(envelope: Envelope, duration_ms: u16) -> (u16, u16) {
    let tone = match envelope {
        Envelope::Regular => duration_ms.saturating_sub(REGULAR_NOTE_ADJUSTMENT_MS),
        Envelope::Staccato => {
            if STACCATO_NOTE_MS < duration_ms {
                STACCATO_NOTE_MS
            } else {
                duration_ms
            }
        }
        Envelope::Hold => duration_ms,
    };
    (tone, duration_ms.saturating_sub(tone))
}

/// What a [`Voice::step`] started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Tone sub-phase of note `index` (`hz == 0` is a rest).
    Tone {
        /// Note index within the track.
        index: usize,
        /// Frequency driven, 0 for a rest.
        hz: u16,
        /// Sub-phase length.
        ms: u16,
    },
    /// Trailing silence of note `index`.
    Silence {
        /// Note index within the track.
        index: usize,
        /// Sub-phase length.
        ms: u16,
    },
}

/// Playback position of one tone channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    channel: ToneChannel,
    index: usize,
    /// `None` until the first note; the voice is due immediately.
    phase_start: Option<Instant>,
    phase_ms: u16,
    tone_next: bool,
    pending_silence_ms: u16,
    sounding_hz: u16,
}

impl Voice {
    /// A voice on `channel` that has played nothing yet.
    #[must_use]
    pub const fn new(channel: ToneChannel) -> Self {
        Self {
            channel,
            index: 0,
            phase_start: None,
            phase_ms: 0,
            tone_next: true,
            pending_silence_ms: 0,
            sounding_hz: 0,
        }
    }

    /// Forget all progress.
    pub fn reset(&mut self) {
        *self = Self::new(self.channel);
    }

    /// Channel this voice drives.
    #[must_use]
    pub const fn channel(&self) -> ToneChannel {
        self.channel
    }

    /// Index of the note the next tone sub-phase plays.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// `true` when the next step starts a tone sub-phase.
    #[must_use]
    pub const fn is_tone_next(&self) -> bool {
        self.tone_next
    }

    /// Length of the active phase.
    #[must_use]
    pub const fn phase_ms(&self) -> u16 {
        self.phase_ms
    }

    /// Silence queued after the current tone.
    #[must_use]
    pub const fn pending_silence_ms(&self) -> u16 {
        self.pending_silence_ms
    }

    /// Frequency being driven, 0 when silent.
    #[must_use]
    pub const fn sounding_hz(&self) -> u16 {
        self.sounding_hz
    }

    /// Whether `step` should run at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        match self.phase_start {
            None => true,
            Some(start) => now.is_time_up(start, u32::from(self.phase_ms)),
        }
    }

    /// Start the next phase at `now`.
    ///
    /// Returns `None` only if `track` is empty.
    pub fn step<O: ToneOutput + ?Sized>(
        &mut self,
        now: Instant,
        track: &NoteTrack<'_>,
        out: &mut O,
    ) -> Option<Phase> {
        let len = track.len();
        if len == 0 {
            return None;
        }
        if self.index >= len {
            self.index = 0;
        }
        self.phase_start = Some(now);

        if !self.tone_next {
            out.disable(self.channel);
            self.sounding_hz = 0;
            let phase = Phase::Silence {
                index: self.index,
                ms: self.pending_silence_ms,
            };
            self.phase_ms = self.pending_silence_ms;
            self.pending_silence_ms = 0;
            self.tone_next = true;
            self.advance(len);
            return Some(phase);
        }

        let note = track.note(self.index)?;
        let (tone_ms, silence_ms) = envelope_split(note.envelope, note.duration_ms);
        let phase = Phase::Tone {
            index: self.index,
            hz: note.frequency_hz,
            ms: tone_ms,
        };
        self.phase_ms = tone_ms;
        match note.envelope {
            Envelope::Hold => {
                self.pending_silence_ms = 0;
                self.advance(len);
            }
            Envelope::Regular | Envelope::Staccato => {
                self.pending_silence_ms = silence_ms;
                self.tone_next = false;
            }
        }

        if note.frequency_hz == 0 {
            out.disable(self.channel);
        } else {
            out.set_frequency(self.channel, note.frequency_hz);
            out.enable(self.channel);
        }
        self.sounding_hz = note.frequency_hz;
        Some(phase)
    }

    /// Push the active phase's start forward by `ms`, freezing its remaining
    /// time.
    pub fn hold(&mut self, ms: u32) {
        if let Some(start) = self.phase_start {
            self.phase_start = Some(start.wrapping_add_ms(ms));
        }
    }

    /// Drive the frequency that was sounding before a pause again.
    pub fn resume<O: ToneOutput + ?Sized>(&self, out: &mut O) {
        if self.sounding_hz != 0 {
            out.set_frequency(self.channel, self.sounding_hz);
            out.enable(self.channel);
        }
    }

    fn advance(&mut self, len: usize) {
        let next = self.index.saturating_add(1);
        self.index = if next >= len { 0 } else { next };
    }
}
