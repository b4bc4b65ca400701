//! Built-in song library.

use crate::notes::*;
use crate::song::{Envelope, NoteTrack, Song};

use Envelope::{Hold as HT, Regular as RT};

// ── Music box theme ─────────────────────────────────────────────────────────

const THEME_RIGHT_NOTES: [u16; 31] = [
    F5, F5, F5, F5, F5, E5, D5, E5, F5, G5, A5, A5, A5, A5, A5, G5, F5, G5, A5, A5S, C6, F5, F5, D6,
    C6, A5S, A5, G5, F5, NO, NO,
];
const THEME_RIGHT_DURATIONS: [u16; 31] = [
    QN, QN, HN, EN, EN, EN, EN, EN, EN, QN, QN, QN, HN, EN, EN, EN, EN, EN, EN, QN, HN, HN, EN, EN,
    EN, EN, QN, QN, HN, HN, FN,
];
const THEME_RIGHT_ENVELOPES: [Envelope; 31] = [
    RT, RT, HT, RT, RT, RT, RT, RT, RT, RT, RT, RT, HT, RT, RT, RT, RT, RT, RT, RT, RT, HT, RT, RT,
    RT, RT, RT, RT, RT, HT, HT,
];

const THEME_LEFT_NOTES: [u16; 16] = [
    F4, F4, A4, A4, D4, D4, F4, F4, A3S, A3S, D4, D4, C4, C4, E4, E4,
];
const THEME_LEFT_DURATIONS: [u16; 16] = [EN; 16];

// ── Hot Cross Buns ──────────────────────────────────────────────────────────

const BUNS_NOTES: [u16; 28] = [
    E4, D4, C4, NO, E4, D4, C4, NO, C4, NO, C4, NO, C4, NO, C4, NO, D4, NO, D4, NO, D4, NO, D4, NO,
    E4, D4, C4, NO,
];
const BUNS_DURATIONS: [u16; 28] = [
    QN, QN, QN, QN, QN, QN, QN, QN, SN, SN, SN, SN, SN, SN, SN, SN, SN, SN, SN, SN, SN, SN, SN, SN,
    QN, QN, QN, HN,
];

// ── Twinkle Twinkle Little Star ─────────────────────────────────────────────
// Zero-length rests separate repeated notes so each one re-attacks.

const TWINKLE_RIGHT_NOTES: [u16; 85] = [
    NO, C5, NO, C5, NO, G5, NO, G5, NO, A5, NO, A5, NO, G5, NO, F5, NO, F5, NO, E5, NO, E5, NO, D5,
    NO, D5, NO, C5, NO, G5, NO, G5, NO, F5, NO, F5, NO, E5, NO, E5, NO, D5, NO, G5, NO, G5, NO, F5,
    NO, F5, NO, E5, NO, E5, NO, D5, NO, C5, NO, C5, NO, G5, NO, G5, NO, A5, NO, A5, NO, G5, NO, F5,
    NO, F5, NO, E5, NO, E5, NO, D5, NO, D5, NO, C5, NO,
];
const TWINKLE_RIGHT_DURATIONS: [u16; 85] = [
    0, 600, 0, 600, 0, 600, 0, 600, 0, 600, 0, 600, 0, 1200, 0, 600, 0, 600, 0, 600, 0, 600, 0, 600,
    0, 600, 0, 1200, 0, 600, 0, 600, 0, 600, 0, 600, 0, 600, 0, 600, 0, 1200, 0, 600, 0, 600, 0, 600,
    0, 600, 0, 600, 0, 600, 0, 1200, 0, 600, 0, 600, 0, 600, 0, 600, 0, 600, 0, 600, 0, 1200, 0, 600,
    0, 600, 0, 600, 0, 600, 0, 600, 0, 600, 0, 1200, 1000,
];
const TWINKLE_LEFT_NOTES: [u16; 1] = [NO];
const TWINKLE_LEFT_DURATIONS: [u16; 1] = [1000];

/// Songs shipped in flash, in play order.
pub static BUILTIN: [Song<'static>; 3] = [
    Song {
        title: "Music Box Theme",
        artist: "Traditional",
        right: NoteTrack::new(
            &THEME_RIGHT_NOTES,
            &THEME_RIGHT_DURATIONS,
            &THEME_RIGHT_ENVELOPES,
        ),
        left: NoteTrack::uniform(&THEME_LEFT_NOTES, &THEME_LEFT_DURATIONS, Envelope::Regular),
    },
    Song {
        title: "Hot Cross Buns",
        artist: "?",
        right: NoteTrack::uniform(&BUNS_NOTES, &BUNS_DURATIONS, Envelope::Hold),
        left: NoteTrack::uniform(&BUNS_NOTES, &BUNS_DURATIONS, Envelope::Hold),
    },
    Song {
        title: "Twinkle Twinkle Little Star",
        artist: "Or... The ABC's?",
        right: NoteTrack::uniform(
            &TWINKLE_RIGHT_NOTES,
            &TWINKLE_RIGHT_DURATIONS,
            Envelope::Hold,
        ),
        left: NoteTrack::uniform(&TWINKLE_LEFT_NOTES, &TWINKLE_LEFT_DURATIONS, Envelope::Hold),
    },
];

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::BUILTIN;
    use crate::song::SongTable;
    use platform::ToneChannel;

    #[test]
    fn test_builtin_library_validates() {
        let table = SongTable::builtin();
        assert!(table.is_ok(), "built-in songs must validate: {table:?}");
    }

    #[test]
    fn test_theme_track_lengths() {
        assert_eq!(BUILTIN[0].track(ToneChannel::Right).len(), 31);
        assert_eq!(BUILTIN[0].track(ToneChannel::Left).len(), 16);
    }

    #[test]
    fn test_twinkle_left_is_single_rest() {
        let left = BUILTIN[2].track(ToneChannel::Left);
        assert_eq!(left.len(), 1);
        assert_eq!(left.note(0).map(|n| n.frequency_hz), Some(0));
    }
}
