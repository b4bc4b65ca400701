//! Sequencer behaviour over simulated time with the built-in songs.

// Test files legitimately use expect() for readable assertions.
#![allow(clippy::expect_used, clippy::arithmetic_side_effects)]

use platform::mocks::{MockTone, ToneCall};
use platform::{Instant, NowPlaying, Task, ToneChannel, TransportControl};
use playback::notes::{A4, C5, F4, F5, NO, QN, REGULAR_NOTE_ADJUSTMENT_MS, STACCATO_NOTE_MS};
use playback::{Envelope, NoteSequencer, NoteTrack, Song, SongTable, TransportState};

type Sequencer = NoteSequencer<'static, MockTone>;

fn sequencer() -> Sequencer {
    let table = SongTable::builtin().expect("built-in songs validate");
    let mut seq = NoteSequencer::new(table, MockTone::new());
    seq.initialize(Instant::ZERO, &mut ());
    seq
}

const TWO_NOTES: [u16; 2] = [A4, C5];
const TWO_QUARTERS: [u16; 2] = [QN, QN];
const LEFT_REST: [u16; 1] = [NO];
const LEFT_REST_MS: [u16; 1] = [2000];

static STACCATO_SONG: [Song<'static>; 1] = [Song {
    title: "Staccato",
    artist: "Test",
    right: NoteTrack::uniform(&TWO_NOTES, &TWO_QUARTERS, Envelope::Staccato),
    left: NoteTrack::uniform(&LEFT_REST, &LEFT_REST_MS, Envelope::Hold),
}];

static HOLD_SONG: [Song<'static>; 1] = [Song {
    title: "Hold",
    artist: "Test",
    right: NoteTrack::uniform(&TWO_NOTES, &TWO_QUARTERS, Envelope::Hold),
    left: NoteTrack::uniform(&LEFT_REST, &LEFT_REST_MS, Envelope::Hold),
}];

/// A sequencer over `songs`, started and with the call log cleared.
fn playing(songs: &'static [Song<'static>]) -> Sequencer {
    let table = SongTable::new(songs).expect("test song validates");
    let mut seq = NoteSequencer::new(table, MockTone::new());
    seq.initialize(Instant::ZERO, &mut ());
    seq.toggle_play_pause();
    seq.output_mut().clear_calls();
    seq
}

fn right_calls(seq: &Sequencer) -> Vec<ToneCall> {
    seq.output()
        .calls()
        .iter()
        .copied()
        .filter(|call| match call {
            ToneCall::SetFrequency(ch, _) | ToneCall::Enable(ch) | ToneCall::Disable(ch) => {
                *ch == ToneChannel::Right
            }
        })
        .collect()
}

/// Run every tick in `from..=to`.
fn run(seq: &mut Sequencer, from: u32, to: u32) {
    for t in from..=to {
        seq.run_tick(Instant::from_millis(t), &mut ());
    }
}

#[test]
fn paused_after_initialize_stays_silent() {
    let mut seq = sequencer();
    run(&mut seq, 1, 2000);
    for channel in ToneChannel::ALL {
        assert_eq!(seq.output().sounding(channel), 0);
        assert_eq!(seq.voice(channel).index(), 0);
    }
}

#[test]
fn first_regular_note_tone_then_silence() {
    let mut seq = sequencer();
    seq.toggle_play_pause();
    run(&mut seq, 1, 1);
    assert_eq!(seq.output().sounding(ToneChannel::Right), F5);
    assert_eq!(seq.output().sounding(ToneChannel::Left), F4);

    // Quarter note, regular: 512 - 50 ms of tone from t=1.
    run(&mut seq, 2, 462);
    assert_eq!(seq.output().sounding(ToneChannel::Right), F5);
    run(&mut seq, 463, 463);
    assert_eq!(seq.output().sounding(ToneChannel::Right), 0);
    assert_eq!(
        seq.voice(ToneChannel::Right).phase_ms(),
        REGULAR_NOTE_ADJUSTMENT_MS
    );
    assert_eq!(seq.voice(ToneChannel::Right).index(), 1);

    // Next note starts when the silence ends.
    run(&mut seq, 464, 512);
    assert_eq!(seq.output().sounding(ToneChannel::Right), 0);
    run(&mut seq, 513, 513);
    assert_eq!(seq.output().sounding(ToneChannel::Right), F5);
}

#[test]
fn pause_freezes_position_and_resume_continues() {
    let mut seq = sequencer();
    seq.toggle_play_pause();
    run(&mut seq, 1, 100);
    assert_eq!(seq.output().sounding(ToneChannel::Right), F5);

    seq.toggle_play_pause();
    assert_eq!(seq.transport_state(), TransportState::Paused);
    run(&mut seq, 101, 1100);
    for channel in ToneChannel::ALL {
        assert_eq!(seq.output().sounding(channel), 0, "paused output must be off");
    }
    assert_eq!(seq.voice(ToneChannel::Right).index(), 0);
    assert!(!seq.voice(ToneChannel::Right).is_tone_next());

    seq.toggle_play_pause();
    run(&mut seq, 1101, 1101);
    assert_eq!(
        seq.output().sounding(ToneChannel::Right),
        F5,
        "resume re-drives the interrupted tone"
    );

    // 1000 ms were spent paused: the tone that would have ended at 463 now
    // ends at 1463.
    run(&mut seq, 1102, 1462);
    assert_eq!(seq.output().sounding(ToneChannel::Right), F5);
    run(&mut seq, 1463, 1463);
    assert_eq!(seq.output().sounding(ToneChannel::Right), 0);
}

#[test]
fn next_then_previous_returns_to_start_of_song() {
    let mut seq = sequencer();
    seq.toggle_play_pause();
    run(&mut seq, 1, 700);
    assert!(seq.voice(ToneChannel::Right).index() > 0);

    seq.next_song();
    seq.previous_song();
    assert_eq!(seq.current_song_index(), 0);
    assert!(seq.is_playing());
    for channel in ToneChannel::ALL {
        let voice = seq.voice(channel);
        assert_eq!(voice.index(), 0, "{} voice not reset", channel.name());
        assert!(voice.is_tone_next());
        assert_eq!(voice.sounding_hz(), 0);
        assert!(voice.is_due(Instant::from_millis(701)));
    }

    run(&mut seq, 701, 701);
    assert_eq!(seq.output().sounding(ToneChannel::Right), F5);
}

#[test]
fn song_change_forces_play_from_pause() {
    let mut seq = sequencer();
    seq.next_song();
    assert_eq!(seq.transport_state(), TransportState::Playing);
    run(&mut seq, 1, 1);
    // Hot Cross Buns opens on E4.
    assert_eq!(seq.output().sounding(ToneChannel::Right), 330);
}

#[test]
fn channels_wrap_independently() {
    let mut seq = sequencer();
    seq.toggle_play_pause();
    // Left track: 16 eighth notes = 4096 ms, so note 0 restarts at t=4097.
    run(&mut seq, 1, 4097);
    assert_eq!(seq.voice(ToneChannel::Left).index(), 0);
    assert_eq!(seq.output().sounding(ToneChannel::Left), F4);
    assert!(
        seq.voice(ToneChannel::Right).index() > 0,
        "right track is longer and has not wrapped"
    );
}

#[test]
fn zero_length_rests_take_one_tick() {
    let mut seq = sequencer();
    seq.previous_song();
    assert_eq!(seq.current_song_title(), "Twinkle Twinkle Little Star");
    run(&mut seq, 1, 1);
    assert_eq!(seq.output().sounding(ToneChannel::Right), NO);
    run(&mut seq, 2, 2);
    assert_eq!(seq.output().sounding(ToneChannel::Right), C5);
    // Single-note left track never leaves index 0.
    run(&mut seq, 3, 5000);
    assert_eq!(seq.voice(ToneChannel::Left).index(), 0);
}

#[test]
fn staccato_note_tone_then_silence() {
    let mut seq = playing(&STACCATO_SONG);
    run(&mut seq, 1, 1);
    assert_eq!(seq.output().sounding(ToneChannel::Right), A4);

    // 75 ms of tone from t=1, then the rest of the quarter is silent.
    run(&mut seq, 2, 75);
    assert_eq!(seq.output().sounding(ToneChannel::Right), A4);
    run(&mut seq, 76, 76);
    assert_eq!(seq.output().sounding(ToneChannel::Right), 0);
    assert_eq!(
        seq.voice(ToneChannel::Right).phase_ms(),
        QN - STACCATO_NOTE_MS
    );
    assert_eq!(seq.voice(ToneChannel::Right).index(), 1);

    run(&mut seq, 77, 512);
    assert_eq!(seq.output().sounding(ToneChannel::Right), 0);
    run(&mut seq, 513, 513);
    assert_eq!(seq.output().sounding(ToneChannel::Right), C5);

    assert_eq!(
        right_calls(&seq),
        vec![
            ToneCall::SetFrequency(ToneChannel::Right, A4),
            ToneCall::Enable(ToneChannel::Right),
            ToneCall::Disable(ToneChannel::Right),
            ToneCall::SetFrequency(ToneChannel::Right, C5),
            ToneCall::Enable(ToneChannel::Right),
        ]
    );
}

#[test]
fn hold_note_advances_without_gap() {
    let mut seq = playing(&HOLD_SONG);
    run(&mut seq, 1, 1);
    assert_eq!(seq.output().sounding(ToneChannel::Right), A4);
    // Hold moves past the note as soon as its tone starts.
    assert_eq!(seq.voice(ToneChannel::Right).index(), 1);
    assert!(seq.voice(ToneChannel::Right).is_tone_next());

    // The whole quarter sounds.
    run(&mut seq, 2, 512);
    assert_eq!(seq.output().sounding(ToneChannel::Right), A4);
    run(&mut seq, 513, 513);
    assert_eq!(seq.output().sounding(ToneChannel::Right), C5);

    assert_eq!(
        right_calls(&seq),
        vec![
            ToneCall::SetFrequency(ToneChannel::Right, A4),
            ToneCall::Enable(ToneChannel::Right),
            ToneCall::SetFrequency(ToneChannel::Right, C5),
            ToneCall::Enable(ToneChannel::Right),
        ]
    );
}
