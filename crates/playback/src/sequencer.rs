//! Two-voice note sequencer task.

use platform::{Instant, NowPlaying, Task, ToneChannel, ToneOutput, TransportControl};

use crate::engine::{PlaybackEngine, TransportState};
use crate::song::{Song, SongTable};
use crate::voice::{Phase, Voice};

/// Plays the current song of a [`SongTable`] on two tone channels.
///
/// Each channel steps independently through its own track. Pausing silences
/// both outputs and freezes both voices; resuming picks up mid-note.
pub struct NoteSequencer<'a, O> {
    songs: SongTable<'a>,
    engine: PlaybackEngine,
    voices: [Voice; 2],
    out: O,
    last_tick: Instant,
    /// Re-drive the paused tones on the next playing tick.
    resume_pending: bool,
}

impl<'a, O: ToneOutput> NoteSequencer<'a, O> {
    /// Create a paused sequencer on the first song.
    pub fn new(songs: SongTable<'a>, out: O) -> Self {
        Self {
            engine: PlaybackEngine::new(songs.len()),
            songs,
            voices: [Voice::new(ToneChannel::Right), Voice::new(ToneChannel::Left)],
            out,
            last_tick: Instant::ZERO,
            resume_pending: false,
        }
    }

    /// Current transport state.
    #[must_use]
    pub fn transport_state(&self) -> TransportState {
        self.engine.state()
    }

    /// Number of songs in the table.
    #[must_use]
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// The song being played.
    #[must_use]
    pub fn current_song(&self) -> Option<&'a Song<'a>> {
        self.songs.get(self.engine.current())
    }

    /// Playback position of `channel`.
    #[must_use]
    pub fn voice(&self, channel: ToneChannel) -> &Voice {
        let [right, left] = &self.voices;
        match channel {
            ToneChannel::Right => right,
            ToneChannel::Left => left,
        }
    }

    /// Shared access to the tone output.
    pub fn output(&self) -> &O {
        &self.out
    }

    /// Exclusive access to the tone output.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.out
    }

    fn silence(&mut self) {
        for channel in ToneChannel::ALL {
            self.out.disable(channel);
        }
    }

    fn restart_song(&mut self) {
        for voice in &mut self.voices {
            voice.reset();
        }
        self.resume_pending = false;
        self.silence();
        info!(
            "player: song {} of {}",
            self.engine.current(),
            self.songs.len()
        );
    }

    fn play_tick(&mut self, now: Instant) {
        let songs = self.songs;
        let Some(song) = songs.get(self.engine.current()) else {
            return;
        };
        if self.resume_pending {
            for voice in &self.voices {
                voice.resume(&mut self.out);
            }
            self.resume_pending = false;
        }
        for voice in &mut self.voices {
            if !voice.is_due(now) {
                continue;
            }
            let track = song.track(voice.channel());
            match voice.step(now, track, &mut self.out) {
                Some(Phase::Tone { index, hz, ms }) => {
                    trace!(
                        "player: {} note {} {} Hz {} ms",
                        voice.channel().name(),
                        index,
                        hz,
                        ms
                    );
                }
                Some(Phase::Silence { index, ms }) => {
                    trace!(
                        "player: {} rest after {} {} ms",
                        voice.channel().name(),
                        index,
                        ms
                    );
                }
                None => {}
            }
        }
    }

    fn pause_tick(&mut self, now: Instant) {
        let paused_ms = now.elapsed_since(self.last_tick);
        for voice in &mut self.voices {
            voice.hold(paused_ms);
        }
        self.silence();
    }
}

impl<O: ToneOutput> Task for NoteSequencer<'_, O> {
    fn initialize(&mut self, now: Instant, _ctx: &mut ()) {
        self.engine = PlaybackEngine::new(self.songs.len());
        for voice in &mut self.voices {
            voice.reset();
        }
        self.resume_pending = false;
        self.last_tick = now;
        self.silence();
        info!("player: {} songs loaded", self.songs.len());
    }

    fn run_tick(&mut self, now: Instant, _ctx: &mut ()) {
        match self.engine.state() {
            TransportState::Playing => self.play_tick(now),
            TransportState::Paused => self.pause_tick(now),
        }
        self.last_tick = now;
    }
}

impl<O: ToneOutput> TransportControl for NoteSequencer<'_, O> {
    fn toggle_play_pause(&mut self) {
        let state = self.engine.toggle();
        self.resume_pending = state == TransportState::Playing;
        info!("player: {}", state.name());
    }

    fn next_song(&mut self) {
        self.engine.next();
        self.restart_song();
    }

    fn previous_song(&mut self) {
        self.engine.previous();
        self.restart_song();
    }
}

impl<O: ToneOutput> NowPlaying for NoteSequencer<'_, O> {
    fn current_song_title(&self) -> &str {
        self.current_song().map_or("", |song| song.title)
    }

    fn current_song_artist(&self) -> &str {
        self.current_song().map_or("", |song| song.artist)
    }

    fn current_song_index(&self) -> usize {
        self.engine.current()
    }

    fn is_playing(&self) -> bool {
        self.engine.is_playing()
    }
}
