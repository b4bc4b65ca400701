//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests. Every mock records what it was
//! asked to do so tests can assert on it afterwards.

#![cfg(any(test, feature = "std"))]
// Test doubles: counters and fixed two-slot arrays.
#![allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]

use crate::*;

/// Error returned by [`MockRadio`] when a scripted failure is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockRadioError;

/// Mock link radio.
///
/// Tests script the results of `configure_channel`/`open_channel`, set the
/// reported channel status directly, and queue inbound messages.
pub struct MockRadio {
    /// Result returned by the next `configure_channel` calls.
    pub configure_ok: bool,
    /// Result returned by the next `open_channel` calls.
    pub open_ok: bool,
    /// Status reported by `channel_status`.
    pub status: ChannelStatus,
    /// Number of `configure_channel` calls.
    pub configure_calls: usize,
    /// Number of `open_channel` calls.
    pub open_calls: usize,
    /// Number of `close_channel` calls.
    pub close_calls: usize,
    /// Number of `channel_status` calls.
    pub status_polls: usize,
    /// Configuration passed to the last `configure_channel`.
    pub last_config: Option<ChannelConfig>,
    inbox: heapless::Deque<InboundMessage, 16>,
}

impl MockRadio {
    /// A radio that accepts configuration and open requests and reports
    /// the channel closed.
    pub fn new() -> Self {
        Self {
            configure_ok: true,
            open_ok: true,
            status: ChannelStatus::Closed,
            configure_calls: 0,
            open_calls: 0,
            close_calls: 0,
            status_polls: 0,
            last_config: None,
            inbox: heapless::Deque::new(),
        }
    }

    /// Queue an inbound message.
    pub fn push_message(&mut self, message: InboundMessage) -> Result<(), InboundMessage> {
        self.inbox.push_back(message)
    }

    /// Number of queued, unread messages.
    pub fn pending_messages(&self) -> usize {
        self.inbox.len()
    }
}

impl Default for MockRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkRadio for MockRadio {
    type Error = MockRadioError;

    fn configure_channel(&mut self, config: &ChannelConfig) -> Result<(), Self::Error> {
        self.configure_calls += 1;
        self.last_config = Some(*config);
        if self.configure_ok {
            Ok(())
        } else {
            Err(MockRadioError)
        }
    }

    fn open_channel(&mut self, _channel: ChannelId) -> Result<(), Self::Error> {
        self.open_calls += 1;
        if self.open_ok {
            Ok(())
        } else {
            Err(MockRadioError)
        }
    }

    fn close_channel(&mut self, _channel: ChannelId) {
        self.close_calls += 1;
    }

    fn channel_status(&mut self, _channel: ChannelId) -> ChannelStatus {
        self.status_polls += 1;
        self.status
    }

    fn try_read_message(&mut self) -> Option<InboundMessage> {
        self.inbox.pop_front()
    }
}

/// A single call made on [`MockTone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCall {
    /// `set_frequency(channel, hz)`
    SetFrequency(ToneChannel, u16),
    /// `enable(channel)`
    Enable(ToneChannel),
    /// `disable(channel)`
    Disable(ToneChannel),
}

/// Mock tone output. Tracks per-channel state and the recent call log.
pub struct MockTone {
    frequency: [u16; 2],
    enabled: [bool; 2],
    calls: heapless::Vec<ToneCall, 256>,
}

impl MockTone {
    /// Create new mock with both channels silent.
    pub fn new() -> Self {
        Self {
            frequency: [0; 2],
            enabled: [false; 2],
            calls: heapless::Vec::new(),
        }
    }

    fn slot(channel: ToneChannel) -> usize {
        match channel {
            ToneChannel::Right => 0,
            ToneChannel::Left => 1,
        }
    }

    /// Last frequency set on a channel.
    pub fn frequency(&self, channel: ToneChannel) -> u16 {
        self.frequency[Self::slot(channel)]
    }

    /// Whether a channel is currently sounding.
    pub fn is_enabled(&self, channel: ToneChannel) -> bool {
        self.enabled[Self::slot(channel)]
    }

    /// Frequency currently audible on a channel (0 when disabled).
    pub fn sounding(&self, channel: ToneChannel) -> u16 {
        if self.is_enabled(channel) {
            self.frequency(channel)
        } else {
            0
        }
    }

    /// Calls recorded since the last [`clear_calls`](Self::clear_calls).
    /// Keeps the first 256 calls only.
    pub fn calls(&self) -> &[ToneCall] {
        &self.calls
    }

    /// Forget the recorded calls (channel state is kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: ToneCall) {
        let _ = self.calls.push(call);
    }
}

impl Default for MockTone {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneOutput for MockTone {
    fn set_frequency(&mut self, channel: ToneChannel, hz: u16) {
        self.frequency[Self::slot(channel)] = hz;
        self.record(ToneCall::SetFrequency(channel, hz));
    }

    fn enable(&mut self, channel: ToneChannel) {
        self.enabled[Self::slot(channel)] = true;
        self.record(ToneCall::Enable(channel));
    }

    fn disable(&mut self, channel: ToneChannel) {
        self.enabled[Self::slot(channel)] = false;
        self.record(ToneCall::Disable(channel));
    }
}

/// Mock indicator. Remembers the last pattern per LED.
pub struct MockIndicator {
    patterns: [LedPattern; 4],
    set_count: usize,
    ticks: usize,
}

impl MockIndicator {
    /// Create new mock with every LED off.
    pub fn new() -> Self {
        Self {
            patterns: [LedPattern::Off; 4],
            set_count: 0,
            ticks: 0,
        }
    }

    /// Last pattern set on `led`.
    pub fn pattern(&self, led: Led) -> LedPattern {
        self.patterns[led.index()]
    }

    /// Total number of `set_indicator` calls.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Number of times the mock was ticked as a task.
    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

impl Default for MockIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for MockIndicator {
    fn set_indicator(&mut self, led: Led, pattern: LedPattern) {
        self.patterns[led.index()] = pattern;
        self.set_count += 1;
    }
}

impl Task for MockIndicator {
    fn initialize(&mut self, _now: Instant, _ctx: &mut ()) {}

    fn run_tick(&mut self, _now: Instant, _ctx: &mut ()) {
        self.ticks += 1;
    }
}

/// Mock input device
pub struct MockInput {
    events: heapless::Deque<InputEvent, 16>,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: heapless::Deque::new(),
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: InputEvent) -> Result<(), InputEvent> {
        self.events.push_back(event)
    }

    /// Queue a button press
    pub fn press(&mut self, button: Button) -> Result<(), InputEvent> {
        self.add_event(InputEvent::ButtonPress(button))
    }

    /// Number of events not yet polled
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for MockInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Mock character display. Keeps the current text of both lines.
pub struct MockDisplay {
    lines: [heapless::String<64>; 2],
    write_count: usize,
    clear_count: usize,
}

impl MockDisplay {
    /// Create new blank mock display
    pub fn new() -> Self {
        Self {
            lines: [heapless::String::new(), heapless::String::new()],
            write_count: 0,
            clear_count: 0,
        }
    }

    fn slot(line: DisplayLine) -> usize {
        match line {
            DisplayLine::Line1 => 0,
            DisplayLine::Line2 => 1,
        }
    }

    /// Current text of a line.
    pub fn line(&self, line: DisplayLine) -> &str {
        &self.lines[Self::slot(line)]
    }

    /// Number of `write_line` calls.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of `clear` calls.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterDisplay for MockDisplay {
    fn write_line(&mut self, line: DisplayLine, text: &str) {
        let slot = &mut self.lines[Self::slot(line)];
        slot.clear();
        for ch in text.chars() {
            if slot.push(ch).is_err() {
                break;
            }
        }
        self.write_count += 1;
    }

    fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.clear_count += 1;
    }
}

/// Transport test double. Counts every control call and answers
/// now-playing queries from settable fields.
pub struct RecordingTransport {
    /// Commands received, in order (first 64 kept).
    pub commands: heapless::Vec<Command, 64>,
    /// Title reported by [`NowPlaying::current_song_title`].
    pub title: &'static str,
    /// Artist reported by [`NowPlaying::current_song_artist`].
    pub artist: &'static str,
    /// Index reported by [`NowPlaying::current_song_index`].
    pub index: usize,
    /// Reported playing flag; flipped by `toggle_play_pause`.
    pub playing: bool,
}

impl RecordingTransport {
    /// Create a recorder reporting an empty song at index 0, paused.
    pub fn new() -> Self {
        Self {
            commands: heapless::Vec::new(),
            title: "",
            artist: "",
            index: 0,
            playing: false,
        }
    }

    /// Number of times `command` was received.
    pub fn count(&self, command: Command) -> usize {
        self.commands.iter().filter(|c| **c == command).count()
    }

    fn record(&mut self, command: Command) {
        let _ = self.commands.push(command);
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportControl for RecordingTransport {
    fn toggle_play_pause(&mut self) {
        self.playing = !self.playing;
        self.record(Command::PlayPause);
    }

    fn next_song(&mut self) {
        self.playing = true;
        self.record(Command::NextSong);
    }

    fn previous_song(&mut self) {
        self.playing = true;
        self.record(Command::PreviousSong);
    }
}

impl NowPlaying for RecordingTransport {
    fn current_song_title(&self) -> &str {
        self.title
    }

    fn current_song_artist(&self) -> &str {
        self.artist
    }

    fn current_song_index(&self) -> usize {
        self.index
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
