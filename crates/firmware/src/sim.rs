//! Host simulator collaborators.
//!
//! [`SimRadio`] plays the part of the remote: it answers the first open
//! request with silence, opens on the second, then broadcasts command
//! frames four times a second while a fixed script presses buttons on the
//! remote and drops the link once. [`SimButtons`] presses front-panel
//! buttons from a second script. The other types log what the board would
//! do through `tracing`.

use heapless::{Deque, String};
use link::CommandFrame;
use platform::{
    Button, ChannelConfig, ChannelId, ChannelStatus, CharacterDisplay, Command, DisplayLine,
    InboundMessage, Indicator, InputDevice, InputEvent, Instant, Led, LedPattern, LinkRadio, Task,
    ToneChannel, ToneOutput,
};

/// Time the simulated master takes to answer an open request.
pub const OPEN_LATENCY_MS: u32 = 300;

/// Time the co-processor takes to report a requested close.
pub const CLOSE_LATENCY_MS: u32 = 100;

/// Master broadcast period (4 Hz).
pub const BROADCAST_PERIOD_MS: u32 = 250;

/// Something the remote does, relative to the first time the link opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Press a button on the remote: bump that command's counter.
    Press(Command),
    /// Lose the link.
    Drop,
}

/// Default remote script.
pub const SCRIPT: &[(u32, Cue)] = &[
    (1_000, Cue::Press(Command::PlayPause)),
    (6_000, Cue::Press(Command::NextSong)),
    (12_000, Cue::Drop),
    (16_000, Cue::Press(Command::NextSong)),
    (22_000, Cue::Press(Command::PreviousSong)),
    (28_000, Cue::Press(Command::PlayPause)),
];

/// Default front-panel script, in simulator time.
pub const PANEL_SCRIPT: &[(u32, Button)] = &[
    (34_000, Button::PlayPause),
    (36_000, Button::Next),
    (38_000, Button::Aux),
];

/// Error from [`SimRadio`]. The simulated radio never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("simulated radio error")]
pub struct SimRadioError;

/// Scripted master device.
pub struct SimRadio {
    script: &'static [(u32, Cue)],
    next_cue: usize,
    now: Instant,
    status: ChannelStatus,
    open_requested: Option<Instant>,
    close_requested: Option<Instant>,
    open_attempts: u32,
    first_open: Option<Instant>,
    last_broadcast: Instant,
    frame: CommandFrame,
    inbox: Deque<InboundMessage, 8>,
}

impl SimRadio {
    pub fn new(script: &'static [(u32, Cue)]) -> Self {
        Self {
            script,
            next_cue: 0,
            now: Instant::ZERO,
            status: ChannelStatus::Closed,
            open_requested: None,
            close_requested: None,
            open_attempts: 0,
            first_open: None,
            last_broadcast: Instant::ZERO,
            frame: CommandFrame::new([0; Command::COUNT]),
            inbox: Deque::new(),
        }
    }

    /// Number of open requests seen.
    pub fn open_attempts(&self) -> u32 {
        self.open_attempts
    }

    /// The frame the master is currently broadcasting.
    pub fn frame(&self) -> CommandFrame {
        self.frame
    }

    /// Move simulated time forward. Call once per tick, before the link
    /// task runs.
    pub fn advance(&mut self, now: Instant) {
        self.now = now;

        if let Some(since) = self.close_requested {
            if now.is_time_up(since, CLOSE_LATENCY_MS) {
                self.close_requested = None;
                self.status = ChannelStatus::Closed;
                tracing::info!(at_ms = now.as_millis(), "sim: channel closed");
            }
        }

        // The first open request goes unanswered so the open timeout fires.
        if let Some(since) = self.open_requested {
            if self.open_attempts > 1 && now.is_time_up(since, OPEN_LATENCY_MS) {
                self.open_requested = None;
                self.status = ChannelStatus::Open;
                self.last_broadcast = now;
                if self.first_open.is_none() {
                    self.first_open = Some(now);
                }
                tracing::info!(at_ms = now.as_millis(), "sim: master found");
            }
        }

        let Some(start) = self.first_open else {
            return;
        };
        self.play_script(now.elapsed_since(start));

        if self.status == ChannelStatus::Open
            && now.is_time_up(self.last_broadcast, BROADCAST_PERIOD_MS)
        {
            self.last_broadcast = now;
            // A full inbox drops the broadcast, like a missed radio slot.
            let _ = self.inbox.push_back(InboundMessage::data(self.frame.encode()));
        }
    }

    fn play_script(&mut self, elapsed_ms: u32) {
        while let Some(&(at, cue)) = self.script.get(self.next_cue) {
            if elapsed_ms < at {
                break;
            }
            self.next_cue = self.next_cue.saturating_add(1);
            match cue {
                Cue::Press(command) => {
                    let mut sequences = [0; Command::COUNT];
                    for cmd in Command::ALL {
                        let seq = self.frame.sequence(cmd);
                        let bumped = if cmd == command {
                            seq.wrapping_add(1)
                        } else {
                            seq
                        };
                        if let Some(slot) = sequences.get_mut(cmd.index()) {
                            *slot = bumped;
                        }
                    }
                    self.frame = CommandFrame::new(sequences);
                    tracing::info!(command = command.name(), "sim: remote press");
                }
                Cue::Drop => {
                    if self.status == ChannelStatus::Open {
                        self.status = ChannelStatus::Pending;
                        self.close_requested = Some(self.now);
                        tracing::warn!("sim: link lost");
                    }
                }
            }
        }
    }
}

impl LinkRadio for SimRadio {
    type Error = SimRadioError;

    fn configure_channel(&mut self, config: &ChannelConfig) -> Result<(), Self::Error> {
        tracing::info!(
            channel = config.channel.0,
            device_id = config.device_id,
            device_type = config.device_type,
            transmission_type = config.transmission_type,
            "sim: channel assigned"
        );
        Ok(())
    }

    fn open_channel(&mut self, _channel: ChannelId) -> Result<(), Self::Error> {
        self.open_attempts = self.open_attempts.saturating_add(1);
        self.status = ChannelStatus::Pending;
        self.open_requested = Some(self.now);
        self.close_requested = None;
        Ok(())
    }

    fn close_channel(&mut self, _channel: ChannelId) {
        if self.status != ChannelStatus::Closed && self.close_requested.is_none() {
            self.status = ChannelStatus::Pending;
            self.close_requested = Some(self.now);
        }
        self.open_requested = None;
    }

    fn channel_status(&mut self, _channel: ChannelId) -> ChannelStatus {
        self.status
    }

    fn try_read_message(&mut self) -> Option<InboundMessage> {
        self.inbox.pop_front()
    }
}

/// Buzzers that log every change of audible pitch.
#[derive(Debug, Default)]
pub struct TracingTone {
    frequency: [u16; 2],
    enabled: [bool; 2],
}

impl TracingTone {
    pub fn new() -> Self {
        Self::default()
    }

    const fn slot(channel: ToneChannel) -> usize {
        match channel {
            ToneChannel::Right => 0,
            ToneChannel::Left => 1,
        }
    }

    /// Frequency audible on `channel`, 0 when silent.
    pub fn sounding(&self, channel: ToneChannel) -> u16 {
        let slot = Self::slot(channel);
        match (self.enabled.get(slot), self.frequency.get(slot)) {
            (Some(true), Some(hz)) => *hz,
            _ => 0,
        }
    }
}

impl ToneOutput for TracingTone {
    fn set_frequency(&mut self, channel: ToneChannel, hz: u16) {
        if let Some(f) = self.frequency.get_mut(Self::slot(channel)) {
            *f = hz;
        }
    }

    fn enable(&mut self, channel: ToneChannel) {
        if let Some(e) = self.enabled.get_mut(Self::slot(channel)) {
            *e = true;
        }
        tracing::debug!(channel = channel.name(), hz = self.sounding(channel), "tone on");
    }

    fn disable(&mut self, channel: ToneChannel) {
        let was = self.sounding(channel);
        if let Some(e) = self.enabled.get_mut(Self::slot(channel)) {
            *e = false;
        }
        if was != 0 {
            tracing::trace!(channel = channel.name(), "tone off");
        }
    }
}

/// Front-panel buttons pressed from a script.
///
/// [`advance`](Self::advance) queues every press that has come due; each
/// [`InputDevice::poll_event`] hands out one.
pub struct SimButtons {
    script: &'static [(u32, Button)],
    next_press: usize,
    pending: Deque<InputEvent, 4>,
}

impl SimButtons {
    pub fn new(script: &'static [(u32, Button)]) -> Self {
        Self {
            script,
            next_press: 0,
            pending: Deque::new(),
        }
    }

    /// Queue the presses due at or before `now`.
    pub fn advance(&mut self, now: Instant) {
        while let Some(&(at_ms, button)) = self.script.get(self.next_press) {
            if at_ms > now.as_millis() {
                break;
            }
            self.next_press = self.next_press.saturating_add(1);
            tracing::info!(button = ?button, "panel press");
            if self.pending.push_back(InputEvent::ButtonPress(button)).is_err() {
                tracing::warn!(button = ?button, "panel queue full, press dropped");
            }
        }
    }

    /// Presses queued but not yet polled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl InputDevice for SimButtons {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }
}

/// LEDs that log pattern changes.
#[derive(Debug, Default)]
pub struct TracingIndicator {
    patterns: [LedPattern; 4],
}

impl TracingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self, led: Led) -> LedPattern {
        self.patterns
            .get(led.index())
            .copied()
            .unwrap_or_default()
    }
}

const fn led_name(led: Led) -> &'static str {
    match led {
        Led::Red => "red",
        Led::Green => "green",
        Led::Blue => "blue",
        Led::White => "white",
    }
}

const fn pattern_name(pattern: LedPattern) -> &'static str {
    match pattern {
        LedPattern::Off => "off",
        LedPattern::On => "on",
        LedPattern::Blink(_) => "blink",
    }
}

impl Indicator for TracingIndicator {
    fn set_indicator(&mut self, led: Led, pattern: LedPattern) {
        let Some(slot) = self.patterns.get_mut(led.index()) else {
            return;
        };
        if *slot != pattern {
            *slot = pattern;
            tracing::info!(led = led_name(led), pattern = pattern_name(pattern), "led");
        }
    }
}

// Blinking is only reported, never rendered.
impl Task for TracingIndicator {
    fn initialize(&mut self, _now: Instant, _ctx: &mut ()) {}

    fn run_tick(&mut self, _now: Instant, _ctx: &mut ()) {}
}

/// A 2 x 20 display that logs line changes: the button line at info, the
/// scrolling title line at trace.
#[derive(Debug, Default)]
pub struct TracingDisplay {
    lines: [String<{ platform::LCD_COLUMNS }>; 2],
}

impl TracingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, line: DisplayLine) -> &str {
        self.lines
            .get(Self::slot(line))
            .map_or("", |text| text.as_str())
    }

    const fn slot(line: DisplayLine) -> usize {
        match line {
            DisplayLine::Line1 => 0,
            DisplayLine::Line2 => 1,
        }
    }
}

impl CharacterDisplay for TracingDisplay {
    fn write_line(&mut self, line: DisplayLine, text: &str) {
        let Some(slot) = self.lines.get_mut(Self::slot(line)) else {
            return;
        };
        if slot.as_str() == text {
            return;
        }
        slot.clear();
        for ch in text.chars() {
            if slot.push(ch).is_err() {
                break;
            }
        }
        match line {
            DisplayLine::Line1 => tracing::trace!(text = slot.as_str(), "lcd line 1"),
            DisplayLine::Line2 => tracing::info!(text = slot.as_str(), "lcd line 2"),
        }
    }

    fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects, clippy::expect_used)]

    use super::*;

    const CHANNEL: ChannelId = ChannelId(0);

    fn run_until(radio: &mut SimRadio, from: u32, to: u32) {
        for ms in from..=to {
            radio.advance(Instant::from_millis(ms));
        }
    }

    #[test]
    fn test_first_open_goes_unanswered() {
        let mut radio = SimRadio::new(SCRIPT);
        radio.open_channel(CHANNEL).expect("sim radio accepts opens");
        run_until(&mut radio, 0, 5_000);
        assert_eq!(radio.channel_status(CHANNEL), ChannelStatus::Pending);
        assert!(radio.try_read_message().is_none());
    }

    #[test]
    fn test_second_open_connects_and_broadcasts() {
        let mut radio = SimRadio::new(SCRIPT);
        radio.open_channel(CHANNEL).expect("sim radio accepts opens");
        radio.advance(Instant::from_millis(2_000));
        radio.open_channel(CHANNEL).expect("sim radio accepts opens");
        run_until(&mut radio, 2_000, 2_300 + BROADCAST_PERIOD_MS);

        assert_eq!(radio.open_attempts(), 2);
        assert_eq!(radio.channel_status(CHANNEL), ChannelStatus::Open);
        let message = radio.try_read_message();
        assert!(message.is_some());
    }

    #[test]
    fn test_script_bumps_counters_and_drops_link() {
        let mut radio = SimRadio::new(SCRIPT);
        radio.open_channel(CHANNEL).expect("sim radio accepts opens");
        radio.open_channel(CHANNEL).expect("sim radio accepts opens");
        run_until(&mut radio, 0, OPEN_LATENCY_MS);
        let opened = OPEN_LATENCY_MS;

        run_until(&mut radio, opened + 1, opened + 6_000);
        assert_eq!(radio.frame().sequence(Command::PlayPause), 1);
        assert_eq!(radio.frame().sequence(Command::NextSong), 1);
        assert_eq!(radio.frame().sequence(Command::PreviousSong), 0);

        run_until(&mut radio, opened + 6_001, opened + 12_000);
        assert_eq!(radio.channel_status(CHANNEL), ChannelStatus::Pending);
        run_until(&mut radio, opened + 12_001, opened + 12_000 + CLOSE_LATENCY_MS);
        assert_eq!(radio.channel_status(CHANNEL), ChannelStatus::Closed);
    }

    #[test]
    fn test_panel_presses_come_due_in_order() {
        const PRESSES: &[(u32, Button)] = &[
            (10, Button::Next),
            (10, Button::PlayPause),
            (20, Button::Previous),
        ];
        let mut panel = SimButtons::new(PRESSES);

        panel.advance(Instant::from_millis(9));
        assert_eq!(panel.poll_event(), None);

        panel.advance(Instant::from_millis(10));
        assert_eq!(panel.pending(), 2);
        assert_eq!(panel.poll_event(), Some(InputEvent::ButtonPress(Button::Next)));
        assert_eq!(panel.poll_event(), Some(InputEvent::ButtonPress(Button::PlayPause)));
        assert_eq!(panel.poll_event(), None);

        panel.advance(Instant::from_millis(500));
        panel.advance(Instant::from_millis(501));
        assert_eq!(panel.poll_event(), Some(InputEvent::ButtonPress(Button::Previous)));
        assert_eq!(panel.poll_event(), None);
    }

    #[test]
    fn test_tone_sink_reports_audible_pitch() {
        let mut tone = TracingTone::new();
        tone.set_frequency(ToneChannel::Left, 440);
        assert_eq!(tone.sounding(ToneChannel::Left), 0);
        tone.enable(ToneChannel::Left);
        assert_eq!(tone.sounding(ToneChannel::Left), 440);
        tone.disable(ToneChannel::Left);
        assert_eq!(tone.sounding(ToneChannel::Left), 0);
    }
}
