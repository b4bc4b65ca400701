//! Connection manager task.
//!
//! Owns the radio, the indicator LEDs and the channel configuration, and
//! walks the [`ConnectionState`] machine one state per tick. Decoded command
//! frames are dispatched into the [`TransportControl`] the task is lent for
//! each tick.

use platform::{
    BlinkRate, ChannelConfig, ChannelStatus, Command, Indicator, Instant, Led, LedPattern,
    LinkRadio, MessageClass, Task, TransportControl,
};

use crate::message::{CommandFrame, SequenceTracker};
use crate::state::{ConnectionState, LinkFailure};

/// Settle time between a successful configure and the first open request.
pub const SETTLE_DELAY_MS: u32 = 500;

/// How long an open request may stay unanswered before it is retried.
pub const OPEN_TIMEOUT_MS: u32 = 2000;

/// Red LED pattern shown on a terminal failure.
pub const FAULT_PATTERN: LedPattern = LedPattern::Blink(BlinkRate::Hz4);

/// Green LED pattern while searching for the master.
pub const SEARCH_PATTERN: LedPattern = LedPattern::Blink(BlinkRate::Hz1);

/// Green LED pattern while the channel is open.
pub const CONNECTED_PATTERN: LedPattern = LedPattern::On;

/// Slave channel connection task.
pub struct ConnectionManager<R, L> {
    config: ChannelConfig,
    radio: R,
    indicator: L,
    state: ConnectionState,
    /// When the current timed wait started (settle delay or open attempt).
    state_since: Instant,
    tracker: SequenceTracker,
    last_failure: Option<LinkFailure>,
    reconnects: u32,
    open_timeouts: u32,
    discarded: u32,
}

impl<R: LinkRadio, L: Indicator> ConnectionManager<R, L> {
    /// Create the task. Nothing is sent to the radio until
    /// [`Task::initialize`].
    pub fn new(config: ChannelConfig, radio: R, indicator: L) -> Self {
        Self {
            config,
            radio,
            indicator,
            state: ConnectionState::ConfiguringDelay,
            state_since: Instant::ZERO,
            tracker: SequenceTracker::new(),
            last_failure: None,
            reconnects: 0,
            open_timeouts: 0,
            discarded: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Channel configuration this manager applies.
    #[must_use]
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Most recent failure, if any.
    #[must_use]
    pub fn last_failure(&self) -> Option<LinkFailure> {
        self.last_failure
    }

    /// Number of completed Closing → Idle recoveries.
    #[must_use]
    pub fn reconnect_count(&self) -> u32 {
        self.reconnects
    }

    /// Number of open attempts that timed out.
    #[must_use]
    pub fn open_timeouts(&self) -> u32 {
        self.open_timeouts
    }

    /// Number of data messages dropped because they failed to decode.
    #[must_use]
    pub fn discarded_messages(&self) -> u32 {
        self.discarded
    }

    /// Last-seen sequence numbers.
    #[must_use]
    pub fn sequences(&self) -> &SequenceTracker {
        &self.tracker
    }

    /// Shared access to the radio.
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Exclusive access to the radio (test scripting, simulator).
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Shared access to the indicator.
    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// Exclusive access to the indicator, e.g. to tick a blink driver.
    pub fn indicator_mut(&mut self) -> &mut L {
        &mut self.indicator
    }

    fn enter(&mut self, next: ConnectionState, now: Instant) {
        info!(
            "link: {} -> {} at {} ms",
            self.state.name(),
            next.name(),
            now.as_millis()
        );
        self.state = next;
        self.state_since = now;
        let green = match next {
            ConnectionState::AwaitingOpen => SEARCH_PATTERN,
            ConnectionState::Open => CONNECTED_PATTERN,
            _ => LedPattern::Off,
        };
        self.indicator.set_indicator(Led::Green, green);
    }

    fn fail(&mut self, failure: LinkFailure, now: Instant) {
        error!("link: {}", failure.name());
        self.last_failure = Some(failure);
        self.indicator.set_indicator(Led::Red, FAULT_PATTERN);
        self.enter(ConnectionState::Error, now);
    }

    fn process_payload<T: TransportControl + ?Sized>(&mut self, payload: &[u8], transport: &mut T) {
        let frame = match CommandFrame::decode(payload) {
            Ok(frame) => frame,
            Err(_e) => {
                trace!("link: discarded message");
                self.discarded = self.discarded.wrapping_add(1);
                return;
            }
        };
        for command in Command::ALL {
            let seq = frame.sequence(command);
            if self.tracker.accept(command, seq) {
                debug!("link: {} seq {}", command.name(), seq);
                command.dispatch(transport);
            } else {
                trace!("link: duplicate {} seq {}", command.name(), seq);
            }
        }
    }
}

impl<R, L, T> Task<T> for ConnectionManager<R, L>
where
    R: LinkRadio,
    L: Indicator,
    T: TransportControl + ?Sized,
{
    fn initialize(&mut self, now: Instant, _transport: &mut T) {
        match self.radio.configure_channel(&self.config) {
            Ok(()) => {
                info!("link: channel {} configured", self.config.channel.0);
                self.enter(ConnectionState::ConfiguringDelay, now);
            }
            Err(_e) => self.fail(LinkFailure::ConfigurationFailure, now),
        }
    }

    fn run_tick(&mut self, now: Instant, transport: &mut T) {
        let channel = self.config.channel;
        match self.state {
            ConnectionState::ConfiguringDelay => {
                if now.is_time_up(self.state_since, SETTLE_DELAY_MS) {
                    self.enter(ConnectionState::Idle, now);
                }
            }
            ConnectionState::Idle => match self.radio.open_channel(channel) {
                Ok(()) => {
                    info!("link: opening channel {}", channel.0);
                    self.enter(ConnectionState::AwaitingOpen, now);
                }
                Err(_e) => self.fail(LinkFailure::OpenFailure, now),
            },
            ConnectionState::AwaitingOpen => {
                if self.radio.channel_status(channel) == ChannelStatus::Open {
                    self.enter(ConnectionState::Open, now);
                } else if now.is_time_up(self.state_since, OPEN_TIMEOUT_MS) {
                    warn!("link: open timeout after {} ms", OPEN_TIMEOUT_MS);
                    self.radio.close_channel(channel);
                    self.open_timeouts = self.open_timeouts.wrapping_add(1);
                    self.last_failure = Some(LinkFailure::OpenTimeout);
                    self.enter(ConnectionState::Idle, now);
                }
            }
            ConnectionState::Open => {
                if self.radio.channel_status(channel) != ChannelStatus::Open {
                    warn!("link: channel no longer open");
                    self.last_failure = Some(LinkFailure::UnexpectedClose);
                    self.enter(ConnectionState::Closing, now);
                } else if let Some(message) = self.radio.try_read_message() {
                    if message.class == MessageClass::Data {
                        self.process_payload(&message.payload, transport);
                    }
                }
            }
            ConnectionState::Closing => {
                if self.radio.channel_status(channel) == ChannelStatus::Closed {
                    self.reconnects = self.reconnects.wrapping_add(1);
                    self.enter(ConnectionState::Idle, now);
                }
            }
            ConnectionState::Error => {}
        }
    }
}
