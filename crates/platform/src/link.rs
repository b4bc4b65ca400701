//! Wireless link-layer abstraction (ANT co-processor).
//!
//! The link driver owns the radio. This crate only describes the small API
//! the connection task calls: assign a channel, open and close it, poll its
//! status, and pull one buffered application message.

/// Number of payload bytes in one ANT application message.
pub const APP_MESSAGE_BYTES: usize = 8;

/// Number of bytes in an ANT network key.
pub const NETWORK_KEY_BYTES: usize = 8;

/// The public ANT network key.
pub const DEFAULT_NETWORK_KEY: [u8; NETWORK_KEY_BYTES] = [0x00; NETWORK_KEY_BYTES];

/// Index of a channel on the co-processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

/// Which side of the link this device plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelRole {
    /// Slave (receive) channel; tracks a master's broadcast.
    Slave,
    /// Master (transmit) channel.
    Master,
}

/// Radio transmit power setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxPower {
    /// -20 dBm
    Minus20dBm,
    /// -12 dBm
    Minus12dBm,
    /// -4 dBm
    Minus4dBm,
    /// 0 dBm
    Zero,
    /// +4 dBm
    Plus4dBm,
}

/// Everything the co-processor needs to assign a channel.
///
/// Built once at startup and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelConfig {
    /// Channel index on the co-processor.
    pub channel: ChannelId,
    /// Slave or master.
    pub role: ChannelRole,
    /// Message period in 1/32768 s units (0x2000 = 4 Hz).
    pub period: u16,
    /// Device number of the master to pair with.
    pub device_id: u16,
    /// Device type code.
    pub device_type: u8,
    /// Transmission type code.
    pub transmission_type: u8,
    /// RF channel offset from 2400 MHz.
    pub rf_frequency: u8,
    /// Transmit power.
    pub tx_power: TxPower,
    /// Network key.
    pub network_key: [u8; NETWORK_KEY_BYTES],
}

/// Channel status as reported by the co-processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelStatus {
    /// Channel is open (searching or tracking).
    Open,
    /// Channel is fully closed.
    Closed,
    /// Anything else: unassigned, or an open/close still in progress.
    Pending,
}

/// Class of an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageClass {
    /// Broadcast/acknowledged data from the peer.
    Data,
    /// Channel event (e.g. the periodic "tick" with no new data).
    Event,
}

/// One buffered application message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InboundMessage {
    /// Data or event.
    pub class: MessageClass,
    /// Raw payload; interpretation is up to the application.
    pub payload: [u8; APP_MESSAGE_BYTES],
}

impl InboundMessage {
    /// A data message with the given payload.
    #[must_use]
    pub const fn data(payload: [u8; APP_MESSAGE_BYTES]) -> Self {
        Self {
            class: MessageClass::Data,
            payload,
        }
    }

    /// An event message with an empty payload.
    #[must_use]
    pub const fn event() -> Self {
        Self {
            class: MessageClass::Event,
            payload: [0; APP_MESSAGE_BYTES],
        }
    }
}

/// Link-layer driver for one radio.
///
/// All calls return immediately; the co-processor does the slow work in the
/// background and the caller polls [`channel_status`](Self::channel_status).
pub trait LinkRadio {
    /// Error type
    type Error: core::fmt::Debug;

    /// Assign and configure a channel.
    fn configure_channel(&mut self, config: &ChannelConfig) -> Result<(), Self::Error>;

    /// Request that a configured channel be opened.
    fn open_channel(&mut self, channel: ChannelId) -> Result<(), Self::Error>;

    /// Request that a channel be closed. Completion is seen via status polling.
    fn close_channel(&mut self, channel: ChannelId);

    /// Current status of a channel.
    fn channel_status(&mut self, channel: ChannelId) -> ChannelStatus;

    /// Pop the oldest buffered application message, if any.
    fn try_read_message(&mut self) -> Option<InboundMessage>;
}
