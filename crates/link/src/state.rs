//! Connection state and failure taxonomy.

/// Lifecycle of the single slave channel.
///
/// ```text
///   configure ok                     open ok
/// ─────────────► ConfiguringDelay ──► Idle ──► AwaitingOpen ──► Open
///                   (500 ms)           ▲  ▲       │ 2000 ms       │ not open
///                                      │  └───────┘ timeout       ▼
///                                      └──────────────────────── Closing
///                                              closed
///   configure / open error ──► Error (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    /// Channel configured; letting the co-processor settle.
    ConfiguringDelay,
    /// Ready to request an open.
    Idle,
    /// Open requested; waiting for the co-processor to report it.
    AwaitingOpen,
    /// Channel open; processing inbound messages.
    Open,
    /// Link dropped or closed; waiting for the channel to finish closing.
    Closing,
    /// A co-processor request failed. Nothing further happens.
    Error,
}

impl ConnectionState {
    /// Stable name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ConnectionState::ConfiguringDelay => "configuring-delay",
            ConnectionState::Idle => "idle",
            ConnectionState::AwaitingOpen => "awaiting-open",
            ConnectionState::Open => "open",
            ConnectionState::Closing => "closing",
            ConnectionState::Error => "error",
        }
    }

    /// `true` only in the terminal [`ConnectionState::Error`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ConnectionState::Error)
    }
}

/// Why the link left its happy path.
///
/// Recorded by the connection manager for diagnostics. Never returned from a
/// task call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkFailure {
    /// The co-processor rejected the channel configuration. Terminal.
    #[error("channel configuration rejected")]
    ConfigurationFailure,
    /// The co-processor rejected the open request. Terminal.
    #[error("channel open request rejected")]
    OpenFailure,
    /// The channel did not report open in time. Retried.
    #[error("channel did not open in time")]
    OpenTimeout,
    /// The channel closed while open. Reconnected.
    #[error("channel closed unexpectedly")]
    UnexpectedClose,
}

impl LinkFailure {
    /// Short name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LinkFailure::ConfigurationFailure => "configuration-failure",
            LinkFailure::OpenFailure => "open-failure",
            LinkFailure::OpenTimeout => "open-timeout",
            LinkFailure::UnexpectedClose => "unexpected-close",
        }
    }

    /// Whether the manager stops trying after this failure.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            LinkFailure::ConfigurationFailure | LinkFailure::OpenFailure
        )
    }
}
