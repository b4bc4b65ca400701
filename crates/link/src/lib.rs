//! ANT link: the slave-channel connection manager.
//!
//! This crate is `no_std`; it only uses `core` and the `platform` traits.
//! Logging goes to `defmt` or `tracing` depending on the
//! enabled feature.
//!
//! - [`channel`]: building the fixed [`ChannelConfig`](platform::ChannelConfig)
//! - [`message`]: command frame decoding and duplicate suppression
//! - [`state`]: connection states and failure kinds
//! - [`manager`]: the [`ConnectionManager`] task

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod channel;
pub mod manager;
pub mod message;
pub mod state;

pub use manager::{ConnectionManager, OPEN_TIMEOUT_MS, SETTLE_DELAY_MS};
pub use message::{CommandFrame, DecodeError, SequenceTracker, COMMAND_TAG};
pub use state::{ConnectionState, LinkFailure};
