//! Hardware Abstraction Layer for the ANT music box
//!
//! This crate provides trait-based abstractions for every collaborator the
//! application tasks talk to, plus the cooperative [`Task`] contract and
//! the millisecond [`Instant`] they are driven with. Nothing in here touches
//! hardware, so all application logic can be tested on the host.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: task order, board wiring)
//!         ↓
//! Feature Layers (link, playback, ui)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (Embassy HAL + ANT co-processor driver)
//! ```
//!
//! # Collaborators
//!
//! - [`LinkRadio`] - ANT channel assign/open/close/status/read
//! - [`ToneOutput`] - Two PWM buzzers
//! - [`Indicator`] - Board LEDs
//! - [`InputDevice`] - Front-panel buttons
//! - [`CharacterDisplay`] - 2 x 20 LCD
//!
//! # Features
//!
//! - `std`: Expose [`mocks`] to other crates' tests
//! - `defmt`: Enable defmt derives

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod display;
pub mod indicator;
pub mod input;
pub mod link;
pub mod mocks;
pub mod task;
pub mod time;
pub mod tone;
pub mod transport;

// Re-export main high-level traits
pub use display::{CharacterDisplay, DisplayLine, LCD_COLUMNS};
pub use indicator::{BlinkRate, Indicator, Led, LedPattern};
pub use input::{Button, InputDevice, InputEvent};
pub use link::{
    ChannelConfig, ChannelId, ChannelRole, ChannelStatus, InboundMessage, LinkRadio,
    MessageClass, TxPower, APP_MESSAGE_BYTES,
};
pub use task::Task;
pub use time::Instant;
pub use tone::{ToneChannel, ToneOutput};
pub use transport::{Command, NowPlaying, TransportControl};
