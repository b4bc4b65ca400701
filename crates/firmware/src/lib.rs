//! ANT music box firmware library
//!
//! Wires the feature crates into one cooperative application:
//!
//! - [`app::App`] owns the four tasks and runs them in a fixed order every
//!   scheduler quantum.
//! - [`input::ButtonRouter`] turns front-panel presses into the same
//!   [`platform::Command`]s the link delivers.
//! - [`board`] holds the board drivers built on `embedded-hal` (LEDs,
//!   buttons) and, with the `hardware` feature, the PWM buzzers.
//! - [`sim`] (feature `emulator`) provides a scripted master device and
//!   `tracing` sinks for the host simulator.
//!
//! # Features
//!
//! - `hardware`: STM32H743ZI target (Embassy, defmt-rtt, panic-probe)
//! - `emulator`: host simulator (tokio, tracing)
//! - `std`: host builds, with the platform mocks

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(clippy::all)]
#![allow(missing_docs)]

pub mod app;
pub mod board;
pub mod config;
pub mod input;

#[cfg(feature = "emulator")]
pub mod sim;

pub use app::App;
pub use input::ButtonRouter;
