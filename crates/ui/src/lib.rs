//! Application UI layer: what the 2 x 20 character LCD shows.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod now_playing;

pub use now_playing::{NowPlayingTask, BUTTON_BANNER, SCROLL_PERIOD_MS};
