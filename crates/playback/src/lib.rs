//! Note playback: a two-voice envelope sequencer over flash-resident songs.
//!
//! This crate is `no_std` and allocation-free. Songs are static parallel
//! arrays validated once into a [`SongTable`]; the [`NoteSequencer`] task
//! drives two [`ToneOutput`](platform::ToneOutput) channels from it.
#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod engine;
pub mod notes;
pub mod sequencer;
pub mod song;
pub mod songs;
pub mod voice;

pub use engine::{PlaybackEngine, TransportState};
pub use sequencer::NoteSequencer;
pub use song::{Envelope, Note, NoteTrack, Song, SongError, SongTable};
