//! Note frequencies, note lengths and envelope timing.
//!
//! Frequencies are equal-tempered pitches rounded to the nearest Hz, which is
//! all a PWM buzzer can resolve. Names follow scientific pitch notation with
//! an `S` suffix for sharps (`A3S` = A♯3).

#![allow(missing_docs)]

/// Silence.
pub const NO: u16 = 0;

pub const C3: u16 = 131;
pub const C3S: u16 = 139;
pub const D3: u16 = 147;
pub const D3S: u16 = 156;
pub const E3: u16 = 165;
pub const F3: u16 = 175;
pub const F3S: u16 = 185;
pub const G3: u16 = 196;
pub const G3S: u16 = 208;
pub const A3: u16 = 220;
pub const A3S: u16 = 233;
pub const B3: u16 = 247;

pub const C4: u16 = 262;
pub const C4S: u16 = 277;
pub const D4: u16 = 294;
pub const D4S: u16 = 311;
pub const E4: u16 = 330;
pub const F4: u16 = 349;
pub const F4S: u16 = 370;
pub const G4: u16 = 392;
pub const G4S: u16 = 415;
pub const A4: u16 = 440;
pub const A4S: u16 = 466;
pub const B4: u16 = 494;

pub const C5: u16 = 523;
pub const C5S: u16 = 554;
pub const D5: u16 = 587;
pub const D5S: u16 = 622;
pub const E5: u16 = 659;
pub const F5: u16 = 698;
pub const F5S: u16 = 740;
pub const G5: u16 = 784;
pub const G5S: u16 = 831;
pub const A5: u16 = 880;
pub const A5S: u16 = 932;
pub const B5: u16 = 988;

pub const C6: u16 = 1047;
pub const C6S: u16 = 1109;
pub const D6: u16 = 1175;
pub const D6S: u16 = 1245;
pub const E6: u16 = 1319;
pub const F6: u16 = 1397;
pub const F6S: u16 = 1480;
pub const G6: u16 = 1568;
pub const G6S: u16 = 1661;
pub const A6: u16 = 1760;
pub const A6S: u16 = 1865;
pub const B6: u16 = 1976;

pub const C7: u16 = 2093;

/// One measure in ms. Divisible by 16 so every note length is exact.
pub const MEASURE_MS: u16 = 2048;

/// Full note
pub const FN: u16 = MEASURE_MS;
/// Half note
pub const HN: u16 = MEASURE_MS / 2;
/// Quarter note
pub const QN: u16 = MEASURE_MS / 4;
/// Eighth note
pub const EN: u16 = MEASURE_MS / 8;
/// Sixteenth note
pub const SN: u16 = MEASURE_MS / 16;

/// Trailing silence of a regular note.
pub const REGULAR_NOTE_ADJUSTMENT_MS: u16 = 50;

/// Tone time of a staccato note.
pub const STACCATO_NOTE_MS: u16 = 75;
