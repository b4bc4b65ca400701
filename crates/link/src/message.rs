//! Command message framing and duplicate suppression.
//!
//! The master broadcasts its current command counters in every data
//! message, so the same frame arrives many times. A command fires only when
//! its counter changes.
//!
//! Frame layout (ANT application payload, 8 bytes):
//!
//! ```text
//! byte 0   tag = 0xC5
//! byte 1   play/pause sequence number
//! byte 2   previous-song sequence number
//! byte 3   next-song sequence number
//! byte 4.. ignored
//! ```

use platform::Command;

/// Protocol tag carried in byte 0 of every command frame.
pub const COMMAND_TAG: u8 = 0xC5;

/// Smallest valid frame: the tag plus one sequence byte per command.
pub const MIN_FRAME_LEN: usize = 1 + Command::COUNT;

/// Reasons a payload is not a command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Zero-length payload.
    #[error("empty payload")]
    Empty,
    /// Byte 0 is not [`COMMAND_TAG`].
    #[error("unexpected tag {0:#04x}")]
    BadTag(u8),
    /// Tag matches but the sequence bytes are missing.
    #[error("frame too short ({len} bytes)")]
    TooShort {
        /// Payload length received.
        len: usize,
    },
}

/// A decoded command frame: one sequence number per [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandFrame {
    sequences: [u8; Command::COUNT],
}

impl CommandFrame {
    /// Build a frame from sequence numbers in [`Command::ALL`] order.
    #[must_use]
    pub const fn new(sequences: [u8; Command::COUNT]) -> Self {
        Self { sequences }
    }

    /// Validate and decode a raw payload. Bytes past [`MIN_FRAME_LEN`] are
    /// ignored.
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let (&tag, rest) = payload.split_first().ok_or(DecodeError::Empty)?;
        if tag != COMMAND_TAG {
            return Err(DecodeError::BadTag(tag));
        }
        let mut sequences = [0u8; Command::COUNT];
        let field = rest
            .get(..Command::COUNT)
            .ok_or(DecodeError::TooShort { len: payload.len() })?;
        sequences.copy_from_slice(field);
        Ok(Self { sequences })
    }

    /// Sequence number carried for `command`.
    #[must_use]
    pub fn sequence(&self, command: Command) -> u8 {
        self.sequences.get(command.index()).copied().unwrap_or(0)
    }

    /// Write the frame into an 8-byte application payload (trailing bytes
    /// zeroed). Used by master-side tooling and the simulator.
    #[must_use]
    pub fn encode(&self) -> [u8; platform::APP_MESSAGE_BYTES] {
        let mut out = [0u8; platform::APP_MESSAGE_BYTES];
        if let Some((tag, rest)) = out.split_first_mut() {
            *tag = COMMAND_TAG;
            for (slot, seq) in rest.iter_mut().zip(self.sequences) {
                *slot = seq;
            }
        }
        out
    }
}

/// Last-seen sequence number per command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceTracker {
    last_seen: [u8; Command::COUNT],
}

impl SequenceTracker {
    /// All counters start at 0, so a master that boots with 0 fires nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_seen: [0; Command::COUNT],
        }
    }

    /// Returns `true` (and records `seq`) when `seq` differs from the last
    /// value seen for `command`.
    pub fn accept(&mut self, command: Command, seq: u8) -> bool {
        match self.last_seen.get_mut(command.index()) {
            Some(last) if *last != seq => {
                *last = seq;
                true
            }
            _ => false,
        }
    }

    /// Last value recorded for `command`.
    #[must_use]
    pub fn last_seen(&self, command: Command) -> u8 {
        self.last_seen.get(command.index()).copied().unwrap_or(0)
    }

    /// Forget every counter.
    pub fn reset(&mut self) {
        self.last_seen = [0; Command::COUNT];
    }
}
