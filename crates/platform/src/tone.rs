//! Tone generator abstraction (piezo buzzers driven by PWM)

/// One of the two independent tone generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneChannel {
    /// Buzzer 1 (melody voice)
    Right,
    /// Buzzer 2 (accompaniment voice)
    Left,
}

impl ToneChannel {
    /// Both channels, in update order.
    pub const ALL: [ToneChannel; 2] = [ToneChannel::Right, ToneChannel::Left];

    /// Short name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ToneChannel::Right => "right",
            ToneChannel::Left => "left",
        }
    }
}

/// Tone output trait.
///
/// Fire-and-forget: the hardware cannot fail in a way the player could act on.
pub trait ToneOutput {
    /// Set the square-wave frequency in Hz. Does not change enable state.
    fn set_frequency(&mut self, channel: ToneChannel, hz: u16);

    /// Start driving the buzzer at the last set frequency.
    fn enable(&mut self, channel: ToneChannel);

    /// Silence the buzzer.
    fn disable(&mut self, channel: ToneChannel);
}
