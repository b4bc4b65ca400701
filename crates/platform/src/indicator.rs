//! Indicator LED abstraction

/// Board indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Red: fault indication
    Red,
    /// Green: link status
    Green,
    /// Blue
    Blue,
    /// White
    White,
}

impl Led {
    /// All LEDs, in board order.
    pub const ALL: [Led; 4] = [Led::Red, Led::Green, Led::Blue, Led::White];

    /// Position of this LED in [`Led::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Led::Red => 0,
            Led::Green => 1,
            Led::Blue => 2,
            Led::White => 3,
        }
    }
}

/// Blink frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkRate {
    /// 1 Hz
    Hz1,
    /// 2 Hz
    Hz2,
    /// 4 Hz
    Hz4,
    /// 8 Hz
    Hz8,
}

impl BlinkRate {
    /// Time the LED stays in each on/off state.
    #[must_use]
    pub const fn half_period_ms(self) -> u32 {
        match self {
            BlinkRate::Hz1 => 500,
            BlinkRate::Hz2 => 250,
            BlinkRate::Hz4 => 125,
            BlinkRate::Hz8 => 62,
        }
    }
}

/// What an LED should be doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPattern {
    /// Dark
    #[default]
    Off,
    /// Solid on
    On,
    /// Toggling at the given rate
    Blink(BlinkRate),
}

/// Indicator trait. Stateless from the caller's point of view.
pub trait Indicator {
    /// Set the pattern an LED shows from now on.
    fn set_indicator(&mut self, led: Led, pattern: LedPattern);
}
